use anyhow::Result;
use etl_core::StageReport;
use snapshot_io::DelimitedTable;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::classify;

pub const STAGE_LABEL: &str = "Task 5";

pub const OUTPUT_HEADERS: [&str; 5] = ["ID", "AGENT", "TYPE", "CONFIDENCE", "SECURITY"];

/// Inner-join the pull-request table (`ID`) with the task-type table
/// (`PRID`), flag each pair from its `TITLE`/`BODYSTRING` and write
/// `ID, AGENT, TYPE, CONFIDENCE, SECURITY`.
///
/// Pairs are emitted left row by left row; a key repeated on either side
/// yields every matching pair. Column names are looked up without any
/// upfront check, so a missing one surfaces as `EtlError::KeyLookup`.
pub fn run_security(prs_path: &Path, task_types_path: &Path, output: &Path) -> Result<StageReport> {
    etl_core::require_file(prs_path)?;
    etl_core::require_file(task_types_path)?;

    let prs = DelimitedTable::read(prs_path)?;
    let task_types = DelimitedTable::read(task_types_path)?;
    info!(pull_requests = prs.len(), task_types = task_types.len(), "loaded join inputs");

    let left_key = prs.column("ID")?;
    let right_key = task_types.column("PRID")?;
    let title = prs.find_column("TITLE");
    let body = prs.find_column("BODYSTRING");
    let agent = prs.column("AGENTNAME")?;
    let pr_type = task_types.column("PRTYPE")?;
    let confidence = task_types.column("CONFIDENCE")?;

    let mut by_key: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, row) in task_types.rows().iter().enumerate() {
        by_key.entry(&row[right_key]).or_default().push(i);
    }

    let mut rows: Vec<[String; 5]> = Vec::new();
    for pr in prs.rows() {
        let Some(matches) = by_key.get(&pr[left_key]) else { continue };
        let flag = classify(title.and_then(|i| pr.get(i)), body.and_then(|i| pr.get(i)));
        for &m in matches {
            let tt = &task_types.rows()[m];
            rows.push([
                pr[left_key].to_string(),
                pr[agent].to_string(),
                tt[pr_type].to_string(),
                tt[confidence].to_string(),
                flag.to_string(),
            ]);
        }
    }
    let flagged = rows.iter().filter(|r| r[4] == "1").count();
    debug!(pairs = rows.len(), flagged, "joined pull requests with task types");

    etl_core::ensure_parent_dir(output)?;
    let written = rows.len();
    snapshot_io::export_rows_to_csv(&OUTPUT_HEADERS, rows, output)?;
    info!(rows = written, output = %output.display(), "stage written");

    Ok(StageReport { stage: STAGE_LABEL, rows: written, output: output.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use etl_core::EtlError;
    use snapshot_io::export_rows_to_csv;
    use std::path::PathBuf;

    const PR_HEADERS: [&str; 6] = ["TITLE", "ID", "AGENTNAME", "BODYSTRING", "REPOID", "REPOURL"];
    const TT_HEADERS: [&str; 5] = ["PRID", "PRTITLE", "PRREASON", "PRTYPE", "CONFIDENCE"];

    fn pr(id: &str, agent: &str, title: &str, body: &str) -> Vec<String> {
        [title, id, agent, body, "99", "https://api.github.com/repos/o/r"].map(String::from).to_vec()
    }

    fn tt(id: &str, ty: &str, conf: &str) -> Vec<String> {
        [id, "t", "r", ty, conf].map(String::from).to_vec()
    }

    fn inputs(dir: &Path, prs: Vec<Vec<String>>, tts: Vec<Vec<String>>) -> (PathBuf, PathBuf) {
        let p = dir.join("task1_output.csv");
        let t = dir.join("task3_output.csv");
        export_rows_to_csv(&PR_HEADERS, prs, &p).unwrap();
        export_rows_to_csv(&TT_HEADERS, tts, &t).unwrap();
        (p, t)
    }

    #[test]
    fn keeps_only_ids_present_on_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        let (p, t) = inputs(
            dir.path(),
            vec![
                pr("1", "Codex", "Add docs", ""),
                pr("2", "Devin", "Fix race in cache", ""),
                pr("3", "Copilot", "Refactor", "cleanup"),
            ],
            // deliberately out of order relative to the PR table
            vec![tt("4", "chore", "0.1"), tt("3", "refactor", "0.8"), tt("2", "fix", "0.95")],
        );
        let out = dir.path().join("task5_output.csv");

        let report = run_security(&p, &t, &out).unwrap();
        assert_eq!(report.rows, 2);

        let table = DelimitedTable::read(&out).unwrap();
        assert_eq!(table.headers(), OUTPUT_HEADERS);
        let rows: Vec<Vec<&str>> = table.rows().iter().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec![
            vec!["2", "Devin", "fix", "0.95", "1"],
            vec!["3", "Copilot", "refactor", "0.8", "0"],
        ]);
    }

    #[test]
    fn duplicate_left_key_multiplies_rows() {
        let dir = tempfile::tempdir().unwrap();
        let (p, t) = inputs(
            dir.path(),
            vec![pr("5", "Codex", "first", ""), pr("5", "Devin", "second", "security")],
            vec![tt("5", "feat", "0.7")],
        );
        let out = dir.path().join("task5_output.csv");

        run_security(&p, &t, &out).unwrap();
        let table = DelimitedTable::read(&out).unwrap();
        assert_eq!(table.len(), 2);
        for row in table.rows() {
            assert_eq!(&row[0], "5");
            assert_eq!(&row[2], "feat");
            assert_eq!(&row[3], "0.7");
        }
        assert_eq!(&table.rows()[0][1], "Codex");
        assert_eq!(&table.rows()[0][4], "0");
        assert_eq!(&table.rows()[1][4], "1");
    }

    #[test]
    fn duplicate_keys_on_both_sides_emit_left_outer_right_inner() {
        let dir = tempfile::tempdir().unwrap();
        let (p, t) = inputs(
            dir.path(),
            vec![pr("8", "A", "x", ""), pr("8", "B", "y", "")],
            vec![tt("8", "fix", "0.1"), tt("8", "docs", "0.2")],
        );
        let out = dir.path().join("task5_output.csv");

        run_security(&p, &t, &out).unwrap();
        let table = DelimitedTable::read(&out).unwrap();
        let pairs: Vec<(&str, &str)> = table.rows().iter().map(|r| (&r[1], &r[2])).collect();
        assert_eq!(pairs, [("A", "fix"), ("A", "docs"), ("B", "fix"), ("B", "docs")]);
    }

    #[test]
    fn missing_text_columns_count_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("prs.csv");
        let t = dir.path().join("tt.csv");
        export_rows_to_csv(&["ID", "AGENTNAME"], vec![vec!["1", "Codex"]], &p).unwrap();
        export_rows_to_csv(&TT_HEADERS, vec![tt("1", "fix", "0.5")], &t).unwrap();
        let out = dir.path().join("task5_output.csv");

        run_security(&p, &t, &out).unwrap();
        let table = DelimitedTable::read(&out).unwrap();
        assert_eq!(&table.rows()[0][4], "0");
    }

    #[test]
    fn missing_projection_column_is_key_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("prs.csv");
        let t = dir.path().join("tt.csv");
        export_rows_to_csv(&PR_HEADERS, vec![pr("1", "Codex", "t", "b")], &p).unwrap();
        export_rows_to_csv(&["PRID", "PRTYPE"], vec![vec!["1", "fix"]], &t).unwrap();
        let out = dir.path().join("task5_output.csv");

        let err = run_security(&p, &t, &out).unwrap_err();
        assert!(matches!(err.downcast_ref::<EtlError>(), Some(EtlError::KeyLookup(c)) if c == "CONFIDENCE"));
        assert!(!out.exists());
    }

    #[test]
    fn each_missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (p, t) = inputs(dir.path(), vec![], vec![]);
        let ghost = dir.path().join("missing.csv");
        let out = dir.path().join("o.csv");

        let err = run_security(&ghost, &t, &out).unwrap_err();
        assert!(matches!(err.downcast_ref::<EtlError>(), Some(EtlError::FileNotFound(x)) if x == &ghost));
        let err = run_security(&p, &ghost, &out).unwrap_err();
        assert!(matches!(err.downcast_ref::<EtlError>(), Some(EtlError::FileNotFound(x)) if x == &ghost));
    }

    #[test]
    fn empty_inputs_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let (p, t) = inputs(dir.path(), vec![], vec![]);
        let out = dir.path().join("nested").join("task5_output.csv");

        let report = run_security(&p, &t, &out).unwrap();
        assert_eq!(report.rows, 0);
        assert_eq!(DelimitedTable::read(&out).unwrap().headers(), OUTPUT_HEADERS);
    }
}
