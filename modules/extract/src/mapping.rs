//! Static column mappings for the four extraction stages.

/// Per-cell rewrite applied to one projected column before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTransform {
    /// Null to empty, non-ASCII dropped.
    AsciiOnly,
}

/// One `source -> target` column rename, optionally post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub source: &'static str,
    pub target: &'static str,
    pub transform: Option<CellTransform>,
}

const fn rename(source: &'static str, target: &'static str) -> ColumnMap {
    ColumnMap { source, target, transform: None }
}

/// Configuration of one extraction stage. Output column order is the order
/// of `columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    /// CLI command name.
    pub name: &'static str,
    /// Label used in the completion line.
    pub label: &'static str,
    /// File name under the data directory.
    pub default_input: &'static str,
    /// File name under the output directory.
    pub default_output: &'static str,
    pub columns: &'static [ColumnMap],
}

impl StageSpec {
    pub fn source_columns(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.source)
    }

    pub fn target_columns(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.target)
    }
}

pub const PULL_REQUESTS: StageSpec = StageSpec {
    name: "pull-requests",
    label: "Task 1",
    default_input: "all_pull_request.parquet",
    default_output: "task1_output.csv",
    columns: &[
        rename("title", "TITLE"),
        rename("id", "ID"),
        rename("agent", "AGENTNAME"),
        rename("body", "BODYSTRING"),
        rename("repo_id", "REPOID"),
        rename("repo_url", "REPOURL"),
    ],
};

pub const REPOSITORIES: StageSpec = StageSpec {
    name: "repositories",
    label: "Task 2",
    default_input: "all_repository.parquet",
    default_output: "task2_output.csv",
    columns: &[
        rename("id", "REPOID"),
        rename("language", "LANG"),
        rename("stars", "STARS"),
        rename("url", "REPOURL"),
    ],
};

pub const TASK_TYPES: StageSpec = StageSpec {
    name: "task-types",
    label: "Task 3",
    default_input: "pr_task_type.parquet",
    default_output: "task3_output.csv",
    columns: &[
        rename("id", "PRID"),
        rename("title", "PRTITLE"),
        rename("reason", "PRREASON"),
        rename("type", "PRTYPE"),
        rename("confidence", "CONFIDENCE"),
    ],
};

pub const COMMIT_DETAILS: StageSpec = StageSpec {
    name: "commit-details",
    label: "Task 4",
    default_input: "pr_commit_details.parquet",
    default_output: "task4_output.csv",
    columns: &[
        rename("pr_id", "PRID"),
        rename("sha", "PRSHA"),
        rename("message", "PRCOMMITMESSAGE"),
        rename("filename", "PRFILE"),
        rename("status", "PRSTATUS"),
        rename("additions", "PRADDS"),
        // double S is the published header
        rename("deletions", "PRDELSS"),
        rename("changes", "PRCHANGECOUNT"),
        ColumnMap { source: "patch", target: "PRDIFF", transform: Some(CellTransform::AsciiOnly) },
    ],
};

/// All extraction stages in pipeline order.
pub const ALL_STAGES: [StageSpec; 4] = [PULL_REQUESTS, REPOSITORIES, TASK_TYPES, COMMIT_DETAILS];
