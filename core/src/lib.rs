//! Core utilities and shared types for the snapshot ETL pipeline.

use std::path::{Path, PathBuf};

pub mod error;

pub use error::EtlError;

pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Outcome of one successful stage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Human label used in the completion line, e.g. "Task 1".
    pub stage: &'static str,
    pub rows: usize,
    pub output: PathBuf,
}

impl StageReport {
    /// Output path made absolute when it can be resolved, otherwise as given.
    pub fn resolved_output(&self) -> PathBuf {
        std::fs::canonicalize(&self.output).unwrap_or_else(|_| self.output.clone())
    }
}

/// Fail with [`EtlError::FileNotFound`] before any read is attempted.
pub fn require_file(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        return Err(EtlError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(())
}

/// Create the directory that will hold `out`, if any.
pub fn ensure_parent_dir(out: &Path) -> anyhow::Result<()> {
    if let Some(dir) = out.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }

    #[test]
    fn require_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.parquet");
        let err = require_file(&missing).unwrap_err();
        match err.downcast_ref::<EtlError>() {
            Some(EtlError::FileNotFound(p)) => assert_eq!(p, &missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parent_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("out.csv");
        ensure_parent_dir(&out).unwrap();
        assert!(out.parent().unwrap().is_dir());
        // bare file names have no directory to create
        ensure_parent_dir(Path::new("out.csv")).unwrap();
    }
}
