use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Every required column absent from the loaded table, in mapping order.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A column looked up by name during join/projection does not exist.
    #[error("no column named '{0}'")]
    KeyLookup(String),

    /// Wrong positional argument count; carries the usage text to print.
    #[error("{0}")]
    Usage(String),
}
