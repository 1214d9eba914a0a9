use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_CONFIG: &str = "agentpr.yaml";

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the raw parquet snapshots.
    pub data_dir: Option<PathBuf>,
    /// Directory the stage CSVs are written to (and read back from by task 5).
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn layout(&self) -> Layout {
        Layout {
            data_dir: self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data")),
            output_dir: self.output_dir.clone().unwrap_or_else(|| PathBuf::from("output")),
        }
    }
}

/// Where default stage paths resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Layout {
    pub fn input(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    pub fn output(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }
}

/// Load `path`, or `./agentpr.yaml` if present. Unreadable or malformed
/// files are logged and ignored.
pub fn load_config(path: Option<&Path>) -> Option<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = Path::new(DEFAULT_CONFIG);
            if p.exists() { p.to_path_buf() } else { return None; }
        }
    };
    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config not readable, using defaults");
            return None;
        }
    };
    match serde_yaml::from_str(&s) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config not valid YAML, using defaults");
            None
        }
    }
}
