use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectGenError {
    /// Missing or invalid parameter, detected before any file is touched.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

impl ProjectGenError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    /// Process exit code the CLI reports for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Io { .. } => 1,
        }
    }
}
