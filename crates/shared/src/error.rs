use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RosterError {
    #[error("student index {index} out of range for roster of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("failed to load seed file '{}': {reason}", .path.display())]
    SeedFile { path: PathBuf, reason: String },
}

impl RosterError {
    pub fn seed_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::SeedFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
