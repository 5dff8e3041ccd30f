use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrungeStripError {
    #[error("Failed to read input: {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid texture pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrungeStripError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
