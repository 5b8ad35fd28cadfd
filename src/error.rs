// ABOUTME: Application-wide error types for cf-swap.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::swap::SwapError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("unknown destination: {0}")]
    UnknownDestination(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Swap(#[from] SwapError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Platform output that accompanied the failure, if any.
    pub fn platform_output(&self) -> &[String] {
        match self {
            Error::Swap(e) => e.output(),
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
