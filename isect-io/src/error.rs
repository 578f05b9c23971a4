use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for isect-io operations.
#[derive(Error, Debug)]
pub enum WriteError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to create parent directories for file.
    #[error("Failed to create parent directories for {0}")]
    ParentDirectoryCreation(PathBuf),
}

/// Result type alias for isect-io operations.
pub type Result<T> = std::result::Result<T, WriteError>;
