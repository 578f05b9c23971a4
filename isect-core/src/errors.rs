use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionSetError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Can't read file {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}:{line}: {reason}\n  offending line: {content:?}")]
    Parse {
        origin: String,
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Invalid coordinates {chr}:{start}-{end}: start is greater than end")]
    InvalidCoordinates { chr: String, start: u32, end: u32 },

    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    #[error("Unknown chromosome naming convention: {0}")]
    UnknownChromNaming(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RegionSetError {
    /// Attach a location to a failure found while parsing one line.
    pub fn at_line(origin: &str, line: usize, content: &str, reason: impl Into<String>) -> Self {
        RegionSetError::Parse {
            origin: origin.to_owned(),
            line,
            content: content.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegionSetError>;
