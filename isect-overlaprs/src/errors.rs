use thiserror::Error;

/// Errors raised while configuring an intersection.
#[derive(Debug, Error)]
pub enum IntersectError {
    #[error("Invalid backend: {0}. Valid options are 'sweep' or 'index'")]
    UnknownBackend(String),
    #[error("Invalid mode: {0}. Valid options are 'any', 'portion', 'pairs', 'none' or 'count'")]
    UnknownMode(String),
    #[error("Invalid strandedness: {0}. Valid options are 'ignore', 'same' or 'opposite'")]
    UnknownStrandedness(String),
}
