use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the shape model and the commands that mutate it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The tool or kind name does not describe a drawable shape
    #[error("unsupported shape kind: {0}")]
    UnsupportedKind(String),

    /// No shape occupies the requested slot
    #[error("no shape with id {id}")]
    UnknownShape { id: usize },

    /// A new shape must take the next dense index
    #[error("shape id mismatch: expected {expected}, found {found}")]
    IdMismatch { expected: usize, found: usize },
}

/// Result type for shape model operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors that can occur while loading the sketch configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
