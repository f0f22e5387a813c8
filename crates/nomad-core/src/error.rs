// crates/nomad-core/src/error.rs
use thiserror::Error;

/// Errors raised by the I/O facing parts of the crate (loader, stores, config).
///
/// Filtering, sorting and the URL codec never fail; they substitute field
/// defaults instead.
#[derive(Debug, Error)]
pub enum NomadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, NomadError>;
