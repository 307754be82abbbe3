use thiserror::Error;

/// Errors from loading configuration or layout snapshots.
///
/// Navigation itself never fails; empty or out-of-range input is a no-op.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
