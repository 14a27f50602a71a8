use thiserror::Error;

/// Failures of the binary's plumbing. Subsystem and facade calls never fail.
#[derive(Error, Debug)]
pub enum TheaterError {
    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TheaterError>;
