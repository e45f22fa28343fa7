use thiserror::Error;

// Errors only arise at the configuration boundary; the calculation itself cannot fail.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    #[error("Invalid percentage range: {0}")]
    InvalidRange(String),
}
