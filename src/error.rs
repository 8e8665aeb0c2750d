use thiserror::Error;

#[derive(Error, Debug)]
pub enum TscvError {
    #[error("Invalid split method '{0}'. Choose 'rolling' or 'sliding'")]
    InvalidPolicy(String),

    #[error("Malformed parameters: {0}")]
    MalformedParameters(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TscvError>;
