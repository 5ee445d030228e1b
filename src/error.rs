use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprayPlanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("No spray offset configured for crop '{0}'")]
    MissingOffset(String),

    #[error("Invalid spray offset {offset} for crop '{crop}' (must be 1-12)")]
    InvalidOffset { crop: String, offset: i64 },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SprayPlanError>;
