use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No block files given, pass at least one path")]
    NoBlockFiles,

    #[error("Failed to read pairs file `{0}`: {1}")]
    PairsFile(String, String),

    #[error("Failed to read prices file `{0}`: {1}")]
    PricesFile(String, String),

    #[error("Failed to read block file `{0}`: {1}")]
    BlockFile(String, String),

    #[error("Invalid price value `{0}`: {1}")]
    PriceValue(String, String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Extraction failed: {0}")]
    Extract(#[from] exchange_core::ExtractError),

    #[error("Redis connection error: {0}")]
    RedisConnection(String),

    #[error("Redis publish error: {0}")]
    RedisPublish(String),
}
