//! Exchange extractor binary
//!
//! Feeds block trace files through the extraction core: loads the pair
//! directory and price fixtures, processes each block file given on the
//! command line, and emits one JSON record per line.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use error::AppError;
use redis_client::RecordPublisher;

mod error;
mod redis_client;
mod service;

mod defaults {
    pub const PAIRS_FILE: &str = "pairs.json";
    pub const PRICES_FILE: &str = "prices.json";
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extractor=info,exchange_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pairs_file = env::var("PAIRS_FILE").unwrap_or_else(|_| defaults::PAIRS_FILE.into());
    let prices_file = env::var("PRICES_FILE").unwrap_or_else(|_| defaults::PRICES_FILE.into());

    // Publishing is opt-in; without REDIS_URL records only go to stdout.
    let publisher = match env::var("REDIS_URL") {
        Ok(redis_url) => Some(RecordPublisher::new(&redis_url).await?),
        Err(_) => None,
    };

    let block_files: Vec<String> = env::args().skip(1).collect();
    if block_files.is_empty() {
        return Err(AppError::NoBlockFiles);
    }

    tracing::info!(blocks = block_files.len(), "starting extractor");

    service::run(&pairs_file, &prices_file, publisher, &block_files).await
}
