//! Extraction service
//!
//! Loads the pair directory and price fixtures into the in-memory stores,
//! then processes each block file in order: parse, extract, emit. Records go
//! to stdout as JSON lines; with a publisher configured they also fan out to
//! Redis.

use std::{fs, str::FromStr};

use alloy::primitives::Address;
use bigdecimal::BigDecimal;
use serde::Deserialize;
use tracing::{info, warn};

use exchange_core::{
    extract_block, Block, Currency, MemoryPairDirectory, MemoryPriceStore, PairMetadata,
};

use crate::{error::AppError, redis_client::RecordPublisher};

/// One recorded unit price, as stored in the prices fixture file.
#[derive(Debug, Deserialize)]
struct PricePoint {
    ordinal: u64,
    token: Address,
    currency: Currency,
    price: String,
}

/// Process every block file against the loaded stores.
pub async fn run(
    pairs_file: &str,
    prices_file: &str,
    mut publisher: Option<RecordPublisher>,
    block_files: &[String],
) -> Result<(), AppError> {
    let pairs = load_pairs(pairs_file)?;
    let prices = load_prices(prices_file)?;
    info!(pairs = pairs.len(), "pair directory loaded");

    for path in block_files {
        let payload = fs::read_to_string(path)
            .map_err(|e| AppError::BlockFile(path.clone(), e.to_string()))?;
        let block: Block = serde_json::from_str(&payload)?;

        info!(
            block = block.number,
            transactions = block.transactions.len(),
            "processing block"
        );

        let records = extract_block(&block, &pairs, &prices)?;

        for record in &records {
            println!("{}", serde_json::to_string(record)?);

            if let Some(publisher) = publisher.as_mut() {
                // Keep stdout authoritative; a lost publish should not stop
                // the run.
                if let Err(e) = publisher.publish(record).await {
                    warn!(kind = record.kind_name(), "Redis publish error: {e}");
                }
            }
        }

        info!(block = block.number, records = records.len(), "block extracted");
    }

    Ok(())
}

fn load_pairs(path: &str) -> Result<MemoryPairDirectory, AppError> {
    let payload =
        fs::read_to_string(path).map_err(|e| AppError::PairsFile(path.to_string(), e.to_string()))?;
    let entries: Vec<PairMetadata> = serde_json::from_str(&payload)?;

    let mut directory = MemoryPairDirectory::new();
    for pair in entries {
        directory.insert(pair);
    }
    Ok(directory)
}

fn load_prices(path: &str) -> Result<MemoryPriceStore, AppError> {
    let payload = fs::read_to_string(path)
        .map_err(|e| AppError::PricesFile(path.to_string(), e.to_string()))?;
    let points: Vec<PricePoint> = serde_json::from_str(&payload)?;

    let mut store = MemoryPriceStore::new();
    for point in points {
        let price = BigDecimal::from_str(&point.price)
            .map_err(|e| AppError::PriceValue(point.price.clone(), e.to_string()))?;
        store.set(point.ordinal, point.token, point.currency, price);
    }
    Ok(store)
}
