use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::info;

use exchange_core::{Record, RecordKind};

use crate::error::AppError;

/// Redis publisher for the hot path (real-time record streaming)
pub struct RecordPublisher {
    connection: MultiplexedConnection,
}

impl RecordPublisher {
    /// Create a new publisher connected to the given Redis URL
    pub async fn new(redis_url: &str) -> Result<Self, AppError> {
        let client =
            Client::open(redis_url).map_err(|e| AppError::RedisConnection(e.to_string()))?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::RedisConnection(e.to_string()))?;

        info!("Connected to Redis at {}", redis_url);
        Ok(Self { connection })
    }

    /// Publish a record to its kind's channel
    pub async fn publish(&mut self, record: &Record) -> Result<(), AppError> {
        let channel = channel_for(record);
        let payload = serde_json::to_string(record)?;

        self.connection
            .publish::<_, _, ()>(channel, payload)
            .await
            .map_err(|e| AppError::RedisPublish(e.to_string()))?;
        Ok(())
    }
}

/// Redis channels for extracted records
pub mod channels {
    /// Channel for reserve updates
    pub const RESERVES: &str = "exchange:records:reserves";
    /// Channel for swap records
    pub const SWAPS: &str = "exchange:records:swaps";
    /// Channel for mint and burn records
    pub const LIQUIDITY: &str = "exchange:records:liquidity";
}

/// Map a record kind to its channel
fn channel_for(record: &Record) -> &'static str {
    match record.kind {
        RecordKind::ReserveUpdate { .. } => channels::RESERVES,
        RecordKind::Swap { .. } => channels::SWAPS,
        RecordKind::Mint { .. } | RecordKind::Burn { .. } => channels::LIQUIDITY,
    }
}
