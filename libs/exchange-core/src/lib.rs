//! Extraction core for UniswapV2-compatible pair activity
//!
//! Decodes pair-contract logs, classifies each call's ordered event run into
//! a canonical action, and computes decimal-normalized records (reserve
//! updates, mints, burns, swaps) against point-in-time pair and price
//! stores.

pub mod block;
pub mod classify;
pub mod decimal;
pub mod error;
pub mod events;
pub mod extract;
pub mod handlers;
pub mod output;
pub mod pair;
pub mod prices;
pub mod utils;

pub use block::{Block, Call, RawLog, TransactionTrace};
pub use classify::{classify, BurnAction, CallAction, MintAction, SwapAction, UnrecognizedPattern};
pub use error::{DecodeError, ExtractError};
pub use events::{EventKind, PairEvent};
pub use extract::{extract_block, extract_events, extract_reserve_updates};
pub use output::{Record, RecordKind};
pub use pair::{MemoryPairDirectory, PairDirectory, PairMetadata, PairToken};
pub use prices::{Currency, MemoryPriceStore, PriceStore};
