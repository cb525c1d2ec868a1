//! Block extraction pipeline
//!
//! Two passes over a block's transaction traces, one per record family:
//!
//! - call pass: decode each call's pair-set logs in order, classify the run,
//!   and hand recognized actions to their handlers
//! - reserve pass: every Sync emitted by a tracked pair becomes a reserve
//!   update, whatever call shape surrounds it
//!
//! `extract_block` runs both and merges the results by log ordinal. A log
//! that fails to decode aborts the whole block; an unrecognized run only
//! skips its call.

use tracing::{debug, warn};

use crate::{
    block::{Block, Call},
    classify::{classify, CallAction},
    error::{DecodeError, ExtractError},
    events::{self, EventKind, PairEvent},
    handlers::{burn, mint, swap, sync, CallContext},
    output::Record,
    pair::PairDirectory,
    prices::PriceStore,
    utils,
};

/// Extract action records (swap/mint/burn) from every recognized call.
pub fn extract_events<D, S>(block: &Block, pairs: &D, prices: &S) -> Result<Vec<Record>, ExtractError>
where
    D: PairDirectory,
    S: PriceStore,
{
    let mut records = Vec::new();

    for transaction in &block.transactions {
        let transaction_id = utils::hash_hex(&transaction.hash);
        let transaction_from = utils::address_hex(&transaction.from);

        for call in &transaction.calls {
            if call.state_reverted || call.logs.is_empty() {
                continue;
            }

            let pair = match pairs.resolve(&call.address) {
                Some(pair) => pair,
                None => continue,
            };

            let events = decode_call_events(block, &transaction_id, call)?;
            let ctx = CallContext {
                pair: &pair,
                transaction_id: &transaction_id,
                transaction_from: &transaction_from,
                block_timestamp: block.timestamp,
            };

            debug!(
                pair = %utils::address_hex(&pair.address),
                transaction = %transaction_id,
                call = call.index,
                events = events.len(),
                "classifying call events"
            );

            match classify(&events) {
                CallAction::Mint(action) => records.push(mint::handle(&ctx, &action)),
                CallAction::Burn(action) => records.push(burn::handle(&ctx, &action)),
                CallAction::Swap(action) => records.push(swap::handle(&ctx, &action, prices)),
                CallAction::NoAction => {}
                CallAction::Unrecognized(pattern) => {
                    warn!(
                        pair = %utils::address_hex(&pair.address),
                        transaction = %transaction_id,
                        call = call.index,
                        pattern = %pattern.describe(),
                        "unrecognized event pattern, skipping call"
                    );
                }
            }
        }
    }

    Ok(records)
}

/// Extract a reserve update for every Sync a tracked pair emitted.
pub fn extract_reserve_updates<D>(block: &Block, pairs: &D) -> Result<Vec<Record>, ExtractError>
where
    D: PairDirectory,
{
    let mut records = Vec::new();

    for transaction in &block.transactions {
        let transaction_id = utils::hash_hex(&transaction.hash);
        let transaction_from = utils::address_hex(&transaction.from);

        for call in &transaction.calls {
            if call.state_reverted {
                continue;
            }

            for log in &call.logs {
                let is_sync = match log.topic0() {
                    Some(topic0) => EventKind::from_topic0(topic0) == Some(EventKind::Sync),
                    None => false,
                };
                if !is_sync {
                    continue;
                }

                // Resolve on the emitting address; a pair's Sync can show up
                // in a router call's log list.
                let pair = match pairs.resolve(&log.address) {
                    Some(pair) => pair,
                    None => continue,
                };

                let event = events::sync::decode(log)
                    .map_err(|source| decode_failure(block, &transaction_id, call, log.ordinal, source))?;

                let ctx = CallContext {
                    pair: &pair,
                    transaction_id: &transaction_id,
                    transaction_from: &transaction_from,
                    block_timestamp: block.timestamp,
                };
                records.push(sync::handle(&ctx, &event));
            }
        }
    }

    Ok(records)
}

/// Run both passes and merge the results in block order.
pub fn extract_block<D, S>(block: &Block, pairs: &D, prices: &S) -> Result<Vec<Record>, ExtractError>
where
    D: PairDirectory,
    S: PriceStore,
{
    let mut records = extract_reserve_updates(block, pairs)?;
    records.extend(extract_events(block, pairs, prices)?);
    records.sort_by_key(|record| record.log_ordinal);
    Ok(records)
}

/// Decode a call's logs, keeping only events from the pair set.
///
/// Logs with foreign signatures are filtered out before decoding, so a
/// factory or router log interleaved with pair events never breaks pattern
/// recognition. Malformed pair-set logs abort the block.
fn decode_call_events(
    block: &Block,
    transaction_id: &str,
    call: &Call,
) -> Result<Vec<PairEvent>, ExtractError> {
    let mut events = Vec::with_capacity(call.logs.len());

    for log in &call.logs {
        let topic0 = match log.topic0() {
            Some(topic0) => topic0,
            None => continue,
        };
        if EventKind::from_topic0(topic0).is_none() {
            continue;
        }

        let event = PairEvent::decode(log)
            .map_err(|source| decode_failure(block, transaction_id, call, log.ordinal, source))?;
        events.push(event);
    }

    Ok(events)
}

fn decode_failure(
    block: &Block,
    transaction_id: &str,
    call: &Call,
    log_ordinal: u64,
    source: DecodeError,
) -> ExtractError {
    ExtractError::Decode {
        block_number: block.number,
        transaction_id: transaction_id.to_string(),
        call_index: call.index,
        log_ordinal,
        source,
    }
}
