//! Error types for log decoding and block extraction.

use thiserror::Error;

/// Failure to decode a raw log into a typed pair event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("log has no topics")]
    MissingSignature,

    #[error("{event}: expected {expected} topics, got {actual}")]
    MissingTopics {
        event: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{event}: expected at least {expected} bytes of data, got {actual}")]
    ShortData {
        event: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown event signature: {topic0}")]
    UnknownSignature { topic0: String },
}

/// Fatal extraction failure; the enclosing block is abandoned.
///
/// Carries enough identifiers to locate the offending log without replaying
/// the block.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(
        "block {block_number}, transaction {transaction_id}, call {call_index}, \
         log ordinal {log_ordinal}: {source}"
    )]
    Decode {
        block_number: u64,
        transaction_id: String,
        call_index: u32,
        log_ordinal: u64,
        #[source]
        source: DecodeError,
    },
}
