//! Call-sequence classification
//!
//! A pair contract emits a fixed log shape per operation, with Sync always
//! directly before the economic event. One call's ordered event run is
//! matched against that table:
//!
//! - Transfer, Transfer, Sync, Mint: mint with a protocol-fee mint first
//! - Transfer, Transfer, Sync, Burn: burn with the LP return transfer first
//! - Transfer, Sync, Mint: plain mint
//! - Transfer, Sync, Burn: plain burn
//! - Sync, Swap: swap
//! - a lone Transfer or Approval: nothing to record
//!
//! Anything else is reported as unrecognized and skipped; it never aborts
//! the block.

use alloy::primitives::U256;

use crate::events::{BurnEvent, EventKind, MintEvent, PairEvent, SwapEvent, SyncEvent, TransferEvent};

/// Liquidity deposit recognized from a call's event run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAction {
    /// Protocol-fee mint preceding the deposit, present on the 4-log shape.
    pub fee_transfer: Option<TransferEvent>,
    /// Transfer minting LP tokens to the depositor.
    pub liquidity_transfer: TransferEvent,
    pub sync: SyncEvent,
    pub mint: MintEvent,
}

impl MintAction {
    /// Raw LP token amount minted to the depositor.
    pub fn liquidity(&self) -> U256 {
        self.liquidity_transfer.value
    }
}

/// Liquidity withdrawal recognized from a call's event run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnAction {
    /// LP tokens moving back to the pair before the burn, present on the
    /// 4-log shape.
    pub leading_transfer: Option<TransferEvent>,
    /// Transfer burning the withdrawn LP tokens.
    pub liquidity_transfer: TransferEvent,
    pub sync: SyncEvent,
    pub burn: BurnEvent,
}

impl BurnAction {
    /// Raw LP token amount burned.
    pub fn liquidity(&self) -> U256 {
        self.liquidity_transfer.value
    }
}

/// Trade recognized from a call's event run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAction {
    pub sync: SyncEvent,
    pub swap: SwapEvent,
}

/// Event run that matches no known call shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedPattern {
    /// Event kinds in log order.
    pub kinds: Vec<EventKind>,
    /// Number of events in the run.
    pub count: usize,
}

impl UnrecognizedPattern {
    /// Comma-joined kind names, for log output.
    pub fn describe(&self) -> String {
        self.kinds
            .iter()
            .map(EventKind::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Canonical interpretation of one call's event run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallAction {
    Mint(MintAction),
    Burn(BurnAction),
    Swap(SwapAction),
    /// A lone Transfer or Approval; nothing to record.
    NoAction,
    /// A run matching no known shape; reported and skipped.
    Unrecognized(UnrecognizedPattern),
}

/// Classify one call's ordered event run into a canonical action.
///
/// Pure function of the run; patterns must match in full, so a 2-log run
/// whose head is not Sync falls through to `Unrecognized`.
pub fn classify(events: &[PairEvent]) -> CallAction {
    use PairEvent::{Approval, Burn, Mint, Swap, Sync, Transfer};

    match events {
        [Transfer(fee), Transfer(liquidity), Sync(sync), Mint(mint)] => {
            CallAction::Mint(MintAction {
                fee_transfer: Some(fee.clone()),
                liquidity_transfer: liquidity.clone(),
                sync: sync.clone(),
                mint: mint.clone(),
            })
        }
        [Transfer(leading), Transfer(liquidity), Sync(sync), Burn(burn)] => {
            CallAction::Burn(BurnAction {
                leading_transfer: Some(leading.clone()),
                liquidity_transfer: liquidity.clone(),
                sync: sync.clone(),
                burn: burn.clone(),
            })
        }
        [Transfer(liquidity), Sync(sync), Mint(mint)] => CallAction::Mint(MintAction {
            fee_transfer: None,
            liquidity_transfer: liquidity.clone(),
            sync: sync.clone(),
            mint: mint.clone(),
        }),
        [Transfer(liquidity), Sync(sync), Burn(burn)] => CallAction::Burn(BurnAction {
            leading_transfer: None,
            liquidity_transfer: liquidity.clone(),
            sync: sync.clone(),
            burn: burn.clone(),
        }),
        [Sync(sync), Swap(swap)] => CallAction::Swap(SwapAction {
            sync: sync.clone(),
            swap: swap.clone(),
        }),
        [Transfer(_)] | [Approval(_)] => CallAction::NoAction,
        other => CallAction::Unrecognized(UnrecognizedPattern {
            kinds: other.iter().map(PairEvent::kind).collect(),
            count: other.len(),
        }),
    }
}
