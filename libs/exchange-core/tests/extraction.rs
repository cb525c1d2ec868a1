//! Block-level extraction behavior: pass interaction, skip semantics, and
//! exact output values.

use alloy::primitives::{b256, Address, B256, U256};
use bigdecimal::BigDecimal;

use exchange_core::{
    events::topics, extract_block, extract_events, extract_reserve_updates, Block, Call, Currency,
    DecodeError, ExtractError, MemoryPairDirectory, MemoryPriceStore, PairMetadata, PairToken,
    RawLog, RecordKind, TransactionTrace,
};

const PAIR: Address = Address::repeat_byte(0xAA);
const TOKEN0: Address = Address::repeat_byte(0x01);
const TOKEN1: Address = Address::repeat_byte(0x02);
const TRADER: Address = Address::repeat_byte(0x05);

fn e18(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18))
}

fn topic_address(address: Address) -> B256 {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    B256::from(word)
}

fn words(values: &[U256]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|value| value.to_be_bytes::<32>())
        .collect()
}

fn sync_log(ordinal: u64, reserve0: U256, reserve1: U256) -> RawLog {
    RawLog {
        address: PAIR,
        topics: vec![topics::SYNC],
        data: words(&[reserve0, reserve1]).into(),
        ordinal,
    }
}

fn swap_log(ordinal: u64, amounts: [U256; 4]) -> RawLog {
    RawLog {
        address: PAIR,
        topics: vec![topics::SWAP, topic_address(TRADER), topic_address(TRADER)],
        data: words(&amounts).into(),
        ordinal,
    }
}

fn transfer_log(ordinal: u64, from: Address, to: Address, value: U256) -> RawLog {
    RawLog {
        address: PAIR,
        topics: vec![topics::TRANSFER, topic_address(from), topic_address(to)],
        data: words(&[value]).into(),
        ordinal,
    }
}

fn mint_log(ordinal: u64, amount0: U256, amount1: U256) -> RawLog {
    RawLog {
        address: PAIR,
        topics: vec![topics::MINT, topic_address(TRADER)],
        data: words(&[amount0, amount1]).into(),
        ordinal,
    }
}

fn burn_log(ordinal: u64, amount0: U256, amount1: U256, to: Address) -> RawLog {
    RawLog {
        address: PAIR,
        topics: vec![topics::BURN, topic_address(TRADER), topic_address(to)],
        data: words(&[amount0, amount1]).into(),
        ordinal,
    }
}

fn call(logs: Vec<RawLog>) -> Call {
    Call {
        address: PAIR,
        index: 1,
        state_reverted: false,
        logs,
    }
}

fn block(calls: Vec<Call>) -> Block {
    Block {
        number: 6_810_706,
        timestamp: 1_600_417_794,
        transactions: vec![TransactionTrace {
            hash: B256::repeat_byte(0xAB),
            from: Address::repeat_byte(0xCD),
            calls,
        }],
    }
}

fn directory() -> MemoryPairDirectory {
    let mut directory = MemoryPairDirectory::new();
    directory.insert(PairMetadata {
        address: PAIR,
        token0: PairToken {
            address: TOKEN0,
            decimals: 18,
        },
        token1: PairToken {
            address: TOKEN1,
            decimals: 18,
        },
    });
    directory
}

#[test]
fn swap_block_yields_reserve_update_then_swap() {
    let block = block(vec![call(vec![
        sync_log(7, e18(1_000), e18(2_000)),
        swap_log(8, [e18(10), U256::ZERO, U256::ZERO, e18(19)]),
    ])]);

    let mut prices = MemoryPriceStore::new();
    prices.set(5, TOKEN0, Currency::Usd, BigDecimal::from(1));

    let records = extract_block(&block, &directory(), &prices).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].log_ordinal, 7);
    match &records[0].kind {
        RecordKind::ReserveUpdate {
            reserve0,
            reserve1,
            token0_price,
            token1_price,
        } => {
            assert_eq!(reserve0, "1000");
            assert_eq!(reserve1, "2000");
            assert_eq!(token0_price, "2");
            assert_eq!(token1_price, "0.5");
        }
        other => panic!("expected reserve update, got {other:?}"),
    }

    assert_eq!(records[1].log_ordinal, 8);
    assert_eq!(
        records[1].transaction_id,
        "0xabababababababababababababababababababababababababababababababab"
    );
    match &records[1].kind {
        RecordKind::Swap {
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            amount_usd,
            amount_native,
            from,
            ..
        } => {
            assert_eq!(amount0_in, "10");
            assert_eq!(amount1_in, "0");
            assert_eq!(amount0_out, "0");
            assert_eq!(amount1_out, "19");
            assert_eq!(amount_usd, "10");
            assert_eq!(amount_native, "0");
            assert_eq!(from, "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd");
        }
        other => panic!("expected swap, got {other:?}"),
    }
}

#[test]
fn unrecognized_call_is_skipped_and_the_block_continues() {
    // First call is a 2-log run whose head is not Sync; second is a valid
    // swap.
    let block = block(vec![
        call(vec![
            transfer_log(1, TRADER, PAIR, e18(1)),
            swap_log(2, [e18(1), U256::ZERO, U256::ZERO, e18(2)]),
        ]),
        call(vec![
            sync_log(3, e18(1_000), e18(2_000)),
            swap_log(4, [e18(10), U256::ZERO, U256::ZERO, e18(19)]),
        ]),
    ]);

    let records = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].log_ordinal, 4);
    assert_eq!(records[0].kind_name(), "swap");
}

#[test]
fn malformed_pair_log_aborts_the_block() {
    let truncated = RawLog {
        address: PAIR,
        topics: vec![topics::SWAP, topic_address(TRADER), topic_address(TRADER)],
        data: words(&[e18(10), U256::ZERO]).into(),
        ordinal: 8,
    };
    let block = block(vec![call(vec![sync_log(7, e18(1_000), e18(2_000)), truncated])]);

    let err = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap_err();
    match err {
        ExtractError::Decode {
            block_number,
            log_ordinal,
            source,
            ..
        } => {
            assert_eq!(block_number, 6_810_706);
            assert_eq!(log_ordinal, 8);
            assert_eq!(
                source,
                DecodeError::ShortData {
                    event: "Swap",
                    expected: 128,
                    actual: 64
                }
            );
        }
    }
}

#[test]
fn untracked_pairs_are_ignored_by_both_passes() {
    let mut logs = vec![
        sync_log(7, e18(1_000), e18(2_000)),
        swap_log(8, [e18(10), U256::ZERO, U256::ZERO, e18(19)]),
    ];
    for log in &mut logs {
        log.address = Address::repeat_byte(0xBB);
    }
    let mut calls = vec![call(logs)];
    calls[0].address = Address::repeat_byte(0xBB);
    let block = block(calls);

    let records = extract_block(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn reverted_calls_emit_nothing() {
    let mut reverted = call(vec![
        sync_log(7, e18(1_000), e18(2_000)),
        swap_log(8, [e18(10), U256::ZERO, U256::ZERO, e18(19)]),
    ]);
    reverted.state_reverted = true;
    let block = block(vec![reverted]);

    let records = extract_block(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn foreign_signatures_are_filtered_before_classification() {
    // A factory PairCreated log lands between the pair's Sync and Swap.
    let pair_created = RawLog {
        address: PAIR,
        topics: vec![b256!(
            "0d3648bd0f6ba80134a33ba9275ac585d9d315f0ad8355cddefde31afa28d0e9"
        )],
        data: vec![0u8; 64].into(),
        ordinal: 8,
    };
    let block = block(vec![call(vec![
        sync_log(7, e18(1_000), e18(2_000)),
        pair_created,
        swap_log(9, [e18(10), U256::ZERO, U256::ZERO, e18(19)]),
    ])]);

    let records = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind_name(), "swap");
}

#[test]
fn reserve_pass_resolves_on_the_emitting_address() {
    // Sync emitted by the pair but listed under a router's call frame; the
    // call pass skips the untracked call, the reserve pass still sees it.
    let router = Address::repeat_byte(0xEE);
    let mut router_call = call(vec![sync_log(5, e18(500), e18(1_000))]);
    router_call.address = router;
    let block = block(vec![router_call]);

    let records = extract_reserve_updates(&block, &directory()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind_name(), "reserve_update");
    assert_eq!(records[0].log_ordinal, 5);

    let action_records = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert!(action_records.is_empty());
}

#[test]
fn sync_inside_a_mint_pattern_still_updates_reserves() {
    let block = block(vec![call(vec![
        transfer_log(1, Address::ZERO, TRADER, e18(300)),
        sync_log(2, e18(1_000), e18(2_000)),
        mint_log(3, e18(10), e18(20)),
    ])]);

    let records = extract_block(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind_name(), "reserve_update");
    assert_eq!(records[0].log_ordinal, 2);
    assert_eq!(records[1].kind_name(), "mint");
    assert_eq!(records[1].log_ordinal, 3);
}

#[test]
fn four_log_mint_carries_fee_fields_end_to_end() {
    let fee_collector = Address::repeat_byte(0x0F);
    let block = block(vec![call(vec![
        transfer_log(1, Address::ZERO, fee_collector, e18(3)),
        transfer_log(2, Address::ZERO, TRADER, e18(300)),
        sync_log(3, e18(1_000), e18(2_000)),
        mint_log(4, e18(10), e18(20)),
    ])]);

    let records = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert_eq!(records.len(), 1);
    match &records[0].kind {
        RecordKind::Mint {
            liquidity,
            fee_to,
            fee_liquidity,
            reserve0_before,
            reserve0_after,
            ..
        } => {
            assert_eq!(liquidity, "300");
            assert_eq!(
                fee_to.as_deref(),
                Some("0x0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f")
            );
            assert_eq!(fee_liquidity.as_deref(), Some("3"));
            assert_eq!(reserve0_before, "990");
            assert_eq!(reserve0_after, "1000");
        }
        other => panic!("expected mint, got {other:?}"),
    }
}

#[test]
fn three_log_burn_reconstructs_prior_reserves() {
    let recipient = Address::repeat_byte(0x09);
    let block = block(vec![call(vec![
        transfer_log(1, TRADER, Address::ZERO, e18(650)),
        sync_log(2, e18(990), e18(1_980)),
        burn_log(3, e18(10), e18(20), recipient),
    ])]);

    let records = extract_events(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    assert_eq!(records.len(), 1);
    match &records[0].kind {
        RecordKind::Burn {
            liquidity,
            to,
            reserve0_before,
            reserve1_before,
            reserve0_after,
            reserve1_after,
            ..
        } => {
            assert_eq!(liquidity, "650");
            assert_eq!(to, "0x0909090909090909090909090909090909090909");
            assert_eq!(reserve0_before, "1000");
            assert_eq!(reserve1_before, "2000");
            assert_eq!(reserve0_after, "990");
            assert_eq!(reserve1_after, "1980");
        }
        other => panic!("expected burn, got {other:?}"),
    }
}

#[test]
fn records_from_multiple_transactions_merge_in_ordinal_order() {
    let block = Block {
        number: 6_810_706,
        timestamp: 1_600_417_794,
        transactions: vec![
            TransactionTrace {
                hash: B256::repeat_byte(0x11),
                from: Address::repeat_byte(0xCD),
                calls: vec![call(vec![
                    sync_log(3, e18(1_000), e18(2_000)),
                    swap_log(4, [e18(1), U256::ZERO, U256::ZERO, e18(2)]),
                ])],
            },
            TransactionTrace {
                hash: B256::repeat_byte(0x22),
                from: Address::repeat_byte(0xCE),
                calls: vec![call(vec![
                    sync_log(9, e18(990), e18(2_020)),
                    swap_log(10, [U256::ZERO, e18(2), e18(1), U256::ZERO]),
                ])],
            },
        ],
    };

    let records = extract_block(&block, &directory(), &MemoryPriceStore::new()).unwrap();
    let ordinals: Vec<u64> = records.iter().map(|record| record.log_ordinal).collect();
    assert_eq!(ordinals, vec![3, 4, 9, 10]);

    let kinds: Vec<&str> = records.iter().map(|record| record.kind_name()).collect();
    assert_eq!(kinds, vec!["reserve_update", "swap", "reserve_update", "swap"]);
}
