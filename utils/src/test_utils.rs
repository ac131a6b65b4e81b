#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::{Ledger, LedgerInfo};
use soroban_sdk::Env;

pub fn assert_approx_eq_abs(a: i128, b: i128, delta: i128) {
    assert!(
        a >= b - delta && a <= b + delta,
        "assertion failed: `(left != right)` \
         (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}

// relative tolerance expressed as 1 / denominator
pub fn assert_approx_eq_rel(a: i128, b: i128, denominator: i128) {
    let delta = (b / denominator).abs().max(1);
    assert_approx_eq_abs(a, b, delta);
}

pub fn jump(e: &Env, time: u64) {
    e.ledger().set(LedgerInfo {
        timestamp: e.ledger().timestamp().saturating_add(time),
        protocol_version: e.ledger().protocol_version(),
        sequence_number: e.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 999999,
        min_persistent_entry_ttl: 999999,
        max_entry_ttl: u32::MAX,
    });
}
