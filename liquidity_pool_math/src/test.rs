#![cfg(test)]
extern crate std;

use crate::constant_product::{
    get_amount_in, get_amount_out, get_initial_liquidity, get_liquidity, get_mint_fee,
    get_one_coin_swap_amount, get_share, quote,
};
use crate::stableswap::{
    get_a, get_d, get_dy, get_virtual_price, get_y, get_y_d, imbalance_fee_base, one_coin_fee,
};
use soroban_sdk::{vec, Env, U256};

const E18: u128 = 1_000_000_000_000_000_000;
const E24: u128 = 1_000_000_000_000_000_000_000_000;

#[test]
fn test_amount_out() {
    let e = Env::default();
    assert_eq!(
        get_amount_out(&e, E18, 5 * E18, 10 * E18, 30_000_000),
        1662497915624478906
    );
    // no fee, symmetric reserves
    assert_eq!(get_amount_out(&e, 100, 1000, 1000, 0), 90);
}

#[test]
fn test_amount_in() {
    let e = Env::default();
    assert_eq!(
        get_amount_in(&e, E18, 5 * E18, 10 * E18, 30_000_000),
        557227237267357630
    );
    assert_eq!(
        get_amount_in(&e, 1_000_000, 1_000_000_000, 1_000_000_000, 30_000_000),
        1004015
    );
}

#[test]
fn test_amount_in_covers_amount_out() {
    let e = Env::default();
    let amount_in = get_amount_in(&e, 12345, 10_000_000, 20_000_000, 30_000_000);
    assert!(get_amount_out(&e, amount_in, 10_000_000, 20_000_000, 30_000_000) >= 12345);
}

#[test]
#[should_panic(expected = "Error(Contract, #2021)")]
fn test_amount_in_whole_reserve() {
    let e = Env::default();
    get_amount_in(&e, 1000, 1000, 1000, 30_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2001)")]
fn test_amount_out_zero_input() {
    let e = Env::default();
    get_amount_out(&e, 0, 1000, 1000, 30_000_000);
}

#[test]
fn test_quote_and_shares() {
    let e = Env::default();
    assert_eq!(quote(&e, 100, 1000, 2000), 200);
    assert_eq!(get_liquidity(&e, 100, 300, 1000, 2000, 500), 50);
    assert_eq!(get_share(&e, 50, 2000, 500), 200);
    assert_eq!(
        get_initial_liquidity(&e, 500_000 * E18, 1_000_000 * E18),
        707106781186547524400844
    );
}

#[test]
fn test_mint_fee() {
    let e = Env::default();
    let k_last = U256::from_u128(&e, 1000 * E18).mul(&U256::from_u128(&e, 1000 * E18));
    assert_eq!(
        get_mint_fee(&e, 1000 * E18, 1100 * E18, 1100 * E18, &k_last, 5_000_000_000),
        47619047619047619047
    );
    // disabled admin fee or no growth
    assert_eq!(get_mint_fee(&e, 1000 * E18, 1100 * E18, 1100 * E18, &k_last, 0), 0);
    assert_eq!(
        get_mint_fee(&e, 1000 * E18, 1000 * E18, 1000 * E18, &k_last, 5_000_000_000),
        0
    );
    assert_eq!(
        get_mint_fee(&e, 1000 * E18, 1100 * E18, 1100 * E18, &U256::from_u32(&e, 0), 5_000_000_000),
        0
    );
}

#[test]
fn test_one_coin_swap_amount() {
    let e = Env::default();
    let swap = get_one_coin_swap_amount(&e, 1000 * E18, 100 * E18, 30_000_000);
    assert_eq!(swap, 48882173994193580692);

    // leftover after the swap matches the pool price within rounding
    let out = get_amount_out(&e, swap, 1000 * E18, 1000 * E18, 30_000_000);
    let left = 100 * E18 - swap;
    let wanted = quote(&e, out, 1000 * E18 - out, 1000 * E18 + swap);
    assert!(left.abs_diff(wanted) <= 10);
}

#[test]
fn test_get_a_ramp() {
    assert_eq!(get_a(100, 0, 200, 100, 0), 100);
    assert_eq!(get_a(100, 0, 200, 100, 50), 150);
    assert_eq!(get_a(100, 0, 200, 100, 100), 200);
    assert_eq!(get_a(100, 0, 200, 100, 1000), 200);
    assert_eq!(get_a(200, 0, 100, 100, 25), 175);
    // degenerate window
    assert_eq!(get_a(200, 100, 100, 100, 50), 100);
}

#[test]
fn test_get_d() {
    let e = Env::default();
    assert_eq!(get_d(&e, &vec![&e, 0u128, 0u128], 100), 0);
    assert_eq!(get_d(&e, &vec![&e, E24, E24], 72000), 2 * E24);
    assert_eq!(
        get_d(&e, &vec![&e, E24, 2 * E24], 72000),
        2999740012080048020353727
    );
    assert_eq!(
        get_d(&e, &vec![&e, E24, 2 * E24, 3 * E24], 5000),
        5987039587641197907523330
    );
}

#[test]
fn test_get_y() {
    let e = Env::default();
    let xp = vec![&e, E24, 2 * E24];
    let d = get_d(&e, &xp, 72000);
    assert_eq!(
        get_y(&e, 0, 1, E24 + E18 * 1000, &xp, 72000, d),
        1998998831554457599820159
    );
    assert_eq!(
        get_y_d(&e, 72000, 0, &xp, d - E18 * 10_000),
        990007004633693327783706
    );
}

#[test]
fn test_get_dy_precision() {
    let e = Env::default();
    let balances = vec![&e, E24, 1_000_000_000_000u128];
    let precision_mul = vec![&e, 1u128, 1_000_000_000_000u128];
    assert_eq!(
        get_dy(&e, 0, 1, E18, &balances, &precision_mul, 72000, 30_000_000),
        Some((997000, 2999))
    );
    assert_eq!(
        get_dy(&e, 0, 1, E18, &balances, &precision_mul, 72000, 0),
        Some((999999, 0))
    );
    assert_eq!(
        get_dy(&e, 1, 0, 1_000_000, &balances, &precision_mul, 72000, 30_000_000),
        Some((996999998617198337, 2999999995839112))
    );
    // rounding eats a dust input
    assert_eq!(get_dy(&e, 0, 1, 1, &balances, &precision_mul, 72000, 0), None);
}

#[test]
fn test_fees() {
    let e = Env::default();
    assert_eq!(imbalance_fee_base(30_000_000, 2), 15_000_000);
    assert_eq!(imbalance_fee_base(30_000_000, 3), 11_250_000);
    assert_eq!(one_coin_fee(&e, 30_000_000, E24, 2 * E24), 15_500_000);
    assert_eq!(get_virtual_price(&e, 2 * E24, 2 * E24), E18);
    assert_eq!(get_virtual_price(&e, 2 * E24, 0), 0);
}
