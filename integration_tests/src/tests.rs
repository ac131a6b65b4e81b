#![cfg(test)]
extern crate std;

use crate::testutils::{amount_out, Setup, ADMIN_FEE, FEE, UNIT, WHITELIST_GROUP};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address};

#[test]
fn test_mixed_route_moves_reserves() {
    let setup = Setup::default();
    let reserve = 1_000_000 * UNIT;
    let uni = setup.uni_pool(0, 1, 0, reserve);
    let stable = setup.stable_pool(1, 2, 0, reserve);
    let path = setup.path(&[0, 1, 2]);

    let quote = setup.router.get_amounts_out(&setup.user, &(1_000 * UNIT), &path);
    let before = setup.balances(&setup.user);
    let amounts = setup
        .router
        .swap_exact_tokens_for_tokens(&setup.user, &(1_000 * UNIT), &0, &path);
    let after = setup.balances(&setup.user);

    assert_eq!(amounts, quote);
    assert_eq!(amounts.get_unchecked(0), 1_000 * UNIT);
    assert_eq!(
        amounts.get_unchecked(1),
        amount_out(1_000 * UNIT, reserve, reserve, FEE)
    );
    assert_eq!(before[0] - after[0], 1_000 * UNIT);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2] - before[2], amounts.get_unchecked(2));

    assert_eq!(
        uni.reserves(),
        vec![
            &setup.env,
            reserve + 1_000 * UNIT,
            reserve - amounts.get_unchecked(1)
        ]
    );
    assert_eq!(
        stable.reserves(),
        vec![
            &setup.env,
            reserve + amounts.get_unchecked(1),
            reserve - amounts.get_unchecked(2)
        ]
    );
    assert_eq!(setup.balances(&setup.router.address), [0, 0, 0]);
}

#[test]
fn test_whitelisted_user_routes_at_preferential_fee() {
    let setup = Setup::default();
    let reserve = 1_000_000 * UNIT;
    let uni = setup.uni_pool(0, 1, 0, reserve);
    let stranger = Address::generate(&setup.env);
    let path = setup.path(&[0, 1]);

    setup
        .whitelist
        .set_fee(&setup.owner, &WHITELIST_GROUP, &setup.user, &0);
    assert_eq!(uni.fee_for(&setup.router.address, &Some(setup.user.clone())), 0);
    assert_eq!(uni.fee_for(&setup.router.address, &Some(stranger.clone())), FEE);

    let user_quote = setup.router.get_amounts_out(&setup.user, &(1_000 * UNIT), &path);
    let stranger_quote = setup.router.get_amounts_out(&stranger, &(1_000 * UNIT), &path);
    assert_eq!(
        user_quote.get_unchecked(1),
        amount_out(1_000 * UNIT, reserve, reserve, 0)
    );
    assert_eq!(
        stranger_quote.get_unchecked(1),
        amount_out(1_000 * UNIT, reserve, reserve, FEE)
    );

    let before = setup.tokens[1].balance(&setup.user);
    setup
        .router
        .swap_exact_tokens_for_tokens(&setup.user, &(1_000 * UNIT), &0, &path);
    assert_eq!(
        setup.tokens[1].balance(&setup.user) - before,
        user_quote.get_unchecked(1)
    );

    // an entry for the caller itself takes precedence over the hint
    setup
        .whitelist
        .set_fee(&setup.owner, &WHITELIST_GROUP, &setup.router.address, &1_000_000);
    assert_eq!(
        uni.fee_for(&setup.router.address, &Some(setup.user.clone())),
        1_000_000
    );

    setup
        .whitelist
        .remove_fee(&setup.owner, &WHITELIST_GROUP, &setup.router.address);
    setup
        .whitelist
        .remove_fee(&setup.owner, &WHITELIST_GROUP, &setup.user);
    assert_eq!(uni.fee_for(&setup.router.address, &Some(setup.user.clone())), FEE);
}

#[test]
fn test_uni_admin_fee_after_routed_swaps() {
    let setup = Setup::default();
    let uni = setup.uni_pool(0, 1, ADMIN_FEE, 1_000_000 * UNIT);

    for _ in 0..3 {
        setup.router.swap_exact_tokens_for_tokens(
            &setup.user,
            &(10_000 * UNIT),
            &0,
            &setup.path(&[0, 1]),
        );
        setup.router.swap_exact_tokens_for_tokens(
            &setup.user,
            &(10_000 * UNIT),
            &0,
            &setup.path(&[1, 0]),
        );
    }

    // swaps accrue the admin share lazily, nothing is minted yet
    let pending = uni.admin_balance();
    assert!(pending > 0);
    assert_eq!(uni.minted_admin_balance(), 0);

    let (lp_amount, owner0, owner1, winner0, winner1) = uni.withdraw_admin_fees2(&setup.owner);
    assert_eq!(lp_amount, pending);
    assert!(owner0 > 0 && owner1 > 0);
    assert_eq!((winner0, winner1), (0, 0));
    assert_eq!(setup.balances(&setup.owner), [owner0, owner1, 0]);
    assert_eq!(uni.admin_balance(), 0);
    assert_eq!(uni.balance_of(&setup.owner), 0);
}

#[test]
fn test_stable_admin_fee_after_routed_swap() {
    let setup = Setup::default();
    let stable = setup.stable_pool(0, 1, ADMIN_FEE, 1_000_000 * UNIT);

    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &(10_000 * UNIT),
        &0,
        &setup.path(&[0, 1]),
    );

    // the fee is charged on the output coin
    let admin1 = stable.admin_balances(&1);
    assert_eq!(stable.admin_balances(&0), 0);
    assert!(admin1 > 0);

    let (owner_amounts, winner_amounts) = stable.withdraw_admin_fees(&setup.owner);
    assert_eq!(owner_amounts, vec![&setup.env, 0, admin1]);
    assert_eq!(winner_amounts, vec![&setup.env, 0, 0]);
    assert_eq!(setup.tokens[1].balance(&setup.owner), admin1);
    assert_eq!(stable.admin_balances(&1), 0);
}

#[test]
fn test_one_coin_round_trip() {
    let setup = Setup::default();
    let uni = setup.uni_pool(0, 1, 0, 1_000_000 * UNIT);
    let (token0, token1) = (setup.address(0), setup.address(1));

    let lp_before = uni.balance_of(&setup.user);
    let quoted = setup.router.uni_get_lp_token_amount_one_coin(
        &setup.user,
        &token0,
        &token1,
        &token0,
        &(1_000 * UNIT),
    );
    let minted = setup.router.uni_add_liquidity_one_coin(
        &setup.user,
        &token0,
        &token1,
        &token0,
        &(1_000 * UNIT),
        &0,
    );
    assert_eq!(minted, quoted);
    assert_eq!(uni.balance_of(&setup.user) - lp_before, minted);

    let before = setup.tokens[0].balance(&setup.user);
    let (withdrawn, mint_fee) = setup.router.uni_remove_liquidity_one_coin(
        &setup.user,
        &token0,
        &token1,
        &token0,
        &minted,
        &0,
    );
    assert_eq!(mint_fee, 0);
    assert_eq!(setup.tokens[0].balance(&setup.user) - before, withdrawn);
    // two swaps worth of fees are lost on the way
    assert!(withdrawn > 0 && withdrawn < 1_000 * UNIT);
    assert_eq!(uni.balance_of(&setup.user), lp_before);
    assert_eq!(setup.balances(&setup.router.address), [0, 0, 0]);
}
