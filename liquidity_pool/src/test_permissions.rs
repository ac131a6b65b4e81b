#![cfg(test)]

use crate::testutils::{create_uni_pool, pool_params};
use access_control::constants::MIN_RAMP_TIME;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String};
use soroban_token_contract::testutils::create_token;
use utils::test_utils::jump;

struct Setup<'a> {
    env: Env,
    owner: Address,
    stranger: Address,
    pool: crate::LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        jump(&env, 1_000);

        let owner = Address::generate(&env);
        let winner = Address::generate(&env);
        let admin = Address::generate(&env);
        let tokens = vec![
            &env,
            create_token(&env, &admin, 7).address.clone(),
            create_token(&env, &admin, 7).address.clone(),
        ];
        let pool = create_uni_pool(&env, &tokens, &None, &pool_params(&owner, &winner, 30_000_000));

        Setup {
            stranger: Address::generate(&env),
            env,
            owner,
            pool,
        }
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_commit_fee_not_owner() {
    let setup = Setup::default();
    setup
        .pool
        .commit_new_fee(&setup.stranger, &1, &0, &0, &MIN_RAMP_TIME);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_withdraw_admin_fees_not_owner() {
    let setup = Setup::default();
    setup.pool.withdraw_admin_fees2(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_set_name_not_owner() {
    let setup = Setup::default();
    setup
        .pool
        .set_name(&setup.stranger, &String::from_str(&setup.env, "x"));
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_set_pay_token_not_owner() {
    let setup = Setup::default();
    setup.pool.set_pay_token(&setup.stranger, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_commit_whitelist_not_owner() {
    let setup = Setup::default();
    setup
        .pool
        .commit_new_whitelist(&setup.stranger, &None, &1, &MIN_RAMP_TIME);
}

#[test]
fn test_transfer_owner_winner_flow() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    let new_winner = Address::generate(&setup.env);

    setup
        .pool
        .commit_transfer_owner_winner(&setup.owner, &new_owner, &new_winner, &MIN_RAMP_TIME);
    assert_eq!(setup.pool.future_owner(), Some(new_owner.clone()));
    assert_eq!(setup.pool.future_winner(), Some(new_winner.clone()));
    assert_eq!(
        setup.pool.transfer_owner_winner_deadline(),
        1_000 + MIN_RAMP_TIME
    );
    // the new owner has no rights until applied
    assert!(setup.pool.try_revert_transfer_owner_winner(&new_owner).is_err());

    jump(&setup.env, MIN_RAMP_TIME);
    setup.pool.apply_transfer_owner_winner(&setup.owner);
    assert_eq!(setup.pool.owner(), new_owner);
    assert_eq!(setup.pool.future_owner(), None);
    assert!(setup.pool.try_withdraw_admin_fees2(&setup.owner).is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2104)")]
fn test_transfer_owner_winner_too_early() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .pool
        .commit_transfer_owner_winner(&setup.owner, &new_owner, &new_owner, &MIN_RAMP_TIME);
    jump(&setup.env, MIN_RAMP_TIME - 1);
    setup.pool.apply_transfer_owner_winner(&setup.owner);
}

#[test]
fn test_empty_pool_fee_commit_any_delay() {
    let setup = Setup::default();
    setup.pool.commit_new_fee(&setup.owner, &1_000_000, &0, &0, &1);
    assert_eq!(setup.pool.admin_actions_deadline(), 1_001);
    jump(&setup.env, 1);
    setup.pool.apply_new_fee(&setup.owner);
    assert_eq!(setup.pool.fee(), 1_000_000);
    assert_eq!(setup.pool.future_fee(), 0);
}

#[test]
fn test_swap_requires_user_auth() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let user = Address::generate(&env);
    let admin = Address::generate(&env);
    let tokens = vec![
        &env,
        create_token(&env, &admin, 7).address.clone(),
        create_token(&env, &admin, 7).address.clone(),
    ];
    let pool = create_uni_pool(&env, &tokens, &None, &pool_params(&owner, &owner, 30_000_000));
    assert!(pool.try_swap(&user, &0, &1, &user, &None).is_err());
}
