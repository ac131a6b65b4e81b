#![cfg(test)]

use crate::testutils::{create_stable_pool, pool_params};
use crate::LiquidityPoolClient;
use access_control::constants::MIN_RAMP_TIME;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};
use soroban_token_contract::testutils::create_token;
use utils::test_utils::jump;

struct Setup<'a> {
    env: Env,
    owner: Address,
    stranger: Address,
    user: Address,
    pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        jump(&env, 1_000);

        let owner = Address::generate(&env);
        let user = Address::generate(&env);
        let admin = Address::generate(&env);
        let token0 = create_token(&env, &admin, 7);
        let token1 = create_token(&env, &admin, 7);
        token0.mint(&user, &1_000_000_000_000);
        token1.mint(&user, &1_000_000_000_000);

        let tokens = vec![&env, token0.address.clone(), token1.address.clone()];
        let params = pool_params(&owner, &owner, 30_000_000, 0);
        let pool = create_stable_pool(&env, &tokens, &None, &params, 100);

        Setup {
            stranger: Address::generate(&env),
            env,
            owner,
            user,
            pool,
        }
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_ramp_a_not_owner() {
    let setup = Setup::default();
    let start = setup.env.ledger().timestamp();
    setup
        .pool
        .ramp_a(&setup.stranger, &200, &(start + MIN_RAMP_TIME));
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_stop_ramp_a_not_owner() {
    let setup = Setup::default();
    setup.pool.stop_ramp_a(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_kill_me_not_owner() {
    let setup = Setup::default();
    setup.pool.kill_me(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_unkill_me_not_owner() {
    let setup = Setup::default();
    setup.pool.kill_me(&setup.owner);
    setup.pool.unkill_me(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_withdraw_admin_fees_not_owner() {
    let setup = Setup::default();
    setup.pool.withdraw_admin_fees(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_donate_admin_fees_not_owner() {
    let setup = Setup::default();
    setup.pool.donate_admin_fees(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #2104)")]
fn test_fee_delay_bound_once_funded() {
    let setup = Setup::default();
    setup.pool.add_liquidity(
        &setup.user,
        &vec![&setup.env, 1_000_000_000, 1_000_000_000],
        &0,
    );
    setup
        .pool
        .commit_new_fee(&setup.owner, &1_000_000, &0, &0, &(MIN_RAMP_TIME - 1));
}

#[test]
fn test_fee_commit_apply() {
    let setup = Setup::default();
    setup.pool.add_liquidity(
        &setup.user,
        &vec![&setup.env, 1_000_000_000, 1_000_000_000],
        &0,
    );
    setup
        .pool
        .commit_new_fee(&setup.owner, &1234, &3456, &67890, &(3 * MIN_RAMP_TIME));
    jump(&setup.env, 3 * MIN_RAMP_TIME - 5);
    assert!(setup.pool.try_apply_new_fee(&setup.owner).is_err());
    jump(&setup.env, 5);
    setup.pool.apply_new_fee(&setup.owner);
    assert_eq!(setup.pool.fee(), 1234);
    assert_eq!(setup.pool.admin_fee(), 3456);
    assert_eq!(setup.pool.winner_fee(), 67890);
    assert_eq!(setup.pool.admin_actions_deadline(), 0);
}

#[test]
fn test_exchange_requires_user_auth() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let user = Address::generate(&env);
    let admin = Address::generate(&env);
    let tokens = vec![
        &env,
        create_token(&env, &admin, 7).address.clone(),
        create_token(&env, &admin, 7).address.clone(),
    ];
    let pool = create_stable_pool(
        &env,
        &tokens,
        &None,
        &pool_params(&owner, &owner, 30_000_000, 0),
        100,
    );
    assert!(pool.try_exchange(&user, &0, &1, &1, &0, &None).is_err());
}
