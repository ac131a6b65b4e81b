#![cfg(test)]
extern crate std;

use crate::testutils::create_router;
use crate::LiquidityPoolRouterClient;
use access_control::params::PoolParams;
use soroban_liquidity_pool_contract::testutils::{create_uni_pool, pool_params};
use soroban_liquidity_pool_contract::LiquidityPoolClient as UniPoolClient;
use soroban_liquidity_pool_factory_contract::testutils::create_factory;
use soroban_liquidity_pool_factory_contract::LiquidityPoolFactoryClient;
use soroban_liquidity_pool_stableswap_contract::testutils::create_stable_pool;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{vec, Address, BytesN, Env, Vec};
use soroban_token_contract::testutils::create_token;
use utils::test_utils::jump;

const E: i128 = 1_000_000_000_000_000_000;
const FEE: u64 = 30_000_000;

struct Setup<'a> {
    env: Env,
    owner: Address,
    user: Address,
    tokens: std::vec::Vec<TokenClient<'a>>,
    factory: LiquidityPoolFactoryClient<'a>,
    router: LiquidityPoolRouterClient<'a>,
    uni: UniPoolClient<'a>,
}

fn register_uni_pool<'a>(
    e: &Env,
    factory: &LiquidityPoolFactoryClient,
    owner: &Address,
    tokens: &Vec<Address>,
    params: &PoolParams,
) -> UniPoolClient<'a> {
    let pool = create_uni_pool(e, tokens, &None, params);
    factory.add_custom_pair(owner, &pool.address);
    pool
}

// Uni pool (t0, t1) with 500000/1000000, stableswap (t1, t2) with 500000/1000000,
// uni pool (t1, t3) with 1000000 each
impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        jump(&env, 1_000);

        let owner = Address::generate(&env);
        let user = Address::generate(&env);
        let admin = Address::generate(&env);
        let mut tokens = std::vec::Vec::new();
        for _ in 0..4 {
            let token = create_token(&env, &admin, 18);
            token.mint(&user, &(10_000_000 * E));
            tokens.push(TokenClient::new(&env, &token.address));
        }
        let pair = |a: usize, b: usize| {
            vec![&env, tokens[a].address.clone(), tokens[b].address.clone()]
        };

        let factory = create_factory(
            &env,
            &owner,
            &BytesN::from_array(&env, &[1; 32]),
            &BytesN::from_array(&env, &[2; 32]),
        );
        let router = create_router(&env, &factory.address);
        let params = pool_params(&owner, &owner, FEE);

        let uni = register_uni_pool(&env, &factory, &owner, &pair(0, 1), &params);
        router.uni_add_liquidity(
            &user,
            &tokens[0].address,
            &tokens[1].address,
            &(500_000 * E),
            &(1_000_000 * E),
            &0,
            &0,
        );

        let stable = create_stable_pool(&env, &pair(1, 2), &None, &params, 720);
        factory.add_custom_pair(&owner, &stable.address);
        stable.add_liquidity(&user, &vec![&env, 500_000 * E, 1_000_000 * E], &0);

        register_uni_pool(&env, &factory, &owner, &pair(1, 3), &params);
        router.uni_add_liquidity(
            &user,
            &tokens[1].address,
            &tokens[3].address,
            &(1_000_000 * E),
            &(1_000_000 * E),
            &0,
            &0,
        );

        Setup {
            env,
            owner,
            user,
            tokens,
            factory,
            router,
            uni,
        }
    }
}

impl<'a> Setup<'a> {
    fn address(&self, idx: usize) -> Address {
        self.tokens[idx].address.clone()
    }

    fn addresses(&self, idx: &[usize]) -> Vec<Address> {
        let mut result = Vec::new(&self.env);
        for i in idx {
            result.push_back(self.address(*i));
        }
        result
    }

    fn add_uni_pool(&self, a: usize, b: usize, params: &PoolParams) -> UniPoolClient<'a> {
        register_uni_pool(
            &self.env,
            &self.factory,
            &self.owner,
            &self.addresses(&[a, b]),
            params,
        )
    }

    fn add_liquidity(&self, a: usize, b: usize, amount_a: i128, amount_b: i128) -> i128 {
        let (_, _, liquidity) = self.router.uni_add_liquidity(
            &self.user,
            &self.address(a),
            &self.address(b),
            &amount_a,
            &amount_b,
            &0,
            &0,
        );
        liquidity
    }

    fn balance(&self, idx: usize, addr: &Address) -> i128 {
        self.tokens[idx].balance(addr)
    }
}

#[test]
fn test_first_deposit_takes_desired_amounts() {
    let setup = Setup::default();
    assert_eq!(
        setup.uni.reserves(),
        vec![&setup.env, 500_000 * E, 1_000_000 * E]
    );
    assert_eq!(setup.uni.balance_of(&setup.user), 707106781186547524399844);
    assert_eq!(setup.uni.total_supply(), 707106781186547524400844);
}

#[test]
fn test_swap_through_uni_and_stable() {
    let setup = Setup::default();
    let path = setup.addresses(&[0, 1, 2]);
    let expected = vec![
        &setup.env,
        E,
        1993996023971928199,
        1990340394780245684,
    ];
    assert_eq!(
        setup.router.get_amounts_out(&setup.user, &E, &path),
        expected
    );

    let before = setup.balance(2, &setup.user);
    let amounts = setup
        .router
        .swap_exact_tokens_for_tokens(&setup.user, &E, &0, &path);
    assert_eq!(amounts, expected);
    assert_eq!(setup.balance(2, &setup.user) - before, 1990340394780245684);
    for i in 0..3 {
        assert_eq!(setup.balance(i, &setup.router.address), 0);
    }
}

#[test]
fn test_swap_exact_out_single_hop() {
    let setup = Setup::default();
    let path = setup.addresses(&[0, 1]);
    assert_eq!(
        setup.router.uni_get_amounts_in(&setup.user, &E, &path),
        vec![&setup.env, 501505015045636913, E]
    );

    let before = (setup.balance(0, &setup.user), setup.balance(1, &setup.user));
    setup
        .router
        .uni_swap_tokens_for_exact_tokens(&setup.user, &E, &(2 * E), &path);
    assert_eq!(before.0 - setup.balance(0, &setup.user), 501505015045636913);
    assert_eq!(setup.balance(1, &setup.user) - before.1, E);
}

#[test]
fn test_swap_exact_out_two_hops() {
    let setup = Setup::default();
    let path = setup.addresses(&[0, 1, 3]);
    let expected = vec![
        &setup.env,
        503014561745939493,
        1003010030091273824,
        E,
    ];
    assert_eq!(
        setup.router.uni_get_amounts_in(&setup.user, &E, &path),
        expected
    );

    let before = (setup.balance(0, &setup.user), setup.balance(3, &setup.user));
    let amounts = setup
        .router
        .uni_swap_tokens_for_exact_tokens(&setup.user, &E, &E, &path);
    assert_eq!(amounts, expected);
    assert_eq!(before.0 - setup.balance(0, &setup.user), 503014561745939493);
    assert_eq!(setup.balance(3, &setup.user) - before.1, E);
    assert_eq!(setup.balance(1, &setup.router.address), 0);
}

#[test]
fn test_add_liquidity_keeps_price() {
    let setup = Setup::default();
    let quote = setup.router.uni_get_lp_token_amount(
        &setup.address(1),
        &setup.address(0),
        &(2_000 * E),
        &(2_000 * E),
    );
    assert_eq!(quote, (2_000 * E, 1_000 * E, 1414213562373095048801));

    let result = setup.router.uni_add_liquidity(
        &setup.user,
        &setup.address(1),
        &setup.address(0),
        &(2_000 * E),
        &(2_000 * E),
        &(2_000 * E),
        &(1_000 * E),
    );
    assert_eq!(result, quote);
}

#[test]
#[should_panic(expected = "Error(Contract, #2502)")]
fn test_add_liquidity_b_slippage() {
    let setup = Setup::default();
    setup.router.uni_add_liquidity(
        &setup.user,
        &setup.address(0),
        &setup.address(1),
        &(1_000 * E),
        &(3_000 * E),
        &0,
        &(2_000 * E + 1),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2501)")]
fn test_add_liquidity_a_slippage() {
    let setup = Setup::default();
    setup.router.uni_add_liquidity(
        &setup.user,
        &setup.address(0),
        &setup.address(1),
        &(1_000 * E),
        &(1_000 * E),
        &(1_000 * E),
        &0,
    );
}

#[test]
fn test_add_liquidity_one_coin() {
    let setup = Setup::default();
    let (t0, t1) = (setup.address(0), setup.address(1));
    let quote = setup
        .router
        .uni_get_lp_token_amount_one_coin(&setup.user, &t0, &t1, &t0, &(1_000 * E));
    assert_eq!(quote, 705691858747323145759);

    let before = (setup.balance(0, &setup.user), setup.balance(1, &setup.user));
    let lp_before = setup.uni.balance_of(&setup.user);
    let liquidity = setup.router.uni_add_liquidity_one_coin(
        &setup.user,
        &t0,
        &t1,
        &t0,
        &(1_000 * E),
        &quote,
    );
    assert_eq!(liquidity, quote);
    assert_eq!(setup.uni.balance_of(&setup.user) - lp_before, quote);
    assert_eq!(
        before.0 - setup.balance(0, &setup.user),
        999999999999999999998
    );
    assert_eq!(setup.balance(1, &setup.user), before.1);
    assert_eq!(setup.balance(1, &setup.router.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2504)")]
fn test_add_liquidity_one_coin_min_lp() {
    let setup = Setup::default();
    let (t0, t1) = (setup.address(0), setup.address(1));
    setup.router.uni_add_liquidity_one_coin(
        &setup.user,
        &t0,
        &t1,
        &t1,
        &(1_000 * E),
        &(1_000 * E),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2508)")]
fn test_add_liquidity_one_coin_foreign_token() {
    let setup = Setup::default();
    let (t0, t1, t2) = (setup.address(0), setup.address(1), setup.address(2));
    setup
        .router
        .uni_add_liquidity_one_coin(&setup.user, &t0, &t1, &t2, &E, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2507)")]
fn test_add_liquidity_one_coin_empty_pool() {
    let setup = Setup::default();
    setup.add_uni_pool(0, 2, &pool_params(&setup.owner, &setup.owner, FEE));
    let (t0, t2) = (setup.address(0), setup.address(2));
    setup
        .router
        .uni_add_liquidity_one_coin(&setup.user, &t0, &t2, &t0, &E, &0);
}

#[test]
fn test_remove_liquidity() {
    let setup = Setup::default();
    let (t0, t1) = (setup.address(0), setup.address(1));
    let expected = (707106781186547524400, 1414213562373095048801);
    assert_eq!(
        setup.router.uni_get_withdraw_amount(&t0, &t1, &(1_000 * E)),
        expected
    );
    assert_eq!(
        setup.router.uni_get_withdraw_amount(&t1, &t0, &(1_000 * E)),
        (expected.1, expected.0)
    );

    let before = setup.balance(1, &setup.user);
    let result = setup.router.uni_remove_liquidity(
        &setup.user,
        &t1,
        &t0,
        &(1_000 * E),
        &expected.1,
        &expected.0,
    );
    assert_eq!(result, (expected.1, expected.0));
    assert_eq!(setup.balance(1, &setup.user) - before, expected.1);
}

#[test]
#[should_panic(expected = "Error(Contract, #2501)")]
fn test_remove_liquidity_slippage() {
    let setup = Setup::default();
    let (t0, t1) = (setup.address(0), setup.address(1));
    setup.router.uni_remove_liquidity(
        &setup.user,
        &t0,
        &t1,
        &(1_000 * E),
        &(707106781186547524400 + 1),
        &0,
    );
}

#[test]
fn test_remove_liquidity_one_coin_matches_quote() {
    let setup = Setup::default();
    let (t0, t1) = (setup.address(0), setup.address(1));
    let quote = setup.router.uni_get_withdraw_amount_one_coin(
        &setup.user,
        &t0,
        &t1,
        &t1,
        &(1_000 * E),
    );
    assert_eq!(quote.1, 0);

    let before = setup.balance(1, &setup.user);
    let before_other = setup.balance(0, &setup.user);
    let result = setup.router.uni_remove_liquidity_one_coin(
        &setup.user,
        &t0,
        &t1,
        &t1,
        &(1_000 * E),
        &quote.0,
    );
    assert_eq!(result, quote);
    assert_eq!(setup.balance(1, &setup.user) - before, quote.0);
    assert_eq!(setup.balance(0, &setup.user), before_other);
    assert_eq!(setup.balance(0, &setup.router.address), 0);
    assert_eq!(setup.balance(1, &setup.router.address), 0);
}

#[test]
fn test_remove_liquidity_one_coin_reports_admin_fee() {
    let setup = Setup::default();
    let params = PoolParams {
        admin_fee: 5_000_000_000,
        ..pool_params(&setup.owner, &setup.owner, FEE)
    };
    let pool = setup.add_uni_pool(0, 2, &params);
    let (t0, t2) = (setup.address(0), setup.address(2));
    setup.add_liquidity(0, 2, 1_000_000 * E, 1_000_000 * E);
    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &(10_000 * E),
        &0,
        &vec![&setup.env, t0.clone(), t2.clone()],
    );

    let quote = setup.router.uni_get_withdraw_amount_one_coin(
        &setup.user,
        &t2,
        &t0,
        &t0,
        &(1_000 * E),
    );
    assert!(quote.1 > 0);

    let result = setup.router.uni_remove_liquidity_one_coin(
        &setup.user,
        &t2,
        &t0,
        &t0,
        &(1_000 * E),
        &0,
    );
    assert_eq!(result, quote);
    assert_eq!(pool.minted_admin_balance(), quote.1);
    assert_eq!(pool.balance_of(&setup.owner), quote.1);
}

#[test]
#[should_panic(expected = "Error(Contract, #2509)")]
fn test_remove_liquidity_one_coin_foreign_token() {
    let setup = Setup::default();
    let (t0, t1, t3) = (setup.address(0), setup.address(1), setup.address(3));
    setup
        .router
        .uni_remove_liquidity_one_coin(&setup.user, &t0, &t1, &t3, &E, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2510)")]
fn test_owner_cannot_remove_reserved_liquidity() {
    let setup = Setup::default();
    let params = PoolParams {
        admin_fee: 5_000_000_000,
        ..pool_params(&setup.owner, &setup.owner, FEE)
    };
    let pool = setup.add_uni_pool(0, 2, &params);
    let (t0, t2) = (setup.address(0), setup.address(2));
    setup.add_liquidity(0, 2, 1_000_000 * E, 1_000_000 * E);
    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &(10_000 * E),
        &0,
        &vec![&setup.env, t0.clone(), t2.clone()],
    );
    setup.add_liquidity(0, 2, 1_000 * E, 1_000 * E);
    assert!(pool.minted_admin_balance() > 0);

    setup
        .router
        .uni_remove_liquidity(&setup.owner, &t0, &t2, &1, &0, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2503)")]
fn test_swap_zero_amount() {
    let setup = Setup::default();
    setup
        .router
        .swap_exact_tokens_for_tokens(&setup.user, &0, &0, &setup.addresses(&[0, 1]));
}

#[test]
#[should_panic(expected = "Error(Contract, #2511)")]
fn test_swap_short_path() {
    let setup = Setup::default();
    setup
        .router
        .swap_exact_tokens_for_tokens(&setup.user, &E, &0, &setup.addresses(&[0]));
}

#[test]
#[should_panic(expected = "Error(Contract, #2512)")]
fn test_swap_missing_pair() {
    let setup = Setup::default();
    setup
        .router
        .get_amounts_out(&setup.user, &E, &setup.addresses(&[0, 2]));
}

#[test]
#[should_panic(expected = "Error(Contract, #2506)")]
fn test_swap_min_out() {
    let setup = Setup::default();
    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &E,
        &1993996023971928200,
        &setup.addresses(&[0, 1]),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2505)")]
fn test_swap_exact_out_max_in() {
    let setup = Setup::default();
    setup.router.uni_swap_tokens_for_exact_tokens(
        &setup.user,
        &E,
        &501505015045636912,
        &setup.addresses(&[0, 1]),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2513)")]
fn test_exact_out_needs_uni_pools() {
    let setup = Setup::default();
    setup
        .router
        .uni_get_amounts_in(&setup.user, &E, &setup.addresses(&[0, 1, 2]));
}

#[test]
fn test_factory_getter() {
    let setup = Setup::default();
    assert_eq!(setup.router.factory(), setup.factory.address);
}
