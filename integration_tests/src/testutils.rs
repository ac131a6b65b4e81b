#![cfg(test)]
extern crate std;

use access_control::params::PoolParams;
use soroban_fee_whitelist_contract::testutils::create_fee_whitelist;
use soroban_fee_whitelist_contract::FeeWhitelistClient;
use soroban_liquidity_pool_contract::testutils::create_uni_pool;
use soroban_liquidity_pool_contract::LiquidityPoolClient as UniPoolClient;
use soroban_liquidity_pool_factory_contract::testutils::create_factory;
use soroban_liquidity_pool_factory_contract::LiquidityPoolFactoryClient;
use soroban_liquidity_pool_router_contract::testutils::create_router;
use soroban_liquidity_pool_router_contract::LiquidityPoolRouterClient;
use soroban_liquidity_pool_stableswap_contract::testutils::create_stable_pool;
use soroban_liquidity_pool_stableswap_contract::LiquidityPoolClient as StablePoolClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{vec, Address, BytesN, Env, Vec};
use soroban_token_contract::testutils::create_token;
use utils::test_utils::jump;

// one whole token at 7 decimals
pub(crate) const UNIT: i128 = 10_000_000;
pub(crate) const FEE: u64 = 30_000_000;
pub(crate) const FEE_DENOMINATOR: i128 = 10_000_000_000;
pub(crate) const ADMIN_FEE: u64 = 5_000_000_000;
pub(crate) const WHITELIST_GROUP: u32 = 7;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) owner: Address,
    pub(crate) winner: Address,
    pub(crate) user: Address,
    pub(crate) tokens: std::vec::Vec<TokenClient<'a>>,
    pub(crate) whitelist: FeeWhitelistClient<'a>,
    pub(crate) factory: LiquidityPoolFactoryClient<'a>,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
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
        let mut tokens = std::vec::Vec::new();
        for _ in 0..3 {
            let token = create_token(&env, &admin, 7);
            token.mint(&user, &(100_000_000 * UNIT));
            tokens.push(TokenClient::new(&env, &token.address));
        }

        // natively registered pools are indexed through add_custom_pair
        let factory = create_factory(
            &env,
            &owner,
            &BytesN::from_array(&env, &[0; 32]),
            &BytesN::from_array(&env, &[0; 32]),
        );

        Setup {
            winner: Address::generate(&env),
            whitelist: create_fee_whitelist(&env, &owner),
            router: create_router(&env, &factory.address),
            env,
            owner,
            user,
            tokens,
            factory,
        }
    }
}

impl<'a> Setup<'a> {
    pub(crate) fn address(&self, idx: usize) -> Address {
        self.tokens[idx].address.clone()
    }

    pub(crate) fn path(&self, idx: &[usize]) -> Vec<Address> {
        let mut result = Vec::new(&self.env);
        for i in idx {
            result.push_back(self.address(*i));
        }
        result
    }

    pub(crate) fn params(&self, admin_fee: u64) -> PoolParams {
        PoolParams {
            owner: self.owner.clone(),
            winner: self.winner.clone(),
            fee: FEE,
            admin_fee,
            winner_fee: 0,
            whitelist: Some(self.whitelist.address.clone()),
            group_id: WHITELIST_GROUP,
        }
    }

    // Constant product pool over (a, b) funded with `reserve` of each side
    pub(crate) fn uni_pool(
        &self,
        a: usize,
        b: usize,
        admin_fee: u64,
        reserve: i128,
    ) -> UniPoolClient<'a> {
        let pool = create_uni_pool(
            &self.env,
            &self.path(&[a, b]),
            &None,
            &self.params(admin_fee),
        );
        self.factory.add_custom_pair(&self.owner, &pool.address);
        self.router.uni_add_liquidity(
            &self.user,
            &self.address(a),
            &self.address(b),
            &reserve,
            &reserve,
            &0,
            &0,
        );
        pool
    }

    pub(crate) fn stable_pool(
        &self,
        a: usize,
        b: usize,
        admin_fee: u64,
        reserve: i128,
    ) -> StablePoolClient<'a> {
        let pool = create_stable_pool(
            &self.env,
            &self.path(&[a, b]),
            &None,
            &self.params(admin_fee),
            200,
        );
        self.factory.add_custom_pair(&self.owner, &pool.address);
        pool.add_liquidity(&self.user, &vec![&self.env, reserve, reserve], &0);
        pool
    }

    pub(crate) fn balances(&self, addr: &Address) -> std::vec::Vec<i128> {
        self.tokens.iter().map(|token| token.balance(addr)).collect()
    }
}

// Constant product output with the fee taken from the input side
pub(crate) fn amount_out(amount_in: i128, reserve_in: i128, reserve_out: i128, fee: u64) -> i128 {
    let amount_in_with_fee = amount_in * (FEE_DENOMINATOR - fee as i128);
    amount_in_with_fee * reserve_out / (reserve_in * FEE_DENOMINATOR + amount_in_with_fee)
}
