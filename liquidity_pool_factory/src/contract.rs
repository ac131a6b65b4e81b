use crate::errors::FactoryError;
use crate::factory_interface::{FactoryInterface, PoolClient};
use crate::pool_utils::{add_pool, assert_token_set_free, get_pool_salt, sort_tokens};
use crate::storage::{
    get_owner, get_pair_at, get_pair_of, get_pairs_count, get_pool_hash, set_owner,
    set_pool_hash, set_stable_pool_hash, set_uni_pool_hash, PoolKind,
};
use access_control::access::assert_pay_token;
use access_control::params::PoolParams;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, vec, Address, BytesN, Env, String, Vec,
};

#[contract]
pub struct LiquidityPoolFactory;

fn require_owner(e: &Env, owner: &Address) {
    owner.require_auth();
    if owner != &get_owner(e) {
        panic_with_error!(e, FactoryError::Forbidden);
    }
}

fn prepare_tokens(
    e: &Env,
    kind: PoolKind,
    tokens: &Vec<Address>,
) -> (Vec<Address>, BytesN<32>) {
    let sorted = sort_tokens(e, tokens);
    assert_token_set_free(e, &sorted);
    let salt = get_pool_salt(e, kind, &sorted);
    (sorted, salt)
}

#[contractimpl]
impl LiquidityPoolFactory {
    pub fn __constructor(e: Env, owner: Address, uni_hash: BytesN<32>, stable_hash: BytesN<32>) {
        set_owner(&e, &owner);
        set_uni_pool_hash(&e, &uni_hash);
        set_stable_pool_hash(&e, &stable_hash);
    }
}

#[contractimpl]
impl FactoryInterface for LiquidityPoolFactory {
    fn owner(e: Env) -> Address {
        get_owner(&e)
    }

    fn set_owner(e: Env, owner: Address, new_owner: Address) {
        require_owner(&e, &owner);
        if new_owner == owner {
            panic_with_error!(&e, FactoryError::Forbidden);
        }
        set_owner(&e, &new_owner);
    }

    fn set_pool_wasm(e: Env, owner: Address, kind: PoolKind, hash: BytesN<32>) {
        require_owner(&e, &owner);
        set_pool_hash(&e, kind, &hash);
    }

    fn create_pair_uni(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        pay_token: Option<Address>,
        params: PoolParams,
        name: String,
        symbol: String,
    ) -> Address {
        user.require_auth();
        let tokens = vec![&e, token_a, token_b];
        assert_pay_token(&e, &tokens, &pay_token);
        let (sorted, salt) = prepare_tokens(&e, PoolKind::Uni, &tokens);

        let pool = e.deployer().with_current_contract(salt).deploy_v2(
            get_pool_hash(&e, PoolKind::Uni),
            (
                Some(e.current_contract_address()),
                sorted.clone(),
                pay_token,
                params,
                name,
                symbol,
            ),
        );
        add_pool(&e, &sorted, &pool);
        log!(&e, "uni pair created", sorted, pool);
        pool
    }

    fn create_pair_stable(
        e: Env,
        user: Address,
        tokens: Vec<Address>,
        pay_token: Option<Address>,
        params: PoolParams,
        a: u128,
        name: String,
        symbol: String,
    ) -> Address {
        user.require_auth();
        assert_pay_token(&e, &tokens, &pay_token);
        let (sorted, salt) = prepare_tokens(&e, PoolKind::Stable, &tokens);

        let pool = e.deployer().with_current_contract(salt).deploy_v2(
            get_pool_hash(&e, PoolKind::Stable),
            (
                Some(e.current_contract_address()),
                sorted.clone(),
                pay_token,
                params,
                a,
                name,
                symbol,
            ),
        );
        add_pool(&e, &sorted, &pool);
        log!(&e, "stable pair created", sorted, pool);
        pool
    }

    fn add_custom_pair(e: Env, owner: Address, pool: Address) {
        require_owner(&e, &owner);
        let tokens = PoolClient::new(&e, &pool).tokens();
        let sorted = sort_tokens(&e, &tokens);
        assert_token_set_free(&e, &sorted);
        add_pool(&e, &sorted, &pool);
        log!(&e, "custom pair added", sorted, pool);
    }

    fn all_pairs(e: Env, idx: u32) -> Address {
        match get_pair_at(&e, &idx) {
            Some(pool) => pool,
            None => panic_with_error!(&e, FactoryError::PairIndexOutOfBounds),
        }
    }

    fn all_pairs_length(e: Env) -> u32 {
        get_pairs_count(&e)
    }

    fn get_pair(e: Env, token_a: Address, token_b: Address) -> Option<Address> {
        get_pair_of(&e, &token_a, &token_b)
    }

    fn pair_address(e: Env, tokens: Vec<Address>, kind: PoolKind) -> Address {
        let sorted = sort_tokens(&e, &tokens);
        e.deployer()
            .with_current_contract(get_pool_salt(&e, kind, &sorted))
            .deployed_address()
    }
}
