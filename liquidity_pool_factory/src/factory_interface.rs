use crate::storage::PoolKind;
use access_control::params::PoolParams;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

pub trait FactoryInterface {
    fn owner(e: Env) -> Address;

    // Hand the factory over. The new owner must differ from the current one.
    fn set_owner(e: Env, owner: Address, new_owner: Address);

    // Replace the WASM hash used for future deployments of `kind`
    fn set_pool_wasm(e: Env, owner: Address, kind: PoolKind, hash: BytesN<32>);

    // Deploy a constant product pool for the pair.
    //
    // # Arguments
    //
    // * `user` - creator paying for the deployment
    // * `pay_token` - admin fee payout token, one of the pair or None
    // * `params` - owner, winner, fees and whitelist of the new pool
    //
    // # Returns
    //
    // Address of the deployed pool
    fn create_pair_uni(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        pay_token: Option<Address>,
        params: PoolParams,
        name: String,
        symbol: String,
    ) -> Address;

    // Deploy a stableswap pool over `tokens` with amplification `a`
    fn create_pair_stable(
        e: Env,
        user: Address,
        tokens: Vec<Address>,
        pay_token: Option<Address>,
        params: PoolParams,
        a: u128,
        name: String,
        symbol: String,
    ) -> Address;

    // Index a pool deployed elsewhere
    fn add_custom_pair(e: Env, owner: Address, pool: Address);

    fn all_pairs(e: Env, idx: u32) -> Address;
    fn all_pairs_length(e: Env) -> u32;

    // First pool indexed for the pair, in either token order
    fn get_pair(e: Env, token_a: Address, token_b: Address) -> Option<Address>;

    // Address a pool of `kind` over `tokens` is (or would be) deployed at
    fn pair_address(e: Env, tokens: Vec<Address>, kind: PoolKind) -> Address;
}

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn tokens(e: Env) -> Vec<Address>;
}
