#![cfg(any(test, feature = "testutils"))]

use crate::{LiquidityPool, LiquidityPoolClient};
use access_control::params::PoolParams;
use soroban_sdk::{Address, Env, String, Vec};

pub fn pool_params(owner: &Address, winner: &Address, fee: u64) -> PoolParams {
    PoolParams {
        owner: owner.clone(),
        winner: winner.clone(),
        fee,
        admin_fee: 0,
        winner_fee: 0,
        whitelist: None,
        group_id: 0,
    }
}

pub fn create_uni_pool<'a>(
    e: &Env,
    tokens: &Vec<Address>,
    pay_token: &Option<Address>,
    params: &PoolParams,
) -> LiquidityPoolClient<'a> {
    LiquidityPoolClient::new(
        e,
        &e.register(
            LiquidityPool,
            (
                None::<Address>,
                tokens.clone(),
                pay_token.clone(),
                params.clone(),
                String::from_str(e, "Uni LP"),
                String::from_str(e, "ULP"),
            ),
        ),
    )
}
