#![cfg(any(test, feature = "testutils"))]

use crate::{LiquidityPoolFactory, LiquidityPoolFactoryClient};
use soroban_sdk::{Address, BytesN, Env};

pub fn create_factory<'a>(
    e: &Env,
    owner: &Address,
    uni_hash: &BytesN<32>,
    stable_hash: &BytesN<32>,
) -> LiquidityPoolFactoryClient<'a> {
    LiquidityPoolFactoryClient::new(
        e,
        &e.register(
            LiquidityPoolFactory,
            (owner.clone(), uni_hash.clone(), stable_hash.clone()),
        ),
    )
}
