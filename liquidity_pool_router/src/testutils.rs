#![cfg(any(test, feature = "testutils"))]

use crate::{LiquidityPoolRouter, LiquidityPoolRouterClient};
use soroban_sdk::{Address, Env};

pub fn create_router<'a>(e: &Env, factory: &Address) -> LiquidityPoolRouterClient<'a> {
    LiquidityPoolRouterClient::new(e, &e.register(LiquidityPoolRouter, (factory.clone(),)))
}
