#![no_std]

mod contract;
mod errors;
mod liquidity;
mod pool_interface;
mod pool_utils;
mod router_interface;
mod storage;
mod test;
mod test_permissions;
pub mod testutils;

pub use contract::{LiquidityPoolRouter, LiquidityPoolRouterClient};
pub use errors::RouterError;
pub use router_interface::{RouterInterface, UniLiquidityInterface};
