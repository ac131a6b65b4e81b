#![no_std]

mod contract;
mod errors;
mod pool;
mod pool_interface;
mod storage;
mod test_permissions;
pub mod testutils;
mod token;

pub use contract::{LiquidityPool, LiquidityPoolClient};
pub use errors::LiquidityPoolError;
pub use pool_interface::{AdminFeeTrait, UniPoolTrait};
