#![no_std]

mod contract;
mod errors;
mod factory_interface;
mod pool_utils;
mod storage;
pub mod testutils;

pub use contract::{LiquidityPoolFactory, LiquidityPoolFactoryClient};
pub use errors::FactoryError;
pub use factory_interface::FactoryInterface;
pub use storage::PoolKind;
