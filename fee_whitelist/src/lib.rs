#![no_std]

mod contract;
mod errors;
mod interface;
mod storage;
pub mod testutils;

pub use contract::{FeeWhitelist, FeeWhitelistClient};
pub use errors::WhitelistError;
