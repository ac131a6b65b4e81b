#![no_std]

pub mod constant_product;
pub mod constants;
pub mod stableswap;
mod test;
