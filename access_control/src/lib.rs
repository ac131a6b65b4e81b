#![no_std]

pub mod access;
pub mod constants;
pub mod errors;
pub mod fees;
pub mod interface;
pub mod params;
pub mod storage;
pub mod transfer;
pub mod whitelist;
mod test;
