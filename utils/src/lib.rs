#![no_std]

pub mod bump;
pub mod constant;
pub mod convert;
pub mod fixed_point;
pub mod math_errors;
pub mod storage;
pub mod storage_errors;
pub mod test_utils;
pub mod u256_math;
pub mod u256m;
