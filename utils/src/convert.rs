use crate::math_errors::MathError;
use soroban_sdk::{panic_with_error, Env};

// Token interfaces speak i128 while the math works on unsigned values.
pub fn to_u128(e: &Env, value: i128) -> u128 {
    match u128::try_from(value) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}

pub fn to_i128(e: &Env, value: u128) -> i128 {
    match i128::try_from(value) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}
