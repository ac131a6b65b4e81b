use crate::u256m::U256M;
use soroban_sdk::Env;

// All monetary values carry 18 fractional digits.
pub const DECIMALS: u32 = 18;
pub const ONE: i128 = 1_000_000_000_000_000_000;

// whole * 10^18 + frac
pub const fn amount(whole: i128, frac: i128) -> i128 {
    whole * ONE + frac
}

// a / b * 10^18
pub fn fixed_div(e: &Env, a: &U256M, b: &U256M) -> U256M {
    a.mul_div(&U256M::from_u128(e, ONE as u128), b)
}
