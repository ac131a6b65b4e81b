use crate::errors::LiquidityPoolError;
use liquidity_pool_math::constants::MAX_DECIMALS;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Get decimals for all pool tokens
pub fn read_decimals(e: &Env, tokens: &Vec<Address>) -> Vec<u32> {
    let mut decimals = Vec::new(e);
    for token in tokens.iter() {
        decimals.push_back(SorobanTokenClient::new(e, &token).decimals());
    }
    decimals
}

// Multipliers bringing every token to 18 decimals.
pub fn get_precision_mul(e: &Env, decimals: &Vec<u32>) -> Vec<u128> {
    let mut precision_mul = Vec::new(e);
    for token_decimals in decimals.iter() {
        if token_decimals > MAX_DECIMALS {
            panic_with_error!(e, LiquidityPoolError::DecimalsTooLarge);
        }
        precision_mul.push_back(10u128.pow(MAX_DECIMALS - token_decimals));
    }
    precision_mul
}
