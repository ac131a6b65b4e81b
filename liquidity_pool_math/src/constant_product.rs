use crate::constants::FEE_DENOMINATOR;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, U256};
use utils::u256m::U256M;

// Output for an exact input, fee taken from the input side:
// out = dx * (DEN - fee) * y / (x * DEN + dx * (DEN - fee))
pub fn get_amount_out(
    e: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee: u64,
) -> u128 {
    if amount_in == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientInput);
    }
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let den = U256M::from_u128(e, FEE_DENOMINATOR);
    let amount_in_with_fee =
        U256M::from_u128(e, amount_in) * U256M::from_u128(e, FEE_DENOMINATOR - fee as u128);
    let numerator = &amount_in_with_fee * U256M::from_u128(e, reserve_out);
    let denominator = U256M::from_u128(e, reserve_in) * &den + amount_in_with_fee;
    (numerator / denominator).to_u128()
}

// Input needed for an exact output, rounded up and padded by one unit:
// in = ceil(x * dy * DEN / ((y - dy) * (DEN - fee))) + 1
pub fn get_amount_in(
    e: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee: u64,
) -> u128 {
    if amount_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientOutputAmount);
    }
    if reserve_in == 0 || amount_out >= reserve_out {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let numerator = U256M::from_u128(e, reserve_in)
        * U256M::from_u128(e, amount_out)
        * U256M::from_u128(e, FEE_DENOMINATOR);
    let denominator = U256M::from_u128(e, reserve_out - amount_out)
        * U256M::from_u128(e, FEE_DENOMINATOR - fee as u128);
    let one = U256M::from_u32(e, 1);
    (numerator.mul_div_ceil(&one, &denominator) + one).to_u128()
}

// Amount of the second token matching `amount_a` at the current price.
pub fn quote(e: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    if amount_a == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientInput);
    }
    if reserve_a == 0 || reserve_b == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    amount_a.fixed_mul_floor(e, &reserve_b, &reserve_a)
}

// LP minted for a deposit into a pool which already has liquidity.
pub fn get_liquidity(
    e: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> u128 {
    if reserve0 == 0 || reserve1 == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    let liquidity0 = amount0.fixed_mul_floor(e, &total_supply, &reserve0);
    let liquidity1 = amount1.fixed_mul_floor(e, &total_supply, &reserve1);
    liquidity0.min(liquidity1)
}

// Geometric mean of the first deposit, the locked minimum is not subtracted here.
pub fn get_initial_liquidity(e: &Env, amount0: u128, amount1: u128) -> u128 {
    (U256M::from_u128(e, amount0) * U256M::from_u128(e, amount1))
        .sqrt()
        .to_u128()
}

// Pro-rata part of `balance` owned by `liquidity` LP.
pub fn get_share(e: &Env, liquidity: u128, balance: u128, total_supply: u128) -> u128 {
    if total_supply == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    liquidity.fixed_mul_floor(e, &balance, &total_supply)
}

// LP minted to the owner for the growth of sqrt(k) since the last liquidity event:
// total_supply * (sqrt(k) - sqrt(k_last)) / (sqrt(k) * DEN / admin_fee - sqrt(k) + sqrt(k_last))
pub fn get_mint_fee(
    e: &Env,
    total_supply: u128,
    reserve0: u128,
    reserve1: u128,
    k_last: &U256,
    admin_fee: u64,
) -> u128 {
    let k_last = U256M::from_u256(k_last.clone());
    if admin_fee == 0 || k_last.is_zero() {
        return 0;
    }

    let root_k = (U256M::from_u128(e, reserve0) * U256M::from_u128(e, reserve1)).sqrt();
    let root_k_last = k_last.sqrt();
    if root_k <= root_k_last {
        return 0;
    }

    let numerator = U256M::from_u128(e, total_supply) * (&root_k - &root_k_last);
    let denominator = root_k.mul_div(
        &U256M::from_u128(e, FEE_DENOMINATOR),
        &U256M::from_u128(e, admin_fee as u128),
    ) - &root_k
        + root_k_last;
    (numerator / denominator).to_u128()
}

// Part of a one-sided deposit which has to be swapped so that the rest
// can be added at the post-swap price without leftovers:
// s = (sqrt(r^2 (DEN + g)^2 + 4 g DEN r a) - r (DEN + g)) / (2 g), g = DEN - fee
pub fn get_one_coin_swap_amount(e: &Env, reserve_in: u128, amount_in: u128, fee: u64) -> u128 {
    let den = U256M::from_u128(e, FEE_DENOMINATOR);
    let g = U256M::from_u128(e, FEE_DENOMINATOR - fee as u128);
    let r = U256M::from_u128(e, reserve_in);
    let a = U256M::from_u128(e, amount_in);
    let den_plus_g = &den + &g;

    let discriminant = (&r * &den_plus_g).pow(2) + U256M::from_u32(e, 4) * &g * &den * &r * &a;
    let root = discriminant.sqrt();
    let shift = &r * &den_plus_g;
    ((root - shift) / (U256M::from_u32(e, 2) * &g)).to_u128()
}
