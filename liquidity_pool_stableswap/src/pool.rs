use crate::errors::LiquidityPoolError;
use crate::liquidity::charge_imbalance_fees;
use crate::storage::{
    get_balances, get_future_a, get_future_a_time, get_initial_a, get_initial_a_time,
    get_is_killed, get_precision_mul, get_tokens,
};
use crate::token::get_balance;
use access_control::storage::get_fee;
use liquidity_pool_math::stableswap::{fee_of, get_a, get_d, get_y_d, one_coin_fee, xp};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, Vec};
use utils::convert::to_u128;
use utils::math_errors::MathError;

// Current amplification, A_PRECISION included.
pub fn get_amp(e: &Env) -> u128 {
    get_a(
        get_initial_a(e),
        get_initial_a_time(e),
        get_future_a(e),
        get_future_a_time(e),
        e.ledger().timestamp(),
    )
}

pub fn get_d_mem(e: &Env, balances: &Vec<u128>, amp: u128) -> u128 {
    get_d(e, &xp(e, balances, &get_precision_mul(e)), amp)
}

fn lp_supply(e: &Env) -> u128 {
    to_u128(e, token_share::total_supply(e))
}

// Token balances above the tracked reserves.
pub fn get_admin_balances(e: &Env) -> Vec<u128> {
    let balances = get_balances(e);
    let mut result = Vec::new(e);
    for (token, balance) in get_tokens(e).iter().zip(balances.iter()) {
        result.push_back(get_balance(e, &token).saturating_sub(balance));
    }
    result
}

pub fn assert_not_killed(e: &Env) {
    if get_is_killed(e) {
        panic_with_error!(e, LiquidityPoolValidationError::Killed);
    }
}

// Checks vector size and signs, returning unsigned amounts.
pub fn parse_amounts(e: &Env, amounts: &Vec<i128>) -> Vec<u128> {
    if amounts.len() != get_tokens(e).len() {
        panic_with_error!(e, LiquidityPoolValidationError::WrongInputVecSize);
    }
    let mut result = Vec::new(e);
    for amount in amounts.iter() {
        if amount < 0 {
            panic_with_error!(e, LiquidityPoolValidationError::InsufficientInput);
        }
        result.push_back(amount as u128);
    }
    result
}

// Balances after the deposit and LP minted for it.
pub fn calc_deposit(e: &Env, amounts: &Vec<u128>) -> (Vec<u128>, u128) {
    let amp = get_amp(e);
    let old = get_balances(e);
    let total_supply = lp_supply(e);
    let d0 = if total_supply > 0 {
        get_d_mem(e, &old, amp)
    } else {
        0
    };

    let mut new = Vec::new(e);
    for (balance, amount) in old.iter().zip(amounts.iter()) {
        if total_supply == 0 && amount == 0 {
            panic_with_error!(e, LiquidityPoolValidationError::InitialDeposit);
        }
        match balance.checked_add(amount) {
            Some(v) => new.push_back(v),
            None => panic_with_error!(e, MathError::NumberOverflow),
        }
    }

    let d1 = get_d_mem(e, &new, amp);
    if d1 <= d0 {
        panic_with_error!(e, LiquidityPoolError::InvariantDoesNotHold);
    }
    if total_supply == 0 {
        return (new, d1);
    }

    let (stored, after_fees) = charge_imbalance_fees(e, &old, &new, d0, d1);
    let d2 = get_d_mem(e, &after_fees, amp);
    let mint = total_supply.fixed_mul_floor(e, &d2.saturating_sub(d0), &d0);
    (stored, mint)
}

// Balances after the imbalanced withdrawal and LP burned for it.
pub fn calc_imbalanced_withdraw(e: &Env, amounts: &Vec<u128>) -> (Vec<u128>, u128) {
    let total_supply = lp_supply(e);
    if total_supply == 0 {
        panic_with_error!(e, LiquidityPoolError::D0IsZero);
    }
    if amounts.iter().all(|amount| amount == 0) {
        panic_with_error!(e, LiquidityPoolValidationError::ZeroTokenBurn);
    }

    let amp = get_amp(e);
    let old = get_balances(e);
    let d0 = get_d_mem(e, &old, amp);
    if d0 == 0 {
        panic_with_error!(e, LiquidityPoolError::D0IsZero);
    }

    let mut new = Vec::new(e);
    for (balance, amount) in old.iter().zip(amounts.iter()) {
        match balance.checked_sub(amount) {
            Some(v) => new.push_back(v),
            None => panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity),
        }
    }

    let d1 = get_d_mem(e, &new, amp);
    let (stored, after_fees) = charge_imbalance_fees(e, &old, &new, d0, d1);
    let d2 = get_d_mem(e, &after_fees, amp);
    let burn = total_supply.fixed_mul_floor(e, &d0.saturating_sub(d2), &d0) + 1;
    (stored, burn)
}

// Coin `i` received for burning `amount` LP as (amount after fee, fee).
pub fn calc_withdraw_one_coin(e: &Env, amount: u128, i: u32) -> (u128, u128) {
    let total_supply = lp_supply(e);
    if total_supply == 0 {
        panic_with_error!(e, LiquidityPoolError::D0IsZero);
    }
    if amount > total_supply {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let amp = get_amp(e);
    let precision_mul = get_precision_mul(e);
    let xp = xp(e, &get_balances(e), &precision_mul);
    let d0 = get_d(e, &xp, amp);
    let d1 = d0 - d0.fixed_mul_floor(e, &amount, &total_supply);
    let new_y = get_y_d(e, amp, i, &xp, d1);

    let xp_i = xp.get_unchecked(i);
    let dy_0 = xp_i.saturating_sub(new_y) / precision_mul.get_unchecked(i);
    let fee = one_coin_fee(e, get_fee(e), xp_i, xp.iter().sum());
    let dy_fee = fee_of(e, dy_0, fee);
    (dy_0 - dy_fee, dy_fee)
}

pub fn calc_withdraw_coins(e: &Env, amount: u128) -> Vec<u128> {
    let total_supply = lp_supply(e);
    if total_supply == 0 {
        panic_with_error!(e, LiquidityPoolError::D0IsZero);
    }
    if amount > total_supply {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    let mut result = Vec::new(e);
    for balance in get_balances(e).iter() {
        result.push_back(balance.fixed_mul_floor(e, &amount, &total_supply));
    }
    result
}
