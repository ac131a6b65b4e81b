use crate::errors::LPTokenError;
use crate::storage::{
    get_allowance, get_balance, get_reserved_liquidity, get_total_supply, set_allowance,
    set_balance, set_reserved_liquidity, set_total_supply,
};
use soroban_sdk::{panic_with_error, Address, Env};
use utils::math_errors::MathError;

pub const DECIMALS: u32 = 18;

// never decremented when spent
pub const INFINITE_ALLOWANCE: i128 = i128::MAX;

pub fn total_supply(e: &Env) -> i128 {
    get_total_supply(e)
}

pub fn balance_of(e: &Env, addr: &Address) -> i128 {
    get_balance(e, addr)
}

pub fn allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    get_allowance(e, from, spender)
}

pub fn approve(e: &Env, from: &Address, spender: &Address, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::ApproveNegativeAmount);
    }
    set_allowance(e, from, spender, amount);
}

pub fn increase_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) -> i128 {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::IncreaseAllowanceNegativeAmount);
    }
    let value = get_allowance(e, from, spender).saturating_add(amount);
    set_allowance(e, from, spender, value);
    value
}

pub fn decrease_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) -> i128 {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::DecreaseAllowanceNegativeAmount);
    }
    let current = get_allowance(e, from, spender);
    if current < amount {
        panic_with_error!(e, LPTokenError::DecreaseAllowanceBelowZero);
    }
    set_allowance(e, from, spender, current - amount);
    current - amount
}

pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::TransferNegativeAmount);
    }
    if from == to {
        if get_balance(e, from) < amount {
            panic_with_error!(e, LPTokenError::TransferExceedBalance);
        }
        return;
    }
    debit(e, from, amount, LPTokenError::TransferExceedBalance);
    credit(e, to, amount);
}

pub fn transfer_from(e: &Env, spender: &Address, from: &Address, to: &Address, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::TransferNegativeAmount);
    }
    let allowance = get_allowance(e, from, spender);
    if allowance < amount {
        panic_with_error!(e, LPTokenError::TransferExceedAllowance);
    }
    if allowance != INFINITE_ALLOWANCE {
        set_allowance(e, from, spender, allowance - amount);
    }
    transfer(e, from, to, amount);
}

pub fn mint(e: &Env, to: &Address, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::TransferNegativeAmount);
    }
    credit(e, to, amount);
    add_supply(e, amount);
}

// Increases the supply without crediting anyone, the amount stays locked forever.
pub fn mint_locked(e: &Env, amount: i128) {
    add_supply(e, amount);
}

pub fn burn(e: &Env, from: &Address, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LPTokenError::TransferNegativeAmount);
    }
    debit(e, from, amount, LPTokenError::BurnExceedBalance);
    set_total_supply(e, &(get_total_supply(e) - amount));
}

// Sets the floor `holder` balance may not be debited below.
pub fn reserve_liquidity(e: &Env, holder: &Address, amount: i128) {
    set_reserved_liquidity(e, &Some((holder.clone(), amount)));
}

// Moves the reserved balance to a new holder along with the floor itself.
pub fn move_reserved_liquidity(e: &Env, new_holder: &Address) {
    if let Some((holder, amount)) = get_reserved_liquidity(e) {
        if &holder == new_holder {
            return;
        }
        set_reserved_liquidity(e, &None);
        transfer(e, &holder, new_holder, amount);
        reserve_liquidity(e, new_holder, amount);
    }
}

fn debit(e: &Env, from: &Address, amount: i128, exceed_error: LPTokenError) {
    let balance = get_balance(e, from);
    if balance < amount {
        panic_with_error!(e, exceed_error);
    }
    if let Some((holder, reserved)) = get_reserved_liquidity(e) {
        if &holder == from && balance - amount < reserved {
            panic_with_error!(e, LPTokenError::OwnerLiquidity);
        }
    }
    set_balance(e, from, balance - amount);
}

fn credit(e: &Env, to: &Address, amount: i128) {
    let balance = get_balance(e, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, MathError::NumberOverflow));
    set_balance(e, to, balance);
}

fn add_supply(e: &Env, amount: i128) {
    let supply = get_total_supply(e)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, MathError::NumberOverflow));
    set_total_supply(e, &supply);
}
