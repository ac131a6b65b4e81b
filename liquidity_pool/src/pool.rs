use crate::storage::{
    get_block_timestamp_last, get_k_last, get_minted_admin_balance, get_price0_cumulative_last,
    get_price1_cumulative_last, get_reserve0, get_reserve1, get_token0, get_token1,
    set_block_timestamp_last, set_k_last, set_minted_admin_balance, set_price0_cumulative_last,
    set_price1_cumulative_last, set_reserve0, set_reserve1,
};
use crate::token::get_balance;
use access_control::storage::{get_admin_fee, get_owner};
use liquidity_pool_math::constant_product::{
    get_initial_liquidity, get_liquidity, get_mint_fee, get_share,
};
use liquidity_pool_math::constants::{MINIMUM_LIQUIDITY, PRECISION};
use soroban_sdk::{Env, U256};
use utils::convert::{to_i128, to_u128};
use utils::u256m::U256M;

pub fn get_reserves(e: &Env) -> (u128, u128) {
    (get_reserve0(e), get_reserve1(e))
}

pub fn get_balances(e: &Env) -> (u128, u128) {
    (get_balance(e, &get_token0(e)), get_balance(e, &get_token1(e)))
}

// Stores new reserves, accumulating prices over the time the old ones were in effect.
pub fn update(e: &Env, balance0: u128, balance1: u128, reserve0: u128, reserve1: u128) {
    let now = e.ledger().timestamp();
    let elapsed = now.saturating_sub(get_block_timestamp_last(e));
    if elapsed > 0 && reserve0 != 0 && reserve1 != 0 {
        let precision = U256M::from_u128(e, PRECISION);
        let elapsed = U256M::from_u128(e, elapsed as u128);
        let r0 = U256M::from_u128(e, reserve0);
        let r1 = U256M::from_u128(e, reserve1);

        let price0 = r1.mul_div(&precision, &r0) * &elapsed;
        let price1 = r0.mul_div(&precision, &r1) * &elapsed;
        set_price0_cumulative_last(e, &get_price0_cumulative_last(e).add(&price0.v));
        set_price1_cumulative_last(e, &get_price1_cumulative_last(e).add(&price1.v));
    }

    set_reserve0(e, &balance0);
    set_reserve1(e, &balance1);
    set_block_timestamp_last(e, &now);
}

// LP owed to the owner for fees accrued since the latest liquidity event.
pub fn pending_admin_fee(e: &Env, reserve0: u128, reserve1: u128) -> u128 {
    get_mint_fee(
        e,
        to_u128(e, token_share::total_supply(e)),
        reserve0,
        reserve1,
        &get_k_last(e),
        get_admin_fee(e),
    )
}

// Mints the pending admin LP to the owner and raises the owner liquidity floor.
// Returns whether the admin fee is on.
pub fn mint_admin_fee(e: &Env, reserve0: u128, reserve1: u128) -> bool {
    if get_admin_fee(e) == 0 {
        if get_k_last(e) != U256::from_u32(e, 0) {
            set_k_last(e, &U256::from_u32(e, 0));
        }
        return false;
    }

    let liquidity = pending_admin_fee(e, reserve0, reserve1);
    if liquidity > 0 {
        let owner = get_owner(e);
        let liquidity = to_i128(e, liquidity);
        token_share::mint(e, &owner, liquidity);
        let minted = get_minted_admin_balance(e) + liquidity;
        set_minted_admin_balance(e, &minted);
        token_share::reserve_liquidity(e, &owner, minted);
    }
    true
}

pub fn update_k_last(e: &Env, fee_on: bool, reserve0: u128, reserve1: u128) {
    if fee_on {
        let k = U256::from_u128(e, reserve0).mul(&U256::from_u128(e, reserve1));
        set_k_last(e, &k);
    }
}

// LP a deposit of (amount0, amount1) would mint right now, admin fee included.
pub fn lp_token_amount(e: &Env, amount0: u128, amount1: u128) -> u128 {
    let (reserve0, reserve1) = get_reserves(e);
    let total_supply = to_u128(e, token_share::total_supply(e));
    if total_supply == 0 {
        return get_initial_liquidity(e, amount0, amount1).saturating_sub(MINIMUM_LIQUIDITY);
    }
    let total_supply = total_supply + pending_admin_fee(e, reserve0, reserve1);
    get_liquidity(e, amount0, amount1, reserve0, reserve1, total_supply)
}

// Tokens `liquidity` LP would be redeemed for right now, admin fee included.
pub fn withdraw_amount(e: &Env, liquidity: u128) -> (u128, u128) {
    let (reserve0, reserve1) = get_reserves(e);
    let (balance0, balance1) = get_balances(e);
    let total_supply =
        to_u128(e, token_share::total_supply(e)) + pending_admin_fee(e, reserve0, reserve1);
    (
        get_share(e, liquidity, balance0, total_supply),
        get_share(e, liquidity, balance1, total_supply),
    )
}
