use crate::errors::LiquidityPoolError;
use crate::pool::{
    get_balances, get_reserves, lp_token_amount, mint_admin_fee, pending_admin_fee, update,
    update_k_last, withdraw_amount,
};
use crate::pool_interface::{AdminFeeTrait, UniPoolTrait};
use crate::storage::{
    get_block_timestamp_last, get_factory, get_k_last, get_minted_admin_balance,
    get_price0_cumulative_last, get_price1_cumulative_last, get_token0, get_token1, set_factory,
    set_k_last, set_minted_admin_balance, set_price0_cumulative_last, set_price1_cumulative_last,
    set_token0, set_token1,
};
use crate::token::transfer_out;
use access_control::access::Governance;
use access_control::constants::MAX_WINNER_FEE;
use access_control::fees::FeeGovernanceTrait;
use access_control::interface::GovernanceInterface;
use access_control::params::PoolParams;
use access_control::storage as governance;
use access_control::transfer::OwnerWinnerTransferTrait;
use access_control::whitelist::WhitelistGovernanceTrait;
use liquidity_pool_math::constant_product::{
    get_amount_in, get_amount_out, get_initial_liquidity, get_liquidity, get_share,
};
use liquidity_pool_math::constants::{FEE_DENOMINATOR, MINIMUM_LIQUIDITY};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, vec, Address, Bytes, Env,
    String, Symbol, Vec, U256,
};
use token_share::LpTokenInterface;
use utils::convert::{to_i128, to_u128};
use utils::u256m::U256M;

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // Configure the pool
    //
    // # Arguments
    //
    // * `factory` - deploying factory, None for a standalone pool
    // * `tokens` - exactly two distinct tokens, kept in the given order
    // * `pay_token` - optional single token admin fees are paid out in
    // * `params` - owner, winner, fees and whitelist binding
    pub fn __constructor(
        e: Env,
        factory: Option<Address>,
        tokens: Vec<Address>,
        pay_token: Option<Address>,
        params: PoolParams,
        name: String,
        symbol: String,
    ) {
        if tokens.len() != 2 {
            panic_with_error!(&e, LiquidityPoolValidationError::WrongInputVecSize);
        }
        let token0 = tokens.get_unchecked(0);
        let token1 = tokens.get_unchecked(1);
        if token0 == token1 {
            panic_with_error!(&e, LiquidityPoolValidationError::CannotSwapSameToken);
        }

        Governance::new(&e).init(&params, &tokens, &pay_token);
        set_factory(&e, &factory);
        set_token0(&e, &token0);
        set_token1(&e, &token1);
        set_k_last(&e, &U256::from_u32(&e, 0));
        set_price0_cumulative_last(&e, &U256::from_u32(&e, 0));
        set_price1_cumulative_last(&e, &U256::from_u32(&e, 0));
        token_share::set_name(&e, &name);
        token_share::set_symbol(&e, &symbol);
    }
}

#[contractimpl]
impl UniPoolTrait for LiquidityPool {
    fn ex_type(_e: Env) -> Symbol {
        symbol_short!("uni")
    }

    fn factory(e: Env) -> Option<Address> {
        get_factory(&e)
    }

    fn tokens(e: Env) -> Vec<Address> {
        vec![&e, get_token0(&e), get_token1(&e)]
    }

    fn n_tokens(_e: Env) -> u32 {
        2
    }

    fn reserves(e: Env) -> Vec<i128> {
        let (reserve0, reserve1) = get_reserves(&e);
        vec![&e, to_i128(&e, reserve0), to_i128(&e, reserve1)]
    }

    fn block_timestamp_last(e: Env) -> u64 {
        get_block_timestamp_last(&e)
    }

    fn price0_cumulative_last(e: Env) -> U256 {
        get_price0_cumulative_last(&e)
    }

    fn price1_cumulative_last(e: Env) -> U256 {
        get_price1_cumulative_last(&e)
    }

    fn k_last(e: Env) -> U256 {
        get_k_last(&e)
    }

    fn mint(e: Env, to: Address) -> i128 {
        let (reserve0, reserve1) = get_reserves(&e);
        let (balance0, balance1) = get_balances(&e);
        let amount0 = balance0.saturating_sub(reserve0);
        let amount1 = balance1.saturating_sub(reserve1);

        let fee_on = mint_admin_fee(&e, reserve0, reserve1);
        let total_supply = to_u128(&e, token_share::total_supply(&e));
        let liquidity = if total_supply == 0 {
            let root = get_initial_liquidity(&e, amount0, amount1);
            if root <= MINIMUM_LIQUIDITY {
                panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
            }
            token_share::mint_locked(&e, MINIMUM_LIQUIDITY as i128);
            root - MINIMUM_LIQUIDITY
        } else {
            get_liquidity(&e, amount0, amount1, reserve0, reserve1, total_supply)
        };
        if liquidity == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
        }

        let liquidity = to_i128(&e, liquidity);
        token_share::mint(&e, &to, liquidity);
        update(&e, balance0, balance1, reserve0, reserve1);
        update_k_last(&e, fee_on, balance0, balance1);
        liquidity
    }

    fn burn(e: Env, to: Address) -> (i128, i128) {
        let (reserve0, reserve1) = get_reserves(&e);
        let (balance0, balance1) = get_balances(&e);
        let pool = e.current_contract_address();
        let liquidity = to_u128(&e, token_share::balance_of(&e, &pool));

        let fee_on = mint_admin_fee(&e, reserve0, reserve1);
        let total_supply = to_u128(&e, token_share::total_supply(&e));
        let amount0 = get_share(&e, liquidity, balance0, total_supply);
        let amount1 = get_share(&e, liquidity, balance1, total_supply);
        if amount0 == 0 || amount1 == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }

        token_share::burn(&e, &pool, to_i128(&e, liquidity));
        transfer_out(&e, &get_token0(&e), &to, amount0);
        transfer_out(&e, &get_token1(&e), &to, amount1);

        let (balance0, balance1) = get_balances(&e);
        update(&e, balance0, balance1, reserve0, reserve1);
        update_k_last(&e, fee_on, balance0, balance1);
        (to_i128(&e, amount0), to_i128(&e, amount1))
    }

    fn swap(
        e: Env,
        user: Address,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        from_hint: Option<Address>,
    ) {
        user.require_auth();
        if amount0_out < 0 || amount1_out < 0 || (amount0_out > 0) == (amount1_out > 0) {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientOutputAmount);
        }
        let amount0_out = amount0_out as u128;
        let amount1_out = amount1_out as u128;

        let (reserve0, reserve1) = get_reserves(&e);
        if amount0_out >= reserve0 || amount1_out >= reserve1 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientLiquidity);
        }
        let token0 = get_token0(&e);
        let token1 = get_token1(&e);
        if to == token0 || to == token1 {
            panic_with_error!(&e, LiquidityPoolError::InvalidTo);
        }

        // optimistic transfer, the product is checked against the resulting balances
        transfer_out(&e, &token0, &to, amount0_out);
        transfer_out(&e, &token1, &to, amount1_out);

        let (balance0, balance1) = get_balances(&e);
        let amount0_in = balance0.saturating_sub(reserve0 - amount0_out);
        let amount1_in = balance1.saturating_sub(reserve1 - amount1_out);
        if amount0_in == 0 && amount1_in == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }

        let fee = U256M::from_u128(&e, Governance::new(&e).fee_for(&user, &from_hint) as u128);
        let den = U256M::from_u128(&e, FEE_DENOMINATOR);
        let adjusted0 = U256M::from_u128(&e, balance0) * &den - U256M::from_u128(&e, amount0_in) * &fee;
        let adjusted1 = U256M::from_u128(&e, balance1) * &den - U256M::from_u128(&e, amount1_in) * &fee;
        let k = U256M::from_u128(&e, reserve0) * U256M::from_u128(&e, reserve1) * den.pow(2);
        if adjusted0 * adjusted1 < k {
            panic_with_error!(&e, LiquidityPoolError::InvariantDoesNotHold);
        }

        update(&e, balance0, balance1, reserve0, reserve1);
    }

    fn skim(e: Env, to: Address) {
        let (reserve0, reserve1) = get_reserves(&e);
        let (balance0, balance1) = get_balances(&e);
        transfer_out(&e, &get_token0(&e), &to, balance0.saturating_sub(reserve0));
        transfer_out(&e, &get_token1(&e), &to, balance1.saturating_sub(reserve1));
    }

    fn sync(e: Env) {
        let (reserve0, reserve1) = get_reserves(&e);
        let (balance0, balance1) = get_balances(&e);
        update(&e, balance0, balance1, reserve0, reserve1);
    }

    fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64 {
        Governance::new(&e).fee_for(&caller, &from_hint)
    }

    fn get_amount_out(
        e: Env,
        caller: Address,
        token_in: Address,
        amount_in: i128,
        from_hint: Option<Address>,
    ) -> i128 {
        if amount_in <= 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        let (reserve_in, reserve_out) = oriented_reserves(&e, &token_in);
        let fee = Governance::new(&e).fee_for(&caller, &from_hint);
        to_i128(
            &e,
            get_amount_out(&e, amount_in as u128, reserve_in, reserve_out, fee),
        )
    }

    fn get_amount_in(
        e: Env,
        caller: Address,
        token_out: Address,
        amount_out: i128,
        from_hint: Option<Address>,
    ) -> i128 {
        if amount_out <= 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientOutputAmount);
        }
        let (reserve_out, reserve_in) = oriented_reserves(&e, &token_out);
        let fee = Governance::new(&e).fee_for(&caller, &from_hint);
        to_i128(
            &e,
            get_amount_in(&e, amount_out as u128, reserve_in, reserve_out, fee),
        )
    }

    fn get_lp_token_amount(e: Env, amount0: i128, amount1: i128) -> i128 {
        if amount0 < 0 || amount1 < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        to_i128(&e, lp_token_amount(&e, amount0 as u128, amount1 as u128))
    }

    fn get_withdraw_amount(e: Env, liquidity: i128) -> (i128, i128) {
        if liquidity < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        let (amount0, amount1) = withdraw_amount(&e, liquidity as u128);
        (to_i128(&e, amount0), to_i128(&e, amount1))
    }
}

// (reserve of `token`, reserve of the other pool token)
fn oriented_reserves(e: &Env, token: &Address) -> (u128, u128) {
    let (reserve0, reserve1) = get_reserves(e);
    if token == &get_token0(e) {
        (reserve0, reserve1)
    } else if token == &get_token1(e) {
        (reserve1, reserve0)
    } else {
        panic_with_error!(e, LiquidityPoolValidationError::NotExistToken);
    }
}

fn swap_without_fee(e: &Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    if amount_in == 0 {
        return 0;
    }
    get_amount_out(e, amount_in, reserve_in, reserve_out, 0)
}

#[contractimpl]
impl AdminFeeTrait for LiquidityPool {
    fn withdraw_admin_fees2(e: Env, admin: Address) -> (i128, i128, i128, i128, i128) {
        Governance::new(&e).assert_owner(&admin);

        let (reserve0, reserve1) = get_reserves(&e);
        let fee_on = mint_admin_fee(&e, reserve0, reserve1);
        let lp_amount = get_minted_admin_balance(&e);
        if lp_amount == 0 {
            return (0, 0, 0, 0, 0);
        }

        let owner = governance::get_owner(&e);
        let winner = governance::get_winner(&e);
        let token0 = get_token0(&e);
        let token1 = get_token1(&e);
        let (balance0, balance1) = get_balances(&e);
        let total_supply = to_u128(&e, token_share::total_supply(&e));
        let amount0 = get_share(&e, lp_amount as u128, balance0, total_supply);
        let amount1 = get_share(&e, lp_amount as u128, balance1, total_supply);

        set_minted_admin_balance(&e, &0);
        token_share::reserve_liquidity(&e, &owner, 0);
        token_share::burn(&e, &owner, lp_amount);

        // the other side is sold through the curve left after the removal
        let (amount0, amount1) = match governance::get_pay_token(&e) {
            Some(pay_token) if pay_token == token0 => (
                amount0 + swap_without_fee(&e, amount1, balance1 - amount1, balance0 - amount0),
                0,
            ),
            Some(_) => (
                0,
                amount1 + swap_without_fee(&e, amount0, balance0 - amount0, balance1 - amount1),
            ),
            None => (amount0, amount1),
        };

        let winner_fee = governance::get_winner_fee(&e) as u128;
        let max_winner_fee = MAX_WINNER_FEE as u128;
        let winner0 = amount0.fixed_mul_floor(&e, &winner_fee, &max_winner_fee);
        let winner1 = amount1.fixed_mul_floor(&e, &winner_fee, &max_winner_fee);
        let owner0 = amount0 - winner0;
        let owner1 = amount1 - winner1;
        transfer_out(&e, &token0, &owner, owner0);
        transfer_out(&e, &token1, &owner, owner1);
        transfer_out(&e, &token0, &winner, winner0);
        transfer_out(&e, &token1, &winner, winner1);

        let (balance0, balance1) = get_balances(&e);
        update(&e, balance0, balance1, reserve0, reserve1);
        update_k_last(&e, fee_on, balance0, balance1);

        log!(&e, "admin fees withdrawn", lp_amount, amount0, amount1);
        (
            lp_amount,
            to_i128(&e, owner0),
            to_i128(&e, owner1),
            to_i128(&e, winner0),
            to_i128(&e, winner1),
        )
    }

    fn admin_balance(e: Env) -> i128 {
        let (reserve0, reserve1) = get_reserves(&e);
        get_minted_admin_balance(&e) + to_i128(&e, pending_admin_fee(&e, reserve0, reserve1))
    }

    fn minted_admin_balance(e: Env) -> i128 {
        get_minted_admin_balance(&e)
    }
}

#[contractimpl]
impl GovernanceInterface for LiquidityPool {
    fn commit_new_fee(e: Env, admin: Address, fee: u64, admin_fee: u64, winner_fee: u64, delay: u64) {
        let pool_is_empty = token_share::total_supply(&e) == 0;
        Governance::new(&e).commit_new_fee(&admin, fee, admin_fee, winner_fee, delay, pool_is_empty);
    }

    // Fees accrued under the previous admin fee are settled before the switch.
    fn apply_new_fee(e: Env, admin: Address) {
        let (reserve0, reserve1) = get_reserves(&e);
        mint_admin_fee(&e, reserve0, reserve1);
        Governance::new(&e).apply_new_fee(&admin);
        update_k_last(&e, governance::get_admin_fee(&e) > 0, reserve0, reserve1);
    }

    fn revert_new_fee(e: Env, admin: Address) {
        Governance::new(&e).revert_new_fee(&admin);
    }

    fn commit_new_whitelist(
        e: Env,
        admin: Address,
        whitelist: Option<Address>,
        group_id: u32,
        delay: u64,
    ) {
        Governance::new(&e).commit_new_whitelist(&admin, &whitelist, group_id, delay);
    }

    fn apply_new_whitelist(e: Env, admin: Address) {
        Governance::new(&e).apply_new_whitelist(&admin);
    }

    fn revert_new_whitelist(e: Env, admin: Address) {
        Governance::new(&e).revert_new_whitelist(&admin);
    }

    fn commit_transfer_owner_winner(
        e: Env,
        admin: Address,
        new_owner: Address,
        new_winner: Address,
        delay: u64,
    ) {
        Governance::new(&e).commit_transfer_owner_winner(&admin, &new_owner, &new_winner, delay);
    }

    // The minted admin LP and its floor follow the ownership.
    fn apply_transfer_owner_winner(e: Env, admin: Address) {
        let (_, new_owner) = Governance::new(&e).apply_transfer_owner_winner(&admin);
        token_share::move_reserved_liquidity(&e, &new_owner);
    }

    fn revert_transfer_owner_winner(e: Env, admin: Address) {
        Governance::new(&e).revert_transfer_owner_winner(&admin);
    }

    fn set_pay_token(e: Env, admin: Address, pay_token: Option<Address>) {
        let tokens = vec![&e, get_token0(&e), get_token1(&e)];
        Governance::new(&e).set_pay_token(&admin, &tokens, &pay_token);
    }

    fn set_name(e: Env, admin: Address, name: String) {
        Governance::new(&e).assert_owner(&admin);
        token_share::set_name(&e, &name);
    }

    fn set_symbol(e: Env, admin: Address, symbol: String) {
        Governance::new(&e).assert_owner(&admin);
        token_share::set_symbol(&e, &symbol);
    }

    fn fee(e: Env) -> u64 {
        governance::get_fee(&e)
    }

    fn admin_fee(e: Env) -> u64 {
        governance::get_admin_fee(&e)
    }

    fn winner_fee(e: Env) -> u64 {
        governance::get_winner_fee(&e)
    }

    fn future_fee(e: Env) -> u64 {
        governance::get_future_fee(&e)
    }

    fn future_admin_fee(e: Env) -> u64 {
        governance::get_future_admin_fee(&e)
    }

    fn future_winner_fee(e: Env) -> u64 {
        governance::get_future_winner_fee(&e)
    }

    fn admin_actions_deadline(e: Env) -> u64 {
        governance::get_admin_actions_deadline(&e)
    }

    fn owner(e: Env) -> Address {
        governance::get_owner(&e)
    }

    fn winner(e: Env) -> Address {
        governance::get_winner(&e)
    }

    fn future_owner(e: Env) -> Option<Address> {
        governance::get_future_owner(&e)
    }

    fn future_winner(e: Env) -> Option<Address> {
        governance::get_future_winner(&e)
    }

    fn transfer_owner_winner_deadline(e: Env) -> u64 {
        governance::get_transfer_owner_winner_deadline(&e)
    }

    fn whitelist(e: Env) -> Option<Address> {
        governance::get_whitelist(&e)
    }

    fn group_id(e: Env) -> u32 {
        governance::get_group_id(&e)
    }

    fn future_whitelist(e: Env) -> Option<Address> {
        governance::get_future_whitelist(&e)
    }

    fn future_group_id(e: Env) -> u32 {
        governance::get_future_group_id(&e)
    }

    fn whitelist_deadline(e: Env) -> u64 {
        governance::get_whitelist_deadline(&e)
    }

    fn fee_whitelist(e: Env, addr: Address) -> Bytes {
        Governance::new(&e).fee_whitelist(&addr)
    }

    fn fee_address(e: Env, addr: Address) -> u64 {
        Governance::new(&e).fee_for(&addr, &None)
    }

    fn pay_token(e: Env) -> Option<Address> {
        governance::get_pay_token(&e)
    }
}

#[contractimpl]
impl LpTokenInterface for LiquidityPool {
    fn name(e: Env) -> String {
        token_share::get_name(&e)
    }

    fn symbol(e: Env) -> String {
        token_share::get_symbol(&e)
    }

    fn decimals(_e: Env) -> u32 {
        token_share::DECIMALS
    }

    fn total_supply(e: Env) -> i128 {
        token_share::total_supply(&e)
    }

    fn balance_of(e: Env, id: Address) -> i128 {
        token_share::balance_of(&e, &id)
    }

    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        token_share::allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        token_share::approve(&e, &from, &spender, amount);
    }

    fn increase_allowance(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        token_share::increase_allowance(&e, &from, &spender, amount);
    }

    fn decrease_allowance(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        token_share::decrease_allowance(&e, &from, &spender, amount);
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        token_share::transfer(&e, &from, &to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        token_share::transfer_from(&e, &spender, &from, &to, amount);
    }
}
