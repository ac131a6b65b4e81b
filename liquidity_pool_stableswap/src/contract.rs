use crate::errors::LiquidityPoolError;
use crate::normalize::{get_precision_mul, read_decimals};
use crate::pool::{
    assert_not_killed, calc_deposit, calc_imbalanced_withdraw, calc_withdraw_coins,
    calc_withdraw_one_coin, get_admin_balances, get_amp, get_d_mem, parse_amounts,
};
use crate::pool_constants::{MAX_A, MAX_A_CHANGE, MAX_TOKENS};
use crate::pool_interface::{AdminInterfaceTrait, StableSwapTrait};
use crate::storage::{
    get_balances, get_factory, get_future_a, get_future_a_time, get_initial_a,
    get_initial_a_time, get_is_killed, get_precision_mul as get_stored_precision_mul, get_tokens,
    set_balances, set_factory, set_future_a, set_future_a_time, set_initial_a,
    set_initial_a_time, set_is_killed, set_precision_mul, set_tokens,
};
use crate::token::{transfer_in, transfer_out};
use access_control::access::Governance;
use access_control::constants::{MAX_WINNER_FEE, MIN_RAMP_TIME};
use access_control::errors::GovernanceError;
use access_control::fees::FeeGovernanceTrait;
use access_control::interface::GovernanceInterface;
use access_control::params::PoolParams;
use access_control::storage as governance;
use access_control::transfer::OwnerWinnerTransferTrait;
use access_control::whitelist::WhitelistGovernanceTrait;
use liquidity_pool_math::constants::{A_PRECISION, PRECISION};
use liquidity_pool_math::stableswap::{fee_of, get_dy, get_virtual_price};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, Address, Bytes, Env, String,
    Symbol, Vec,
};
use token_share::LpTokenInterface;
use utils::convert::{to_i128, to_u128};

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // Configure the pool
    //
    // # Arguments
    //
    // * `factory` - deploying factory, None for a standalone pool
    // * `tokens` - 2 to 8 distinct tokens with at most 18 decimals
    // * `pay_token` - optional single token admin fees are paid out in
    // * `params` - owner, winner, fees and whitelist binding
    // * `a` - amplification coefficient, without A_PRECISION
    pub fn __constructor(
        e: Env,
        factory: Option<Address>,
        tokens: Vec<Address>,
        pay_token: Option<Address>,
        params: PoolParams,
        a: u128,
        name: String,
        symbol: String,
    ) {
        let n_tokens = tokens.len();
        if !(2..=MAX_TOKENS).contains(&n_tokens) {
            panic_with_error!(&e, LiquidityPoolValidationError::WrongInputVecSize);
        }
        for i in 0..n_tokens {
            for j in (i + 1)..n_tokens {
                if tokens.get_unchecked(i) == tokens.get_unchecked(j) {
                    panic_with_error!(&e, LiquidityPoolValidationError::CannotSwapSameToken);
                }
            }
        }
        if a == 0 || a >= MAX_A {
            panic_with_error!(&e, LiquidityPoolError::RampABig);
        }

        Governance::new(&e).init(&params, &tokens, &pay_token);
        set_factory(&e, &factory);
        set_tokens(&e, &tokens);
        set_precision_mul(&e, &get_precision_mul(&e, &read_decimals(&e, &tokens)));

        let mut balances = Vec::new(&e);
        for _ in 0..n_tokens {
            balances.push_back(0_u128);
        }
        set_balances(&e, &balances);

        let now = e.ledger().timestamp();
        set_initial_a(&e, &(a * A_PRECISION));
        set_future_a(&e, &(a * A_PRECISION));
        set_initial_a_time(&e, &now);
        set_future_a_time(&e, &now);

        token_share::set_name(&e, &name);
        token_share::set_symbol(&e, &symbol);
    }
}

fn to_i128_vec(e: &Env, values: &Vec<u128>) -> Vec<i128> {
    let mut result = Vec::new(e);
    for value in values.iter() {
        result.push_back(to_i128(e, value));
    }
    result
}

fn assert_pair_indexes(e: &Env, i: u32, j: u32) {
    let n_tokens = get_tokens(e).len();
    if i >= n_tokens {
        panic_with_error!(e, LiquidityPoolValidationError::InTokenOutOfBounds);
    }
    if j >= n_tokens {
        panic_with_error!(e, LiquidityPoolValidationError::OutTokenOutOfBounds);
    }
    if i == j {
        panic_with_error!(e, LiquidityPoolValidationError::CannotSwapSameToken);
    }
}

fn assert_coin_index(e: &Env, i: u32) {
    if i >= get_tokens(e).len() {
        panic_with_error!(e, LiquidityPoolValidationError::IndexOutOfBounds);
    }
}

fn quote_dy(e: &Env, i: u32, j: u32, dx: u128, fee: u64) -> (u128, u128) {
    match get_dy(
        e,
        i,
        j,
        dx,
        &get_balances(e),
        &get_stored_precision_mul(e),
        get_amp(e),
        fee,
    ) {
        Some(result) => result,
        None => panic_with_error!(e, LiquidityPoolError::ExchangeDyNotPositive),
    }
}

#[contractimpl]
impl StableSwapTrait for LiquidityPool {
    fn ex_type(_e: Env) -> Symbol {
        symbol_short!("stable")
    }

    fn factory(e: Env) -> Option<Address> {
        get_factory(&e)
    }

    fn tokens(e: Env) -> Vec<Address> {
        get_tokens(&e)
    }

    fn n_tokens(e: Env) -> u32 {
        get_tokens(&e).len()
    }

    fn reserves(e: Env) -> Vec<i128> {
        to_i128_vec(&e, &get_balances(&e))
    }

    fn a(e: Env) -> u128 {
        get_amp(&e) / A_PRECISION
    }

    fn a_precise(e: Env) -> u128 {
        get_amp(&e)
    }

    fn initial_a(e: Env) -> u128 {
        get_initial_a(&e) / A_PRECISION
    }

    fn future_a(e: Env) -> u128 {
        get_future_a(&e) / A_PRECISION
    }

    fn initial_a_time(e: Env) -> u64 {
        get_initial_a_time(&e)
    }

    fn future_a_time(e: Env) -> u64 {
        get_future_a_time(&e)
    }

    fn rates(e: Env) -> Vec<u128> {
        let mut rates = Vec::new(&e);
        for mul in get_stored_precision_mul(&e).iter() {
            rates.push_back(mul * PRECISION);
        }
        rates
    }

    fn precision_mul(e: Env) -> Vec<u128> {
        get_stored_precision_mul(&e)
    }

    fn get_virtual_price(e: Env) -> u128 {
        let d = get_d_mem(&e, &get_balances(&e), get_amp(&e));
        get_virtual_price(&e, d, to_u128(&e, token_share::total_supply(&e)))
    }

    fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64 {
        Governance::new(&e).fee_for(&caller, &from_hint)
    }

    fn get_dy(
        e: Env,
        caller: Address,
        i: u32,
        j: u32,
        dx: i128,
        from_hint: Option<Address>,
    ) -> i128 {
        if dx <= 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        assert_pair_indexes(&e, i, j);
        let fee = Governance::new(&e).fee_for(&caller, &from_hint);
        let (dy, _) = quote_dy(&e, i, j, dx as u128, fee);
        to_i128(&e, dy)
    }

    fn calc_lp_token_amount(e: Env, amounts: Vec<i128>, deposit: bool) -> i128 {
        let amounts = parse_amounts(&e, &amounts);
        let (_, lp_amount) = if deposit {
            calc_deposit(&e, &amounts)
        } else {
            calc_imbalanced_withdraw(&e, &amounts)
        };
        to_i128(&e, lp_amount)
    }

    fn calc_withdraw_coins(e: Env, amount: i128) -> Vec<i128> {
        if amount < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        to_i128_vec(&e, &calc_withdraw_coins(&e, amount as u128))
    }

    fn calc_withdraw_one_coin(e: Env, amount: i128, i: u32) -> i128 {
        if amount < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        assert_coin_index(&e, i);
        let (dy, _) = calc_withdraw_one_coin(&e, amount as u128, i);
        to_i128(&e, dy)
    }

    fn add_liquidity(e: Env, user: Address, amounts: Vec<i128>, min_mint: i128) -> i128 {
        user.require_auth();
        assert_not_killed(&e);
        if min_mint < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        let amounts = parse_amounts(&e, &amounts);

        let (balances, mint) = calc_deposit(&e, &amounts);
        if mint < min_mint as u128 {
            panic_with_error!(&e, LiquidityPoolValidationError::Slippage);
        }

        for (token, amount) in get_tokens(&e).iter().zip(amounts.iter()) {
            transfer_in(&e, &token, &user, amount);
        }
        set_balances(&e, &balances);
        let mint = to_i128(&e, mint);
        token_share::mint(&e, &user, mint);
        mint
    }

    fn exchange(
        e: Env,
        user: Address,
        i: u32,
        j: u32,
        dx: i128,
        min_dy: i128,
        from_hint: Option<Address>,
    ) -> i128 {
        user.require_auth();
        if dx <= 0 || min_dy < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        assert_pair_indexes(&e, i, j);
        assert_not_killed(&e);

        let dx = dx as u128;
        let fee = Governance::new(&e).fee_for(&user, &from_hint);
        let (dy, dy_fee) = quote_dy(&e, i, j, dx, fee);
        if dy < min_dy as u128 {
            panic_with_error!(&e, LiquidityPoolValidationError::Slippage);
        }

        // the admin part of the fee stays in the pool outside the tracked reserves
        let admin_part = fee_of(&e, dy_fee, governance::get_admin_fee(&e) as u128);
        let mut balances = get_balances(&e);
        balances.set(i, balances.get_unchecked(i) + dx);
        balances.set(j, balances.get_unchecked(j) - dy - admin_part);
        set_balances(&e, &balances);

        let tokens = get_tokens(&e);
        transfer_in(&e, &tokens.get_unchecked(i), &user, dx);
        transfer_out(&e, &tokens.get_unchecked(j), &user, dy);
        to_i128(&e, dy)
    }

    fn remove_liquidity(e: Env, user: Address, amount: i128, min_amounts: Vec<i128>) -> Vec<i128> {
        user.require_auth();
        if amount < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        let min_amounts = parse_amounts(&e, &min_amounts);

        let amounts = calc_withdraw_coins(&e, amount as u128);
        let mut balances = get_balances(&e);
        for i in 0..amounts.len() {
            let out = amounts.get_unchecked(i);
            if out < min_amounts.get_unchecked(i) {
                panic_with_error!(
                    &e,
                    LiquidityPoolValidationError::WithdrawalResultedInFewerCoinsThanExpected
                );
            }
            balances.set(i, balances.get_unchecked(i) - out);
        }

        token_share::burn(&e, &user, amount);
        set_balances(&e, &balances);
        for (token, out) in get_tokens(&e).iter().zip(amounts.iter()) {
            transfer_out(&e, &token, &user, out);
        }
        to_i128_vec(&e, &amounts)
    }

    fn remove_liquidity_imbalance(
        e: Env,
        user: Address,
        amounts: Vec<i128>,
        max_burn: i128,
    ) -> i128 {
        user.require_auth();
        if max_burn < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        let amounts = parse_amounts(&e, &amounts);
        assert_not_killed(&e);

        let (balances, burn) = calc_imbalanced_withdraw(&e, &amounts);
        if burn > max_burn as u128 {
            panic_with_error!(&e, LiquidityPoolValidationError::Slippage);
        }

        let burn = to_i128(&e, burn);
        token_share::burn(&e, &user, burn);
        set_balances(&e, &balances);
        for (token, out) in get_tokens(&e).iter().zip(amounts.iter()) {
            transfer_out(&e, &token, &user, out);
        }
        burn
    }

    fn remove_liquidity_one_coin(
        e: Env,
        user: Address,
        amount: i128,
        i: u32,
        min_out: i128,
    ) -> i128 {
        user.require_auth();
        if amount < 0 || min_out < 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInput);
        }
        assert_coin_index(&e, i);
        assert_not_killed(&e);

        let (dy, dy_fee) = calc_withdraw_one_coin(&e, amount as u128, i);
        if dy < min_out as u128 {
            panic_with_error!(&e, LiquidityPoolValidationError::Slippage);
        }

        let admin_part = fee_of(&e, dy_fee, governance::get_admin_fee(&e) as u128);
        let mut balances = get_balances(&e);
        balances.set(i, balances.get_unchecked(i) - dy - admin_part);

        token_share::burn(&e, &user, amount);
        set_balances(&e, &balances);
        transfer_out(&e, &get_tokens(&e).get_unchecked(i), &user, dy);
        to_i128(&e, dy)
    }
}

// Sells every non-pay admin balance for the pay token on the tracked reserves,
// without fee. Sold coins join the reserves and the bought pay token leaves them,
// so every reserve stays covered by the pool's token balance.
fn convert_admin_balances(
    e: &Env,
    tokens: &Vec<Address>,
    pay_token: &Address,
    amounts: &Vec<u128>,
) -> Vec<u128> {
    let k = match tokens.first_index_of(pay_token) {
        Some(k) => k,
        None => panic_with_error!(e, LiquidityPoolValidationError::NotExistPayToken),
    };
    let precision_mul = get_stored_precision_mul(e);
    let amp = get_amp(e);
    let mut balances = get_balances(e);
    let mut paid = amounts.get_unchecked(k);

    for i in 0..tokens.len() {
        let amount = amounts.get_unchecked(i);
        if i == k || amount == 0 {
            continue;
        }
        if let Some((dy, _)) = get_dy(e, i, k, amount, &balances, &precision_mul, amp, 0) {
            balances.set(i, balances.get_unchecked(i) + amount);
            balances.set(k, balances.get_unchecked(k) - dy);
            paid += dy;
        }
    }
    set_balances(e, &balances);

    let mut result = Vec::new(e);
    for i in 0..tokens.len() {
        result.push_back(if i == k { paid } else { 0 });
    }
    result
}

#[contractimpl]
impl AdminInterfaceTrait for LiquidityPool {
    fn ramp_a(e: Env, admin: Address, future_a: u128, future_time: u64) {
        Governance::new(&e).assert_owner(&admin);
        let now = e.ledger().timestamp();
        if future_time < now.saturating_add(MIN_RAMP_TIME) {
            panic_with_error!(&e, GovernanceError::InsufficientTime);
        }
        if future_a == 0 || future_a >= MAX_A {
            panic_with_error!(&e, LiquidityPoolError::RampABig);
        }

        let initial = get_amp(&e);
        let future = future_a * A_PRECISION;
        if (future < initial && future * MAX_A_CHANGE < initial)
            || (future > initial && future > initial * MAX_A_CHANGE)
        {
            panic_with_error!(&e, LiquidityPoolError::RampABig);
        }

        set_initial_a(&e, &initial);
        set_initial_a_time(&e, &now);
        set_future_a(&e, &future);
        set_future_a_time(&e, &future_time);
        log!(&e, "ramp A", initial, future, future_time);
    }

    fn stop_ramp_a(e: Env, admin: Address) {
        Governance::new(&e).assert_owner(&admin);
        let current = get_amp(&e);
        let now = e.ledger().timestamp();
        set_initial_a(&e, &current);
        set_future_a(&e, &current);
        set_initial_a_time(&e, &now);
        set_future_a_time(&e, &now);
        log!(&e, "ramp A stopped", current);
    }

    fn kill_me(e: Env, admin: Address) {
        Governance::new(&e).assert_owner(&admin);
        set_is_killed(&e, &true);
    }

    fn unkill_me(e: Env, admin: Address) {
        Governance::new(&e).assert_owner(&admin);
        set_is_killed(&e, &false);
    }

    fn is_killed(e: Env) -> bool {
        get_is_killed(&e)
    }

    fn admin_balances(e: Env, i: u32) -> i128 {
        assert_coin_index(&e, i);
        to_i128(&e, get_admin_balances(&e).get_unchecked(i))
    }

    fn withdraw_admin_fees(e: Env, admin: Address) -> (Vec<i128>, Vec<i128>) {
        Governance::new(&e).assert_owner(&admin);

        let tokens = get_tokens(&e);
        let amounts = match governance::get_pay_token(&e) {
            Some(pay_token) => {
                convert_admin_balances(&e, &tokens, &pay_token, &get_admin_balances(&e))
            }
            None => get_admin_balances(&e),
        };

        let owner = governance::get_owner(&e);
        let winner = governance::get_winner(&e);
        let winner_fee = governance::get_winner_fee(&e) as u128;
        let mut owner_amounts = Vec::new(&e);
        let mut winner_amounts = Vec::new(&e);
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            let winner_amount = amount.fixed_mul_floor(&e, &winner_fee, &(MAX_WINNER_FEE as u128));
            let owner_amount = amount - winner_amount;
            transfer_out(&e, &token, &owner, owner_amount);
            transfer_out(&e, &token, &winner, winner_amount);
            owner_amounts.push_back(to_i128(&e, owner_amount));
            winner_amounts.push_back(to_i128(&e, winner_amount));
        }

        log!(&e, "admin fees withdrawn", owner_amounts, winner_amounts);
        (owner_amounts, winner_amounts)
    }

    fn donate_admin_fees(e: Env, admin: Address) {
        Governance::new(&e).assert_owner(&admin);
        let mut balances = get_balances(&e);
        for (i, admin_balance) in get_admin_balances(&e).iter().enumerate() {
            let i = i as u32;
            balances.set(i, balances.get_unchecked(i) + admin_balance);
        }
        set_balances(&e, &balances);
    }
}

#[contractimpl]
impl GovernanceInterface for LiquidityPool {
    fn commit_new_fee(e: Env, admin: Address, fee: u64, admin_fee: u64, winner_fee: u64, delay: u64) {
        let pool_is_empty = token_share::total_supply(&e) == 0;
        Governance::new(&e).commit_new_fee(&admin, fee, admin_fee, winner_fee, delay, pool_is_empty);
    }

    fn apply_new_fee(e: Env, admin: Address) {
        Governance::new(&e).apply_new_fee(&admin);
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

    fn apply_transfer_owner_winner(e: Env, admin: Address) {
        Governance::new(&e).apply_transfer_owner_winner(&admin);
    }

    fn revert_transfer_owner_winner(e: Env, admin: Address) {
        Governance::new(&e).revert_transfer_owner_winner(&admin);
    }

    fn set_pay_token(e: Env, admin: Address, pay_token: Option<Address>) {
        Governance::new(&e).set_pay_token(&admin, &get_tokens(&e), &pay_token);
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
