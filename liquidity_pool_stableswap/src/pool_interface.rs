use soroban_sdk::{Address, Env, Symbol, Vec};

pub trait StableSwapTrait {
    // Pool kind marker, `stable`
    fn ex_type(e: Env) -> Symbol;

    // Factory which deployed the pool, None for standalone pools
    fn factory(e: Env) -> Option<Address>;

    fn tokens(e: Env) -> Vec<Address>;
    fn n_tokens(e: Env) -> u32;

    // Tracked reserves, excluding admin fees held by the pool
    fn reserves(e: Env) -> Vec<i128>;

    // The amplification coefficient for the pool.
    fn a(e: Env) -> u128;
    fn a_precise(e: Env) -> u128;
    fn initial_a(e: Env) -> u128;
    fn future_a(e: Env) -> u128;
    fn initial_a_time(e: Env) -> u64;
    fn future_a_time(e: Env) -> u64;

    // Per-token multipliers to 18 decimals, times PRECISION
    fn rates(e: Env) -> Vec<u128>;
    fn precision_mul(e: Env) -> Vec<u128>;

    // LP value in D units, 18 decimals
    fn get_virtual_price(e: Env) -> u128;

    fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64;

    // Get the amount of coin j `caller` would receive for swapping dx of coin i.
    fn get_dy(
        e: Env,
        caller: Address,
        i: u32,
        j: u32,
        dx: i128,
        from_hint: Option<Address>,
    ) -> i128;

    // LP minted for a deposit or burned for an imbalanced withdrawal of `amounts`,
    // imbalance fee included.
    fn calc_lp_token_amount(e: Env, amounts: Vec<i128>, deposit: bool) -> i128;

    // Coins received for burning `amount` LP in a balanced withdrawal
    fn calc_withdraw_coins(e: Env, amount: i128) -> Vec<i128>;

    // Calculate the amount received when withdrawing a single coin.
    // amount: Amount of LP tokens to burn in the withdrawal
    // i: Index value of the coin to withdraw
    fn calc_withdraw_one_coin(e: Env, amount: i128, i: u32) -> i128;

    // Deposit coins into the pool.
    // amounts: List of amounts of coins to deposit
    // min_mint: Minimum LP to receive
    // Returns the amount of LP minted.
    fn add_liquidity(e: Env, user: Address, amounts: Vec<i128>, min_mint: i128) -> i128;

    // Perform an exchange between two coins.
    // i: Index value for the coin to send
    // j: Index value of the coin to receive
    // dx: Amount of i being exchanged
    // min_dy: Minimum amount of j to receive
    // Returns the actual amount of coin j received.
    fn exchange(
        e: Env,
        user: Address,
        i: u32,
        j: u32,
        dx: i128,
        min_dy: i128,
        from_hint: Option<Address>,
    ) -> i128;

    // Withdraw coins from the pool in proportion to the reserves. Allowed while killed.
    fn remove_liquidity(e: Env, user: Address, amount: i128, min_amounts: Vec<i128>) -> Vec<i128>;

    // Withdraw coins from the pool in an imbalanced amount.
    // Returns actual amount of the LP tokens burned in the withdrawal.
    fn remove_liquidity_imbalance(
        e: Env,
        user: Address,
        amounts: Vec<i128>,
        max_burn: i128,
    ) -> i128;

    // Withdraw a single coin from the pool.
    // Returns the amount of coin i received.
    fn remove_liquidity_one_coin(e: Env, user: Address, amount: i128, i: u32, min_out: i128)
        -> i128;
}

pub trait AdminInterfaceTrait {
    // Start ramping A towards `future_a` (without A_PRECISION), reached at `future_time`
    fn ramp_a(e: Env, admin: Address, future_a: u128, future_time: u64);
    fn stop_ramp_a(e: Env, admin: Address);

    fn kill_me(e: Env, admin: Address);
    fn unkill_me(e: Env, admin: Address);
    fn is_killed(e: Env) -> bool;

    fn admin_balances(e: Env, i: u32) -> i128;

    // Pay admin balances out to owner and winner.
    //
    // # Returns
    //
    // (owner amounts, winner amounts), in pool token order
    fn withdraw_admin_fees(e: Env, admin: Address) -> (Vec<i128>, Vec<i128>);

    // Hand admin balances over to the liquidity providers
    fn donate_admin_fees(e: Env, admin: Address);
}
