use soroban_sdk::{Address, Env, Symbol, Vec, U256};

pub trait UniPoolTrait {
    // Pool kind marker, `uni`
    fn ex_type(e: Env) -> Symbol;

    // Factory which deployed the pool, None for standalone pools
    fn factory(e: Env) -> Option<Address>;

    fn tokens(e: Env) -> Vec<Address>;
    fn n_tokens(e: Env) -> u32;
    fn reserves(e: Env) -> Vec<i128>;
    fn block_timestamp_last(e: Env) -> u64;
    fn price0_cumulative_last(e: Env) -> U256;
    fn price1_cumulative_last(e: Env) -> U256;
    fn k_last(e: Env) -> U256;

    // Mint LP for the tokens transferred to the pool since the last update.
    //
    // # Arguments
    //
    // * `to` - LP recipient
    //
    // # Returns
    //
    // Amount of LP minted
    fn mint(e: Env, to: Address) -> i128;

    // Burn the LP held by the pool itself and send the underlying tokens to `to`.
    //
    // # Returns
    //
    // Token amounts sent, in pool token order
    fn burn(e: Env, to: Address) -> (i128, i128);

    // Send the requested outputs to `to` and check the constant product against
    // whatever was transferred in beforehand. Exactly one output must be positive.
    //
    // # Arguments
    //
    // * `user` - caller whose whitelist entry selects the fee
    // * `from_hint` - optional address on whose behalf `user` routes the swap
    fn swap(
        e: Env,
        user: Address,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        from_hint: Option<Address>,
    );

    // Send balances above the reserves to `to`
    fn skim(e: Env, to: Address);

    // Force reserves to match balances
    fn sync(e: Env);

    fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64;

    // Output of swapping `amount_in` of `token_in` for the other pool token
    fn get_amount_out(
        e: Env,
        caller: Address,
        token_in: Address,
        amount_in: i128,
        from_hint: Option<Address>,
    ) -> i128;

    // Input of the other pool token required to receive `amount_out` of `token_out`
    fn get_amount_in(
        e: Env,
        caller: Address,
        token_out: Address,
        amount_out: i128,
        from_hint: Option<Address>,
    ) -> i128;

    // LP minted for depositing (amount0, amount1) in the current state
    fn get_lp_token_amount(e: Env, amount0: i128, amount1: i128) -> i128;

    // Tokens received for burning `liquidity` LP in the current state
    fn get_withdraw_amount(e: Env, liquidity: i128) -> (i128, i128);
}

pub trait AdminFeeTrait {
    // Redeem the admin LP and pay it out to owner and winner.
    //
    // # Returns
    //
    // (LP redeemed, owner token0, owner token1, winner token0, winner token1)
    fn withdraw_admin_fees2(e: Env, admin: Address) -> (i128, i128, i128, i128, i128);

    // Admin LP already minted plus the part accrued since the last liquidity event
    fn admin_balance(e: Env) -> i128;

    fn minted_admin_balance(e: Env) -> i128;
}
