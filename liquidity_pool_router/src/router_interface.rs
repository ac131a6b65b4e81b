use soroban_sdk::{Address, Env, Vec};

pub trait RouterInterface {
    fn factory(e: Env) -> Address;

    // Amounts along `path` for an exact input, first element is `amount_in`.
    // Fees are those `user` gets when routing through this contract.
    fn get_amounts_out(e: Env, user: Address, amount_in: i128, path: Vec<Address>) -> Vec<i128>;

    // Inputs along a path of uni pools for an exact output, last element is `amount_out`
    fn uni_get_amounts_in(e: Env, user: Address, amount_out: i128, path: Vec<Address>)
        -> Vec<i128>;

    // Swap an exact amount of path[0] for as much of the last path token as possible.
    //
    // # Arguments
    //
    // * `user` - pays the input and receives the output
    // * `min_out` - minimum final output
    //
    // # Returns
    //
    // Amounts along the path
    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: i128,
        min_out: i128,
        path: Vec<Address>,
    ) -> Vec<i128>;

    // Receive exactly `amount_out` of the last path token through uni pools,
    // spending at most `max_in` of path[0]
    fn uni_swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: i128,
        max_in: i128,
        path: Vec<Address>,
    ) -> Vec<i128>;
}

pub trait UniLiquidityInterface {
    // Deposit into the uni pool of (token_a, token_b) at its current price.
    //
    // # Returns
    //
    // (amount_a deposited, amount_b deposited, LP minted)
    fn uni_add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        a_desired: i128,
        b_desired: i128,
        a_min: i128,
        b_min: i128,
    ) -> (i128, i128, i128);

    // Deposit a single token: part of it is swapped so that the rest can be added evenly.
    // Returns LP minted.
    fn uni_add_liquidity_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_in: Address,
        amount_in: i128,
        min_lp: i128,
    ) -> i128;

    fn uni_remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        a_min: i128,
        b_min: i128,
    ) -> (i128, i128);

    // Withdraw into `token_out` only.
    //
    // # Returns
    //
    // (amount of token_out received, admin LP minted to the pool owner by the burn)
    fn uni_remove_liquidity_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_out: Address,
        liquidity: i128,
        min_out: i128,
    ) -> (i128, i128);

    fn uni_get_lp_token_amount(
        e: Env,
        token_a: Address,
        token_b: Address,
        a_desired: i128,
        b_desired: i128,
    ) -> (i128, i128, i128);

    fn uni_get_lp_token_amount_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_in: Address,
        amount_in: i128,
    ) -> i128;

    fn uni_get_withdraw_amount(
        e: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
    ) -> (i128, i128);

    fn uni_get_withdraw_amount_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_out: Address,
        liquidity: i128,
    ) -> (i128, i128);
}
