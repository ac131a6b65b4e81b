use soroban_sdk::{Address, Env, String};

// ERC-20 style surface of the LP token embedded into every pool.
pub trait LpTokenInterface {
    fn name(e: Env) -> String;
    fn symbol(e: Env) -> String;
    fn decimals(e: Env) -> u32;
    fn total_supply(e: Env) -> i128;
    fn balance_of(e: Env, id: Address) -> i128;
    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    // Set the allowance of `spender` over `from` LP, overwriting the previous value
    fn approve(e: Env, from: Address, spender: Address, amount: i128);
    fn increase_allowance(e: Env, from: Address, spender: Address, amount: i128);
    fn decrease_allowance(e: Env, from: Address, spender: Address, amount: i128);

    fn transfer(e: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);
}
