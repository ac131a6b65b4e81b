use soroban_sdk::{contractclient, Address, Env, Symbol, Vec, U256};

#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn get_pair(e: Env, token_a: Address, token_b: Address) -> Option<Address>;
}

// Calls answered by every pool kind
#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn ex_type(e: Env) -> Symbol;
    fn tokens(e: Env) -> Vec<Address>;
    fn reserves(e: Env) -> Vec<i128>;
    fn owner(e: Env) -> Address;
    fn admin_fee(e: Env) -> u64;
    fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64;
    fn total_supply(e: Env) -> i128;
    fn balance_of(e: Env, id: Address) -> i128;
    fn transfer(e: Env, from: Address, to: Address, amount: i128);
}

#[contractclient(name = "UniPoolClient")]
pub trait UniPoolInterface {
    fn mint(e: Env, to: Address) -> i128;
    fn burn(e: Env, to: Address) -> (i128, i128);
    fn swap(
        e: Env,
        user: Address,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        from_hint: Option<Address>,
    );
    fn k_last(e: Env) -> U256;
    fn minted_admin_balance(e: Env) -> i128;
    fn get_amount_out(
        e: Env,
        caller: Address,
        token_in: Address,
        amount_in: i128,
        from_hint: Option<Address>,
    ) -> i128;
    fn get_amount_in(
        e: Env,
        caller: Address,
        token_out: Address,
        amount_out: i128,
        from_hint: Option<Address>,
    ) -> i128;
    fn get_withdraw_amount(e: Env, liquidity: i128) -> (i128, i128);
}

#[contractclient(name = "StablePoolClient")]
pub trait StablePoolInterface {
    fn get_dy(
        e: Env,
        caller: Address,
        i: u32,
        j: u32,
        dx: i128,
        from_hint: Option<Address>,
    ) -> i128;
    fn exchange(
        e: Env,
        user: Address,
        i: u32,
        j: u32,
        dx: i128,
        min_dy: i128,
        from_hint: Option<Address>,
    ) -> i128;
}
