use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{Address, Env};
use utils::convert::{to_i128, to_u128};

pub fn get_balance(e: &Env, token: &Address) -> u128 {
    to_u128(e, SorobanTokenClient::new(e, token).balance(&e.current_contract_address()))
}

pub fn transfer_in(e: &Env, token: &Address, from: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    SorobanTokenClient::new(e, token).transfer(
        from,
        &e.current_contract_address(),
        &to_i128(e, amount),
    );
}

pub fn transfer_out(e: &Env, token: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    SorobanTokenClient::new(e, token).transfer(
        &e.current_contract_address(),
        to,
        &to_i128(e, amount),
    );
}
