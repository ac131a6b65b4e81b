use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    decrease_total_balance, increase_total_balance, read_balance, receive_balance, spend_balance,
};
use crate::errors::TokenError;
use crate::storage::{get_admin, get_total_balance, set_admin as write_admin};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;
use utils::bump::bump_instance;

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
}

// SEP-41 fungible token with configurable decimals, used as a pool asset.
#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    pub fn __constructor(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > u8::MAX.into() {
            panic_with_error!(&e, TokenError::DecimalTooLarge);
        }
        write_admin(&e, &admin);
        TokenUtils::new(&e).metadata().set_metadata(&TokenMetadata {
            decimal,
            name,
            symbol,
        });
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&e, amount);
        let admin = get_admin(&e);
        admin.require_auth();

        receive_balance(&e, to.clone(), amount);
        increase_total_balance(&e, amount);
        TokenUtils::new(&e).events().mint(admin, to, amount);
    }

    pub fn set_admin(e: Env, new_admin: Address) {
        let admin = get_admin(&e);
        admin.require_auth();

        write_admin(&e, &new_admin);
        TokenUtils::new(&e).events().set_admin(admin, new_admin);
    }

    pub fn admin(e: Env) -> Address {
        get_admin(&e)
    }

    pub fn total_balance(e: Env) -> i128 {
        get_total_balance(&e)
    }
}

#[contractimpl]
impl token::Interface for Token {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount)
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        decrease_total_balance(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, from.clone(), amount);
        decrease_total_balance(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount)
    }

    fn decimals(e: Env) -> u32 {
        TokenUtils::new(&e).metadata().get_metadata().decimal
    }

    fn name(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().name
    }

    fn symbol(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().symbol
    }
}
