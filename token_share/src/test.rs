#![cfg(test)]
extern crate std;

use crate::{
    allowance, approve, balance_of, burn, decrease_allowance, get_name, get_symbol,
    increase_allowance, mint, mint_locked, move_reserved_liquidity, reserve_liquidity, set_name,
    set_symbol, total_supply, transfer, transfer_from, LpTokenInterface, DECIMALS,
    INFINITE_ALLOWANCE,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

#[contract]
struct LpHost;

#[contractimpl]
impl LpHost {
    pub fn __constructor(e: Env, name: String, symbol: String) {
        set_name(&e, &name);
        set_symbol(&e, &symbol);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        mint(&e, &to, amount);
    }

    pub fn mint_locked(e: Env, amount: i128) {
        mint_locked(&e, amount);
    }

    pub fn burn(e: Env, from: Address, amount: i128) {
        burn(&e, &from, amount);
    }

    pub fn reserve(e: Env, holder: Address, amount: i128) {
        reserve_liquidity(&e, &holder, amount);
    }

    pub fn move_reserved(e: Env, new_holder: Address) {
        move_reserved_liquidity(&e, &new_holder);
    }
}

#[contractimpl]
impl LpTokenInterface for LpHost {
    fn name(e: Env) -> String {
        get_name(&e)
    }

    fn symbol(e: Env) -> String {
        get_symbol(&e)
    }

    fn decimals(_e: Env) -> u32 {
        DECIMALS
    }

    fn total_supply(e: Env) -> i128 {
        total_supply(&e)
    }

    fn balance_of(e: Env, id: Address) -> i128 {
        balance_of(&e, &id)
    }

    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        approve(&e, &from, &spender, amount);
    }

    fn increase_allowance(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        increase_allowance(&e, &from, &spender, amount);
    }

    fn decrease_allowance(e: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        decrease_allowance(&e, &from, &spender, amount);
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        transfer(&e, &from, &to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        transfer_from(&e, &spender, &from, &to, amount);
    }
}

fn setup(e: &Env) -> LpHostClient<'_> {
    e.mock_all_auths();
    LpHostClient::new(
        e,
        &e.register(
            LpHost,
            (String::from_str(e, "Pool LP"), String::from_str(e, "PLP")),
        ),
    )
}

#[test]
fn test_metadata_and_mint() {
    let e = Env::default();
    let lp = setup(&e);
    let user = Address::generate(&e);

    assert_eq!(lp.name(), String::from_str(&e, "Pool LP"));
    assert_eq!(lp.symbol(), String::from_str(&e, "PLP"));
    assert_eq!(lp.decimals(), 18);

    lp.mint(&user, &1000);
    lp.mint_locked(&1000);
    assert_eq!(lp.balance_of(&user), 1000);
    assert_eq!(lp.total_supply(), 2000);

    lp.burn(&user, &400);
    assert_eq!(lp.balance_of(&user), 600);
    assert_eq!(lp.total_supply(), 1600);
}

#[test]
fn test_transfer() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);

    lp.mint(&user1, &1000);
    lp.transfer(&user1, &user2, &300);
    assert_eq!(lp.balance_of(&user1), 700);
    assert_eq!(lp.balance_of(&user2), 300);

    // zero and self transfers are allowed
    lp.transfer(&user1, &user2, &0);
    lp.transfer(&user1, &user1, &700);
    assert_eq!(lp.balance_of(&user1), 700);
}

#[test]
#[should_panic(expected = "Error(Contract, #2201)")]
fn test_transfer_negative() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    lp.mint(&user1, &1000);
    lp.transfer(&user1, &user2, &-1);
}

#[test]
#[should_panic(expected = "Error(Contract, #2205)")]
fn test_transfer_exceed_balance() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    lp.mint(&user1, &1000);
    lp.transfer(&user1, &user2, &1001);
}

#[test]
#[should_panic(expected = "Error(Contract, #2207)")]
fn test_burn_exceed_balance() {
    let e = Env::default();
    let lp = setup(&e);
    let user = Address::generate(&e);
    lp.mint(&user, &1000);
    lp.burn(&user, &1001);
}

#[test]
fn test_allowance() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let spender = Address::generate(&e);

    lp.mint(&user1, &1000);
    lp.approve(&user1, &spender, &500);
    // overwriting a non-zero allowance
    lp.approve(&user1, &spender, &400);
    assert_eq!(lp.allowance(&user1, &spender), 400);

    lp.increase_allowance(&user1, &spender, &100);
    lp.decrease_allowance(&user1, &spender, &50);
    assert_eq!(lp.allowance(&user1, &spender), 450);

    lp.transfer_from(&spender, &user1, &user2, &200);
    assert_eq!(lp.allowance(&user1, &spender), 250);
    assert_eq!(lp.balance_of(&user1), 800);
    assert_eq!(lp.balance_of(&user2), 200);

    assert!(lp
        .try_transfer_from(&spender, &user1, &user2, &251)
        .is_err());
    assert!(lp.try_approve(&user1, &spender, &-1).is_err());
    assert!(lp.try_increase_allowance(&user1, &spender, &-1).is_err());
    assert!(lp.try_decrease_allowance(&user1, &spender, &-1).is_err());
    assert!(lp.try_decrease_allowance(&user1, &spender, &251).is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2206)")]
fn test_transfer_from_exceed_allowance() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let spender = Address::generate(&e);
    lp.mint(&user1, &1000);
    lp.approve(&user1, &spender, &10);
    lp.transfer_from(&spender, &user1, &spender, &11);
}

#[test]
fn test_infinite_allowance() {
    let e = Env::default();
    let lp = setup(&e);
    let user1 = Address::generate(&e);
    let spender = Address::generate(&e);

    lp.mint(&user1, &1000);
    lp.approve(&user1, &spender, &INFINITE_ALLOWANCE);
    lp.transfer_from(&spender, &user1, &spender, &600);
    assert_eq!(lp.allowance(&user1, &spender), INFINITE_ALLOWANCE);

    // increasing saturates
    lp.increase_allowance(&user1, &spender, &1);
    assert_eq!(lp.allowance(&user1, &spender), INFINITE_ALLOWANCE);
}

#[test]
fn test_self_transfer_from_spends_allowance() {
    let e = Env::default();
    let lp = setup(&e);
    let user = Address::generate(&e);
    let spender = Address::generate(&e);

    lp.mint(&user, &1000);
    lp.approve(&user, &spender, &300);
    lp.transfer_from(&spender, &user, &user, &100);
    assert_eq!(lp.balance_of(&user), 1000);
    assert_eq!(lp.allowance(&user, &spender), 200);
}

#[test]
fn test_reserved_liquidity() {
    let e = Env::default();
    let lp = setup(&e);
    let owner = Address::generate(&e);
    let new_owner = Address::generate(&e);
    let user = Address::generate(&e);

    lp.mint(&owner, &1000);
    lp.reserve(&owner, &600);
    lp.transfer(&owner, &user, &400);
    assert!(lp.try_transfer(&owner, &user, &1).is_err());
    assert!(lp.try_burn(&owner, &1).is_err());

    lp.move_reserved(&new_owner);
    assert_eq!(lp.balance_of(&owner), 0);
    assert_eq!(lp.balance_of(&new_owner), 600);
    assert!(lp.try_transfer(&new_owner, &user, &1).is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2208)")]
fn test_reserved_liquidity_error() {
    let e = Env::default();
    let lp = setup(&e);
    let owner = Address::generate(&e);
    let user = Address::generate(&e);

    lp.mint(&owner, &1000);
    lp.reserve(&owner, &1000);
    lp.transfer(&owner, &user, &1);
}
