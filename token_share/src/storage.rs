use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default,
    generate_instance_storage_option_getter_and_setter, generate_instance_storage_setter,
};

// Stable numeric tags, balances and allowances are keyed by (tag, addresses...).
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LpTag {
    Name = 1,
    Symbol = 2,
    TotalSupply = 3,
    Balance = 4,
    Allowance = 5,
    ReservedLiquidity = 6,
}

generate_instance_storage_getter_and_setter!(name, LpTag::Name, String);
generate_instance_storage_getter_and_setter!(symbol, LpTag::Symbol, String);
generate_instance_storage_getter_and_setter_with_default!(
    total_supply,
    LpTag::TotalSupply,
    i128,
    0
);
// holder whose balance may not drop below the amount
generate_instance_storage_option_getter_and_setter!(
    reserved_liquidity,
    LpTag::ReservedLiquidity,
    (Address, i128)
);

pub fn get_balance(e: &Env, addr: &Address) -> i128 {
    let key = (LpTag::Balance, addr.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(e: &Env, addr: &Address, amount: i128) {
    let key = (LpTag::Balance, addr.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn get_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = (LpTag::Allowance, from.clone(), spender.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(e, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = (LpTag::Allowance, from.clone(), spender.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}
