use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Owner,
    Fee(u32, Address),
}

generate_instance_storage_getter_and_setter!(owner, DataKey::Owner, Address);

pub fn get_fee(e: &Env, group_id: u32, addr: &Address) -> Option<u64> {
    let key = DataKey::Fee(group_id, addr.clone());
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub fn set_fee(e: &Env, group_id: u32, addr: &Address, fee: u64) {
    let key = DataKey::Fee(group_id, addr.clone());
    e.storage().persistent().set(&key, &fee);
    bump_persistent(e, &key);
}

pub fn remove_fee(e: &Env, group_id: u32, addr: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Fee(group_id, addr.clone()));
}
