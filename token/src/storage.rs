use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
    TotalBalance,
}

generate_instance_storage_getter_and_setter!(admin, DataKey::Admin, Address);
generate_instance_storage_getter_and_setter_with_default!(
    total_balance,
    DataKey::TotalBalance,
    i128,
    0
);
