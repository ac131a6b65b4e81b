use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default,
    generate_instance_storage_option_getter_and_setter, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Factory,
    Tokens,
    // tracked reserves, token balances above them belong to the admin
    Balances,
    // scales raw token amounts to 18 decimals
    PrecisionMul,
    InitialA,
    InitialATime,
    FutureA,
    FutureATime,
    IsKilled,
}

generate_instance_storage_option_getter_and_setter!(factory, DataKey::Factory, Address);
generate_instance_storage_getter_and_setter!(tokens, DataKey::Tokens, Vec<Address>);
generate_instance_storage_getter_and_setter!(balances, DataKey::Balances, Vec<u128>);
generate_instance_storage_getter_and_setter!(precision_mul, DataKey::PrecisionMul, Vec<u128>);
generate_instance_storage_getter_and_setter!(initial_a, DataKey::InitialA, u128);
generate_instance_storage_getter_and_setter!(initial_a_time, DataKey::InitialATime, u64);
generate_instance_storage_getter_and_setter!(future_a, DataKey::FutureA, u128);
generate_instance_storage_getter_and_setter!(future_a_time, DataKey::FutureATime, u64);
generate_instance_storage_getter_and_setter_with_default!(
    is_killed,
    DataKey::IsKilled,
    bool,
    false
);
