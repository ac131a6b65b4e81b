use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, U256};
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
    Token0,
    Token1,
    Reserve0,
    Reserve1,
    BlockTimestampLast,
    Price0CumulativeLast,
    Price1CumulativeLast,
    KLast,
    MintedAdminBalance,
}

generate_instance_storage_option_getter_and_setter!(factory, DataKey::Factory, Address);
generate_instance_storage_getter_and_setter!(token0, DataKey::Token0, Address);
generate_instance_storage_getter_and_setter!(token1, DataKey::Token1, Address);
generate_instance_storage_getter_and_setter_with_default!(reserve0, DataKey::Reserve0, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(reserve1, DataKey::Reserve1, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(
    block_timestamp_last,
    DataKey::BlockTimestampLast,
    u64,
    0
);
generate_instance_storage_getter_and_setter!(
    price0_cumulative_last,
    DataKey::Price0CumulativeLast,
    U256
);
generate_instance_storage_getter_and_setter!(
    price1_cumulative_last,
    DataKey::Price1CumulativeLast,
    U256
);
// reserve0 * reserve1 right after the latest liquidity event, zero while admin fee is off
generate_instance_storage_getter_and_setter!(k_last, DataKey::KLast, U256);
generate_instance_storage_getter_and_setter_with_default!(
    minted_admin_balance,
    DataKey::MintedAdminBalance,
    i128,
    0
);
