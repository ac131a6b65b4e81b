use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_option_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Owner,
    Winner,
    FutureOwner,
    FutureWinner,
    TransferOwnerWinnerDeadline,

    Fee,
    AdminFee,
    WinnerFee,
    FutureFee,
    FutureAdminFee,
    FutureWinnerFee,
    AdminActionsDeadline,

    Whitelist,
    GroupId,
    FutureWhitelist,
    FutureGroupId,
    WhitelistDeadline,

    PayToken,
}

generate_instance_storage_getter_and_setter!(owner, DataKey::Owner, Address);
generate_instance_storage_getter_and_setter!(winner, DataKey::Winner, Address);
generate_instance_storage_option_getter_and_setter!(future_owner, DataKey::FutureOwner, Address);
generate_instance_storage_option_getter_and_setter!(future_winner, DataKey::FutureWinner, Address);
generate_instance_storage_getter_and_setter_with_default!(
    transfer_owner_winner_deadline,
    DataKey::TransferOwnerWinnerDeadline,
    u64,
    0
);

generate_instance_storage_getter_and_setter!(fee, DataKey::Fee, u64);
generate_instance_storage_getter_and_setter!(admin_fee, DataKey::AdminFee, u64);
generate_instance_storage_getter_and_setter!(winner_fee, DataKey::WinnerFee, u64);
generate_instance_storage_getter_and_setter_with_default!(future_fee, DataKey::FutureFee, u64, 0);
generate_instance_storage_getter_and_setter_with_default!(
    future_admin_fee,
    DataKey::FutureAdminFee,
    u64,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    future_winner_fee,
    DataKey::FutureWinnerFee,
    u64,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    admin_actions_deadline,
    DataKey::AdminActionsDeadline,
    u64,
    0
);

generate_instance_storage_option_getter_and_setter!(whitelist, DataKey::Whitelist, Address);
generate_instance_storage_getter_and_setter_with_default!(group_id, DataKey::GroupId, u32, 0);
generate_instance_storage_option_getter_and_setter!(
    future_whitelist,
    DataKey::FutureWhitelist,
    Address
);
generate_instance_storage_getter_and_setter_with_default!(
    future_group_id,
    DataKey::FutureGroupId,
    u32,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    whitelist_deadline,
    DataKey::WhitelistDeadline,
    u64,
    0
);

generate_instance_storage_option_getter_and_setter!(pay_token, DataKey::PayToken, Address);
