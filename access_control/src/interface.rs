use soroban_sdk::{Address, Bytes, Env, String};

pub trait GovernanceInterface {
    // Schedule a new (fee, admin_fee, winner_fee) triple
    //
    // # Arguments
    //
    // * `admin` - pool owner
    // * `delay` - seconds until the change may be applied
    fn commit_new_fee(e: Env, admin: Address, fee: u64, admin_fee: u64, winner_fee: u64, delay: u64);

    // Apply the committed fees once the deadline passed
    fn apply_new_fee(e: Env, admin: Address);

    // Drop the committed fees
    fn revert_new_fee(e: Env, admin: Address);

    fn commit_new_whitelist(
        e: Env,
        admin: Address,
        whitelist: Option<Address>,
        group_id: u32,
        delay: u64,
    );
    fn apply_new_whitelist(e: Env, admin: Address);
    fn revert_new_whitelist(e: Env, admin: Address);

    fn commit_transfer_owner_winner(
        e: Env,
        admin: Address,
        new_owner: Address,
        new_winner: Address,
        delay: u64,
    );
    fn apply_transfer_owner_winner(e: Env, admin: Address);
    fn revert_transfer_owner_winner(e: Env, admin: Address);

    // Single token admin fees are paid out in, None pays every token as collected
    fn set_pay_token(e: Env, admin: Address, pay_token: Option<Address>);
    fn set_name(e: Env, admin: Address, name: String);
    fn set_symbol(e: Env, admin: Address, symbol: String);

    fn fee(e: Env) -> u64;
    fn admin_fee(e: Env) -> u64;
    fn winner_fee(e: Env) -> u64;
    fn future_fee(e: Env) -> u64;
    fn future_admin_fee(e: Env) -> u64;
    fn future_winner_fee(e: Env) -> u64;
    fn admin_actions_deadline(e: Env) -> u64;

    fn owner(e: Env) -> Address;
    fn winner(e: Env) -> Address;
    fn future_owner(e: Env) -> Option<Address>;
    fn future_winner(e: Env) -> Option<Address>;
    fn transfer_owner_winner_deadline(e: Env) -> u64;

    fn whitelist(e: Env) -> Option<Address>;
    fn group_id(e: Env) -> u32;
    fn future_whitelist(e: Env) -> Option<Address>;
    fn future_group_id(e: Env) -> u32;
    fn whitelist_deadline(e: Env) -> u64;

    // Raw override registered for `addr` in the bound whitelist group
    fn fee_whitelist(e: Env, addr: Address) -> Bytes;

    // Fee charged to `addr` when it swaps directly
    fn fee_address(e: Env, addr: Address) -> u64;

    fn pay_token(e: Env) -> Option<Address>;
}
