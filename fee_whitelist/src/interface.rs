use soroban_sdk::{Address, Env};

pub trait AdminInterface {
    fn owner(e: Env) -> Address;

    // Hand the registry over to `new_owner`
    fn set_owner(e: Env, owner: Address, new_owner: Address);

    // Register a preferential fee for `addr` within `group_id`
    //
    // # Arguments
    //
    // * `owner` - registry owner
    // * `fee` - numerator over 10^10, capped by the pool maximum fee
    fn set_fee(e: Env, owner: Address, group_id: u32, addr: Address, fee: u64);

    fn remove_fee(e: Env, owner: Address, group_id: u32, addr: Address);
}
