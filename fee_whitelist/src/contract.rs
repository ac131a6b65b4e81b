use crate::errors::WhitelistError;
use crate::interface::AdminInterface;
use crate::storage;
use access_control::constants::MAX_FEE;
use access_control::whitelist::{encode_fee, FeeWhitelistInterface};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Bytes, Env};

#[contract]
pub struct FeeWhitelist;

fn require_owner(e: &Env, owner: &Address) {
    owner.require_auth();
    if owner != &storage::get_owner(e) {
        panic_with_error!(e, WhitelistError::Forbidden);
    }
}

#[contractimpl]
impl FeeWhitelist {
    pub fn __constructor(e: Env, owner: Address) {
        storage::set_owner(&e, &owner);
    }
}

#[contractimpl]
impl AdminInterface for FeeWhitelist {
    fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn set_owner(e: Env, owner: Address, new_owner: Address) {
        require_owner(&e, &owner);
        storage::set_owner(&e, &new_owner);
    }

    fn set_fee(e: Env, owner: Address, group_id: u32, addr: Address, fee: u64) {
        require_owner(&e, &owner);
        if fee > MAX_FEE {
            panic_with_error!(&e, WhitelistError::FeeExceedMaxFee);
        }
        storage::set_fee(&e, group_id, &addr, fee);
    }

    fn remove_fee(e: Env, owner: Address, group_id: u32, addr: Address) {
        require_owner(&e, &owner);
        storage::remove_fee(&e, group_id, &addr);
    }
}

#[contractimpl]
impl FeeWhitelistInterface for FeeWhitelist {
    fn fee_whitelist(e: Env, group_id: u32, addr: Address) -> Bytes {
        match storage::get_fee(&e, group_id, &addr) {
            Some(fee) => encode_fee(&e, fee),
            None => Bytes::new(&e),
        }
    }
}
