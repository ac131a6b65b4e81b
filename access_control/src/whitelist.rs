use crate::access::{assert_deadline_reached, deadline_after, Governance};
use crate::errors::GovernanceError;
use crate::storage::{
    get_fee, get_future_group_id, get_future_whitelist, get_group_id, get_whitelist,
    get_whitelist_deadline, set_future_group_id, set_future_whitelist, set_group_id,
    set_whitelist, set_whitelist_deadline,
};
use soroban_sdk::{contractclient, panic_with_error, Address, Bytes, Env};

// Registry of preferential fees, namespaced by group.
#[contractclient(name = "FeeWhitelistClient")]
pub trait FeeWhitelistInterface {
    // Empty bytes when `addr` has no override, otherwise the fee as 8 bytes little-endian.
    fn fee_whitelist(e: Env, group_id: u32, addr: Address) -> Bytes;
}

pub trait WhitelistGovernanceTrait {
    fn commit_new_whitelist(
        &self,
        admin: &Address,
        whitelist: &Option<Address>,
        group_id: u32,
        delay: u64,
    );
    fn apply_new_whitelist(&self, admin: &Address);
    fn revert_new_whitelist(&self, admin: &Address);
    fn fee_whitelist(&self, addr: &Address) -> Bytes;
    fn fee_for(&self, caller: &Address, from_hint: &Option<Address>) -> u64;
}

impl WhitelistGovernanceTrait for Governance {
    fn commit_new_whitelist(
        &self,
        admin: &Address,
        whitelist: &Option<Address>,
        group_id: u32,
        delay: u64,
    ) {
        self.assert_owner(admin);
        if get_whitelist_deadline(&self.0) != 0 {
            panic_with_error!(&self.0, GovernanceError::AdminActionsDeadline);
        }

        let deadline = deadline_after(&self.0, delay);
        set_whitelist_deadline(&self.0, &deadline);
        set_future_whitelist(&self.0, whitelist);
        set_future_group_id(&self.0, &group_id);
    }

    fn apply_new_whitelist(&self, admin: &Address) {
        self.assert_owner(admin);
        assert_deadline_reached(
            &self.0,
            get_whitelist_deadline(&self.0),
            GovernanceError::NoActiveAction,
        );

        set_whitelist(&self.0, &get_future_whitelist(&self.0));
        set_group_id(&self.0, &get_future_group_id(&self.0));
        clear_pending_whitelist(&self.0);
    }

    fn revert_new_whitelist(&self, admin: &Address) {
        self.assert_owner(admin);
        clear_pending_whitelist(&self.0);
    }

    fn fee_whitelist(&self, addr: &Address) -> Bytes {
        match get_whitelist(&self.0) {
            Some(whitelist) => FeeWhitelistClient::new(&self.0, &whitelist)
                .fee_whitelist(&get_group_id(&self.0), addr),
            None => Bytes::new(&self.0),
        }
    }

    // Whitelisted caller wins over the hint, the pool fee applies when neither is listed.
    fn fee_for(&self, caller: &Address, from_hint: &Option<Address>) -> u64 {
        if let Some(fee) = decode_fee(&self.fee_whitelist(caller)) {
            return fee;
        }
        if let Some(hint) = from_hint {
            if let Some(fee) = decode_fee(&self.fee_whitelist(hint)) {
                return fee;
            }
        }
        get_fee(&self.0)
    }
}

fn clear_pending_whitelist(e: &Env) {
    set_whitelist_deadline(e, &0);
    set_future_whitelist(e, &None);
    set_future_group_id(e, &0);
}

// Only an 8 byte payload is an override.
pub fn decode_fee(raw: &Bytes) -> Option<u64> {
    if raw.len() != 8 {
        return None;
    }
    let mut buf = [0u8; 8];
    raw.copy_into_slice(&mut buf);
    Some(u64::from_le_bytes(buf))
}

pub fn encode_fee(e: &Env, fee: u64) -> Bytes {
    Bytes::from_array(e, &fee.to_le_bytes())
}
