use crate::access::{assert_deadline_reached, deadline_after, Governance};
use crate::constants::MIN_RAMP_TIME;
use crate::errors::GovernanceError;
use crate::storage::{
    get_future_owner, get_future_winner, get_transfer_owner_winner_deadline, set_future_owner,
    set_future_winner, set_owner, set_transfer_owner_winner_deadline, set_winner,
};
use soroban_sdk::{panic_with_error, Address};
use utils::storage_errors::StorageError;

pub trait OwnerWinnerTransferTrait {
    fn commit_transfer_owner_winner(
        &self,
        admin: &Address,
        new_owner: &Address,
        new_winner: &Address,
        delay: u64,
    );
    // Returns (previous owner, new owner).
    fn apply_transfer_owner_winner(&self, admin: &Address) -> (Address, Address);
    fn revert_transfer_owner_winner(&self, admin: &Address);
}

impl OwnerWinnerTransferTrait for Governance {
    fn commit_transfer_owner_winner(
        &self,
        admin: &Address,
        new_owner: &Address,
        new_winner: &Address,
        delay: u64,
    ) {
        self.assert_owner(admin);
        if get_transfer_owner_winner_deadline(&self.0) != 0 {
            panic_with_error!(&self.0, GovernanceError::ActiveTransfer);
        }
        if delay < MIN_RAMP_TIME {
            panic_with_error!(&self.0, GovernanceError::InsufficientTime);
        }

        let deadline = deadline_after(&self.0, delay);
        set_transfer_owner_winner_deadline(&self.0, &deadline);
        set_future_owner(&self.0, &Some(new_owner.clone()));
        set_future_winner(&self.0, &Some(new_winner.clone()));
    }

    fn apply_transfer_owner_winner(&self, admin: &Address) -> (Address, Address) {
        self.assert_owner(admin);
        assert_deadline_reached(
            &self.0,
            get_transfer_owner_winner_deadline(&self.0),
            GovernanceError::NoActiveTransfer,
        );

        let (new_owner, new_winner) = match (get_future_owner(&self.0), get_future_winner(&self.0)) {
            (Some(owner), Some(winner)) => (owner, winner),
            _ => panic_with_error!(&self.0, StorageError::ValueMissing),
        };
        set_owner(&self.0, &new_owner);
        set_winner(&self.0, &new_winner);
        self.revert_pending_transfer();
        (admin.clone(), new_owner)
    }

    fn revert_transfer_owner_winner(&self, admin: &Address) {
        self.assert_owner(admin);
        self.revert_pending_transfer();
    }
}

impl Governance {
    fn revert_pending_transfer(&self) {
        set_transfer_owner_winner_deadline(&self.0, &0);
        set_future_owner(&self.0, &None);
        set_future_winner(&self.0, &None);
    }
}
