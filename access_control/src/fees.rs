use crate::access::{assert_deadline_reached, deadline_after, Governance};
use crate::constants::MIN_RAMP_TIME;
use crate::errors::GovernanceError;
use crate::params::validate_fees;
use crate::storage::{
    get_admin_actions_deadline, get_future_admin_fee, get_future_fee, get_future_winner_fee,
    set_admin_actions_deadline, set_admin_fee, set_fee, set_future_admin_fee, set_future_fee,
    set_future_winner_fee, set_winner_fee,
};
use soroban_sdk::{panic_with_error, Address};

pub trait FeeGovernanceTrait {
    fn commit_new_fee(
        &self,
        admin: &Address,
        fee: u64,
        admin_fee: u64,
        winner_fee: u64,
        delay: u64,
        pool_is_empty: bool,
    );
    fn apply_new_fee(&self, admin: &Address);
    fn revert_new_fee(&self, admin: &Address);
}

impl FeeGovernanceTrait for Governance {
    // delay is only bounded below by MIN_RAMP_TIME once the pool holds liquidity
    fn commit_new_fee(
        &self,
        admin: &Address,
        fee: u64,
        admin_fee: u64,
        winner_fee: u64,
        delay: u64,
        pool_is_empty: bool,
    ) {
        self.assert_owner(admin);
        if get_admin_actions_deadline(&self.0) != 0 {
            panic_with_error!(&self.0, GovernanceError::AdminActionsDeadline);
        }
        if !pool_is_empty && delay < MIN_RAMP_TIME {
            panic_with_error!(&self.0, GovernanceError::InsufficientTime);
        }
        validate_fees(&self.0, fee, admin_fee, winner_fee);

        let deadline = deadline_after(&self.0, delay);
        set_admin_actions_deadline(&self.0, &deadline);
        set_future_fee(&self.0, &fee);
        set_future_admin_fee(&self.0, &admin_fee);
        set_future_winner_fee(&self.0, &winner_fee);
    }

    fn apply_new_fee(&self, admin: &Address) {
        self.assert_owner(admin);
        assert_deadline_reached(
            &self.0,
            get_admin_actions_deadline(&self.0),
            GovernanceError::NoActiveAction,
        );

        set_fee(&self.0, &get_future_fee(&self.0));
        set_admin_fee(&self.0, &get_future_admin_fee(&self.0));
        set_winner_fee(&self.0, &get_future_winner_fee(&self.0));
        clear_pending_fee(self);
    }

    fn revert_new_fee(&self, admin: &Address) {
        self.assert_owner(admin);
        clear_pending_fee(self);
    }
}

fn clear_pending_fee(governance: &Governance) {
    set_admin_actions_deadline(&governance.0, &0);
    set_future_fee(&governance.0, &0);
    set_future_admin_fee(&governance.0, &0);
    set_future_winner_fee(&governance.0, &0);
}
