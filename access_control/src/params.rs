use crate::constants::{MAX_ADMIN_FEE, MAX_FEE, MAX_WINNER_FEE};
use crate::errors::GovernanceError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

// Configuration shared by both pool kinds and passed through the factory.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolParams {
    pub owner: Address,
    pub winner: Address,
    pub fee: u64,
    pub admin_fee: u64,
    pub winner_fee: u64,
    pub whitelist: Option<Address>,
    pub group_id: u32,
}

pub fn validate_fees(e: &Env, fee: u64, admin_fee: u64, winner_fee: u64) {
    if fee > MAX_FEE {
        panic_with_error!(e, GovernanceError::FutureFeeExceedMaxFee);
    }
    if admin_fee > MAX_ADMIN_FEE {
        panic_with_error!(e, GovernanceError::FutureAdminFeeExceedMaxAdminFee);
    }
    if winner_fee > MAX_WINNER_FEE {
        panic_with_error!(e, GovernanceError::FutureWinnerFeeExceedMaxWinnerFee);
    }
}
