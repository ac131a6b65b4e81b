use crate::errors::GovernanceError;
use crate::params::{validate_fees, PoolParams};
use crate::storage::{
    get_owner, set_admin_fee, set_fee, set_group_id, set_owner, set_pay_token, set_whitelist,
    set_winner, set_winner_fee,
};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Per-pool governance: owner/winner, fee triple, whitelist binding and pay token.
#[derive(Clone)]
pub struct Governance(pub(crate) Env);

impl Governance {
    pub fn new(env: &Env) -> Governance {
        Governance(env.clone())
    }

    pub fn init(&self, params: &PoolParams, tokens: &Vec<Address>, pay_token: &Option<Address>) {
        validate_fees(&self.0, params.fee, params.admin_fee, params.winner_fee);
        assert_pay_token(&self.0, tokens, pay_token);

        set_owner(&self.0, &params.owner);
        set_winner(&self.0, &params.winner);
        set_fee(&self.0, &params.fee);
        set_admin_fee(&self.0, &params.admin_fee);
        set_winner_fee(&self.0, &params.winner_fee);
        set_whitelist(&self.0, &params.whitelist);
        set_group_id(&self.0, &params.group_id);
        set_pay_token(&self.0, pay_token);
    }

    // Authenticates `admin` and checks it is the current owner.
    pub fn assert_owner(&self, admin: &Address) {
        admin.require_auth();
        if admin != &get_owner(&self.0) {
            panic_with_error!(&self.0, GovernanceError::Forbidden);
        }
    }

    pub fn set_pay_token(&self, admin: &Address, tokens: &Vec<Address>, pay_token: &Option<Address>) {
        self.assert_owner(admin);
        assert_pay_token(&self.0, tokens, pay_token);
        set_pay_token(&self.0, pay_token);
    }
}

pub fn assert_pay_token(e: &Env, tokens: &Vec<Address>, pay_token: &Option<Address>) {
    if let Some(pay_token) = pay_token {
        if !tokens.contains(pay_token) {
            panic_with_error!(e, LiquidityPoolValidationError::NotExistPayToken);
        }
    }
}

// Deadline for an action committed now with the given delay.
pub(crate) fn deadline_after(e: &Env, delay: u64) -> u64 {
    if delay == 0 {
        panic_with_error!(e, GovernanceError::InsufficientTime);
    }
    e.ledger().timestamp() + delay
}

pub(crate) fn assert_deadline_reached(e: &Env, deadline: u64, missing: GovernanceError) {
    if deadline == 0 {
        panic_with_error!(e, missing);
    }
    if e.ledger().timestamp() < deadline {
        panic_with_error!(e, GovernanceError::InsufficientTime);
    }
}
