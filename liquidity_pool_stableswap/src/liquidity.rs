use access_control::storage::{get_admin_fee, get_fee};
use liquidity_pool_math::stableswap::{fee_of, imbalance_fee_base};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, Vec};

// Charges the imbalance fee on every coin that moved away from the ideal
// proportional change between `old` and `new`.
//
// Returns (balances to store, balances net of the whole fee). The first keeps
// the LP part of the fee in the pool, the second is what the minted or burned
// LP is priced on.
pub fn charge_imbalance_fees(
    e: &Env,
    old: &Vec<u128>,
    new: &Vec<u128>,
    d0: u128,
    d1: u128,
) -> (Vec<u128>, Vec<u128>) {
    let fee_base = imbalance_fee_base(get_fee(e), old.len());
    let admin_fee = get_admin_fee(e) as u128;

    let mut stored = Vec::new(e);
    let mut after_fees = Vec::new(e);
    for (old_balance, new_balance) in old.iter().zip(new.iter()) {
        let ideal = d1.fixed_mul_floor(e, &old_balance, &d0);
        let fee = fee_of(e, ideal.abs_diff(new_balance), fee_base);
        let admin_part = fee_of(e, fee, admin_fee);
        match (
            new_balance.checked_sub(admin_part),
            new_balance.checked_sub(fee),
        ) {
            (Some(kept), Some(net)) => {
                stored.push_back(kept);
                after_fees.push_back(net);
            }
            _ => panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity),
        }
    }
    (stored, after_fees)
}
