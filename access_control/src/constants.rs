use liquidity_pool_math::constants::FEE_DENOMINATOR;

// minimal delay for fee changes and owner handover, seconds
pub const MIN_RAMP_TIME: u64 = 86400;

pub const MAX_FEE: u64 = (FEE_DENOMINATOR / 2) as u64;
pub const MAX_ADMIN_FEE: u64 = FEE_DENOMINATOR as u64;
pub const MAX_WINNER_FEE: u64 = FEE_DENOMINATOR as u64;
