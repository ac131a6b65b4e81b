// fees are numerators over FEE_DENOMINATOR: 30_000_000 = 0.3%
pub const FEE_DENOMINATOR: u128 = 10_000_000_000;

// stableswap coordinates are normalized to 18 digits
pub const PRECISION: u128 = 1_000_000_000_000_000_000;
pub const MAX_DECIMALS: u32 = 18;
pub const A_PRECISION: u128 = 100;

// minimal share of the fee charged on a one-coin withdrawal
pub const ONE_COIN_FEE_FLOOR: u128 = 500_000;

pub const MAX_ITERATIONS: u32 = 255;

// locked forever on the first constant product deposit
pub const MINIMUM_LIQUIDITY: u128 = 1000;
