use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    // K check failed after a swap
    InvariantDoesNotHold = 204,
    InsufficientLiquidityMinted = 205,
    InsufficientLiquidityBurned = 206,
    InvalidTo = 207,
}
