use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    D0IsZero = 201,
    ExchangeDyNotPositive = 202,
    RampABig = 203,
    // deposit did not grow D
    InvariantDoesNotHold = 204,
    DecimalsTooLarge = 205,
}
