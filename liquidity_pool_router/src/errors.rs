use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    InsufficientAAmount = 2501,
    InsufficientBAmount = 2502,
    InsufficientSwapAmount = 2503,
    InsufficientLiquidity = 2504,
    InsufficientInAmount = 2505,
    InsufficientOutAmount = 2506,
    BothReserve0 = 2507,
    InputTokenNotMatch = 2508,
    OutputTokenNotMatch = 2509,
    OwnerLiquidity = 2510,
    InvalidPath = 2511,
    PairNotFound = 2512,
    UniPoolRequired = 2513,
    UnknownPoolType = 2514,
}
