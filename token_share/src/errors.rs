use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LPTokenError {
    TransferNegativeAmount = 2201,
    ApproveNegativeAmount = 2202,
    IncreaseAllowanceNegativeAmount = 2203,
    DecreaseAllowanceNegativeAmount = 2204,
    TransferExceedBalance = 2205,
    TransferExceedAllowance = 2206,
    BurnExceedBalance = 2207,
    OwnerLiquidity = 2208,
    DecreaseAllowanceBelowZero = 2209,
}
