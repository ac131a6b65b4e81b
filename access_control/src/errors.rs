use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    Forbidden = 2101,
    ActiveTransfer = 2102,
    AdminActionsDeadline = 2103,
    InsufficientTime = 2104,
    NoActiveTransfer = 2105,
    NoActiveAction = 2106,
    FutureFeeExceedMaxFee = 2107,
    FutureAdminFeeExceedMaxAdminFee = 2108,
    FutureWinnerFeeExceedMaxWinnerFee = 2109,
}
