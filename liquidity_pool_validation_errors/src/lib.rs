#![no_std]

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolValidationError {
    // input validation
    InsufficientInput = 2001,
    InTokenOutOfBounds = 2002,
    OutTokenOutOfBounds = 2003,
    IndexOutOfBounds = 2004,
    ZeroTokenBurn = 2005,
    InitialDeposit = 2006,
    NotExistPayToken = 2007,
    NotExistToken = 2008,
    WrongInputVecSize = 2009,
    CannotSwapSameToken = 2010,
    FeeOutOfBounds = 2011,

    // slippage
    InsufficientOutputAmount = 2020,
    InsufficientLiquidity = 2021,
    Slippage = 2022,
    WithdrawalResultedInFewerCoinsThanExpected = 2023,

    // pool state
    Killed = 2030,
}
