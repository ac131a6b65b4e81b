#![no_std]

mod errors;
mod interface;
mod storage;
mod test;
mod token;

pub use errors::LPTokenError;
pub use interface::LpTokenInterface;
pub use storage::{get_name, get_reserved_liquidity, get_symbol, set_name, set_symbol};
pub use token::{
    allowance, approve, balance_of, burn, decrease_allowance, increase_allowance, mint,
    mint_locked, reserve_liquidity, total_supply, transfer, transfer_from, move_reserved_liquidity,
    DECIMALS, INFINITE_ALLOWANCE,
};
