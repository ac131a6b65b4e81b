pub const MAX_TOKENS: u32 = 8;
pub const MAX_A: u128 = 1_000_000; // absolute maximum value for A
pub const MAX_A_CHANGE: u128 = 10; // maximum multiplier allowed for a single ramp
