use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    Forbidden = 2401,
    PairExists = 2402,
    PairIndexOutOfBounds = 2403,
}
