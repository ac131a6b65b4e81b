use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    NumberOverflow = 510,
    // iterative solver did not converge
    MaxIterationsReached = 511,
    DivisionByZero = 512,
}
