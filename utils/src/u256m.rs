use crate::math_errors::MathError;
use crate::u256_math::ExtraMath;
use core::{cmp, ops};
use soroban_sdk::{panic_with_error, Env, U256};

// Operator wrapper around the host U256 so that invariant formulas read as plain arithmetic.
// Every operation is exact; subtraction below zero and overflow abort the invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct U256M {
    pub v: U256,
}

impl U256M {
    pub fn env(&self) -> &Env {
        self.v.env()
    }

    pub fn zero(e: &Env) -> Self {
        Self::from_u32(e, 0)
    }

    pub fn from_u32(e: &Env, u: u32) -> Self {
        Self {
            v: U256::from_u32(e, u),
        }
    }

    pub fn from_u128(e: &Env, u: u128) -> Self {
        Self {
            v: U256::from_u128(e, u),
        }
    }

    pub fn from_i128(e: &Env, i: i128) -> Self {
        if i < 0 {
            panic_with_error!(e, MathError::NumberOverflow);
        }
        Self::from_u128(e, i as u128)
    }

    pub fn from_u256(u: U256) -> Self {
        Self { v: u }
    }

    pub fn pow10(e: &Env, k: u32) -> Self {
        Self::from_u32(e, 10).pow(k)
    }

    pub fn to_u128(&self) -> u128 {
        match self.v.to_u128() {
            Some(v) => v,
            None => panic_with_error!(self.env(), MathError::NumberOverflow),
        }
    }

    pub fn to_i128(&self) -> i128 {
        let value = self.to_u128();
        if value > i128::MAX as u128 {
            panic_with_error!(self.env(), MathError::NumberOverflow);
        }
        value as i128
    }

    pub fn is_zero(&self) -> bool {
        self.v == U256::from_u32(self.env(), 0)
    }

    pub fn pow(&self, pow: u32) -> Self {
        Self {
            v: self.v.pow(pow),
        }
    }

    pub fn sqrt(&self) -> Self {
        Self { v: self.v.sqrt() }
    }

    pub fn abs_diff(&self, other: &U256M) -> Self {
        if self > other {
            self - other
        } else {
            other - self
        }
    }

    // a * b / c, truncating
    pub fn mul_div(&self, b: &U256M, c: &U256M) -> Self {
        &(self * b) / c
    }

    // a * b / c, rounding up
    pub fn mul_div_ceil(&self, b: &U256M, c: &U256M) -> Self {
        let product = self * b;
        let result = &product / c;
        if (&result * c) == product {
            result
        } else {
            result + U256M::from_u32(self.env(), 1)
        }
    }
}

impl PartialOrd for U256M {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256M {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.v.cmp(&other.v)
    }
}

fn checked_divisor(rhs: &U256M) -> &U256 {
    if rhs.is_zero() {
        panic_with_error!(rhs.env(), MathError::DivisionByZero);
    }
    &rhs.v
}

macro_rules! impl_u256m_op {
    ($op_trait:ident, $op:ident, |$rhs:ident| $divisor:expr) => {
        impl ops::$op_trait<U256M> for U256M {
            type Output = U256M;

            fn $op(self, $rhs: U256M) -> U256M {
                U256M {
                    v: self.v.$op($divisor),
                }
            }
        }

        impl ops::$op_trait<&U256M> for U256M {
            type Output = U256M;

            fn $op(self, $rhs: &U256M) -> U256M {
                U256M {
                    v: self.v.$op($divisor),
                }
            }
        }

        impl ops::$op_trait<U256M> for &U256M {
            type Output = U256M;

            fn $op(self, $rhs: U256M) -> U256M {
                U256M {
                    v: self.v.$op($divisor),
                }
            }
        }

        impl ops::$op_trait<&U256M> for &U256M {
            type Output = U256M;

            fn $op(self, $rhs: &U256M) -> U256M {
                U256M {
                    v: self.v.$op($divisor),
                }
            }
        }
    };
}

impl_u256m_op!(Add, add, |rhs| &rhs.v);
impl_u256m_op!(Sub, sub, |rhs| &rhs.v);
impl_u256m_op!(Mul, mul, |rhs| &rhs.v);
impl_u256m_op!(Div, div, |rhs| checked_divisor(&rhs));
