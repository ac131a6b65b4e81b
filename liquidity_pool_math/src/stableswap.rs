use crate::constants::{A_PRECISION, FEE_DENOMINATOR, MAX_ITERATIONS, ONE_COIN_FEE_FLOOR, PRECISION};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{log, panic_with_error, Env, Vec};
use utils::math_errors::MathError;
use utils::u256m::U256M;

// Amplification coefficient at `now`, linearly interpolated during a ramp.
// All values carry the A_PRECISION multiplier.
pub fn get_a(
    initial_a: u128,
    initial_a_time: u64,
    future_a: u128,
    future_a_time: u64,
    now: u64,
) -> u128 {
    if now >= future_a_time || future_a_time <= initial_a_time {
        return future_a;
    }

    let elapsed = (now - initial_a_time) as u128;
    let duration = (future_a_time - initial_a_time) as u128;
    if future_a > initial_a {
        initial_a + (future_a - initial_a) * elapsed / duration
    } else {
        initial_a - (initial_a - future_a) * elapsed / duration
    }
}

pub fn xp(e: &Env, balances: &Vec<u128>, precision_mul: &Vec<u128>) -> Vec<u128> {
    let mut result = Vec::new(e);
    for (balance, mul) in balances.iter().zip(precision_mul.iter()) {
        result.push_back(
            balance
                .checked_mul(mul)
                .unwrap_or_else(|| panic_with_error!(e, MathError::NumberOverflow)),
        );
    }
    result
}

// D invariant calculation in non-overflowing integer operations, iteratively:
//
// A * sum(x_i) * n**n + D = A * D * n**n + D**(n+1) / (n**n * prod(x_i))
//
// Converging solution:
// D[j+1] = (A * n**n * sum(x_i) - D[j]**(n+1) / (n**n prod(x_i))) / (A * n**n - 1)
pub fn get_d(e: &Env, xp: &Vec<u128>, amp: u128) -> u128 {
    let n_coins = xp.len();
    let n = U256M::from_u32(e, n_coins);
    let a_precision = U256M::from_u128(e, A_PRECISION);
    let one = U256M::from_u32(e, 1);

    let mut s = U256M::zero(e);
    for x in xp.iter() {
        s = s + U256M::from_u128(e, x);
    }
    if s.is_zero() {
        return 0;
    }

    let mut d = s.clone();
    let ann = U256M::from_u128(e, amp) * &n;

    for _ in 0..MAX_ITERATIONS {
        let mut d_p = d.clone();
        for x in xp.iter() {
            d_p = d_p.mul_div(&d, &(U256M::from_u128(e, x) * &n));
        }
        let d_prev = d.clone();
        let numerator = (&ann * &s / &a_precision + &d_p * &n) * &d;
        let denominator = (&ann - &a_precision) * &d / &a_precision + (&n + &one) * &d_p;
        d = numerator / denominator;

        if d.abs_diff(&d_prev) <= one {
            return d.to_u128();
        }
    }

    log!(e, "stableswap: D did not converge", amp);
    panic_with_error!(e, MathError::MaxIterationsReached);
}

// Shared Newton iteration for y once `c` and `b` are known:
// y**2 + b*y = c
fn solve_y(e: &Env, c: &U256M, b: &U256M, d: &U256M) -> u128 {
    let one = U256M::from_u32(e, 1);
    let two = U256M::from_u32(e, 2);
    let mut y = d.clone();
    for _ in 0..MAX_ITERATIONS {
        let y_prev = y.clone();
        y = (&y * &y + c) / (&two * &y + b - d);
        if y.abs_diff(&y_prev) <= one {
            return y.to_u128();
        }
    }

    log!(e, "stableswap: y did not converge");
    panic_with_error!(e, MathError::MaxIterationsReached);
}

fn y_terms(
    e: &Env,
    xp: &Vec<u128>,
    amp: u128,
    d: &U256M,
    skip: u32,
    replace: Option<(u32, u128)>,
) -> (U256M, U256M) {
    let n_coins = xp.len();
    let n = U256M::from_u32(e, n_coins);
    let a_precision = U256M::from_u128(e, A_PRECISION);
    let ann = U256M::from_u128(e, amp) * &n;

    let mut c = d.clone();
    let mut s = U256M::zero(e);
    for k in 0..n_coins {
        let x = match replace {
            Some((i, x)) if i == k => x,
            _ if k == skip => continue,
            _ => xp.get_unchecked(k),
        };
        let x = U256M::from_u128(e, x);
        s = s + &x;
        c = c.mul_div(d, &(x * &n));
    }
    let c = (c * d * &a_precision) / (&ann * &n);
    let b = s + d * &a_precision / &ann;
    (c, b)
}

// New balance of coin `j` when coin `i` is set to `x`, keeping D constant.
pub fn get_y(e: &Env, i: u32, j: u32, x: u128, xp: &Vec<u128>, amp: u128, d: u128) -> u128 {
    let d = U256M::from_u128(e, d);
    let (c, b) = y_terms(e, xp, amp, &d, j, Some((i, x)));
    solve_y(e, &c, &b, &d)
}

// Balance of coin `i` which brings the invariant down to `d`.
pub fn get_y_d(e: &Env, amp: u128, i: u32, xp: &Vec<u128>, d: u128) -> u128 {
    let d = U256M::from_u128(e, d);
    let (c, b) = y_terms(e, xp, amp, &d, i, None);
    solve_y(e, &c, &b, &d)
}

// Output of swapping `dx` of coin `i` for coin `j` as (dy after fee, fee).
pub fn get_dy(
    e: &Env,
    i: u32,
    j: u32,
    dx: u128,
    balances: &Vec<u128>,
    precision_mul: &Vec<u128>,
    amp: u128,
    fee: u64,
) -> Option<(u128, u128)> {
    let xp = xp(e, balances, precision_mul);
    let x = dx
        .checked_mul(precision_mul.get_unchecked(i))
        .and_then(|dx| dx.checked_add(xp.get_unchecked(i)))
        .unwrap_or_else(|| panic_with_error!(e, MathError::NumberOverflow));
    let d = get_d(e, &xp, amp);
    let y = get_y(e, i, j, x, &xp, amp, d);
    let xp_j = xp.get_unchecked(j);
    if y + 1 >= xp_j {
        return None;
    }
    let dy = (xp_j - y - 1) / precision_mul.get_unchecked(j);
    let dy_fee = fee_of(e, dy, fee as u128);
    Some((dy - dy_fee, dy_fee))
}

// amount * fee / FEE_DENOMINATOR
pub fn fee_of(e: &Env, amount: u128, fee: u128) -> u128 {
    amount.fixed_mul_floor(e, &fee, &FEE_DENOMINATOR)
}

// Fee applied to the imbalanced part of a deposit or withdrawal.
pub fn imbalance_fee_base(fee: u64, n_coins: u32) -> u128 {
    fee as u128 * n_coins as u128 / (4 * (n_coins as u128 - 1))
}

// Fee for a one-coin withdrawal: the base fee shrinks as coin `i` dominates the pool.
pub fn one_coin_fee(e: &Env, fee: u64, xp_i: u128, xp_sum: u128) -> u128 {
    if xp_sum == 0 {
        panic_with_error!(e, MathError::DivisionByZero);
    }
    let fee = fee as u128;
    let share = fee.fixed_mul_floor(e, &xp_i, &xp_sum);
    fee - share + ONE_COIN_FEE_FLOOR
}

pub fn get_virtual_price(e: &Env, d: u128, total_supply: u128) -> u128 {
    if total_supply == 0 {
        return 0;
    }
    d.fixed_mul_floor(e, &PRECISION, &total_supply)
}
