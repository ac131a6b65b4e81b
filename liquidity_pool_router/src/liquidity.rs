use crate::errors::RouterError;
use crate::pool_interface::{PoolClient, UniPoolClient};
use crate::pool_utils::token_index;
use liquidity_pool_math::constant_product::{
    get_amount_out, get_initial_liquidity, get_liquidity, get_mint_fee, get_one_coin_swap_amount,
    get_share, quote,
};
use liquidity_pool_math::constants::MINIMUM_LIQUIDITY;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, U256};
use utils::convert::to_u128;

// Uni pool state seen from `token_a`: reserve_a belongs to it, reserve_b to the other token.
pub struct UniSnapshot {
    pub token_b: Address,
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub total_supply: u128,
    pub k_last: U256,
    pub admin_fee: u64,
}

impl UniSnapshot {
    pub fn load(e: &Env, pool: &Address, token_a: &Address) -> Self {
        let client = PoolClient::new(e, pool);
        let tokens = client.tokens();
        let reserves = client.reserves();
        let reserve0 = to_u128(e, reserves.get_unchecked(0));
        let reserve1 = to_u128(e, reserves.get_unchecked(1));
        let (token_b, reserve_a, reserve_b) = if token_index(e, &tokens, token_a) == 0 {
            (tokens.get_unchecked(1), reserve0, reserve1)
        } else {
            (tokens.get_unchecked(0), reserve1, reserve0)
        };

        UniSnapshot {
            token_b,
            reserve_a,
            reserve_b,
            total_supply: to_u128(e, client.total_supply()),
            k_last: UniPoolClient::new(e, pool).k_last(),
            admin_fee: client.admin_fee(),
        }
    }

    // Admin LP minted on the next liquidity event at the given reserves
    pub fn pending_admin_fee(&self, e: &Env, reserve_a: u128, reserve_b: u128) -> u128 {
        get_mint_fee(
            e,
            self.total_supply,
            reserve_a,
            reserve_b,
            &self.k_last,
            self.admin_fee,
        )
    }

    // LP minted for a deposit made when the reserves are (reserve_a, reserve_b)
    pub fn lp_for(
        &self,
        e: &Env,
        reserve_a: u128,
        reserve_b: u128,
        amount_a: u128,
        amount_b: u128,
    ) -> u128 {
        if self.total_supply == 0 {
            return get_initial_liquidity(e, amount_a, amount_b).saturating_sub(MINIMUM_LIQUIDITY);
        }
        let total_supply = self.total_supply + self.pending_admin_fee(e, reserve_a, reserve_b);
        get_liquidity(e, amount_a, amount_b, reserve_a, reserve_b, total_supply)
    }
}

// Largest deposit within the desired amounts which keeps the pool price.
pub fn optimal_amounts(
    e: &Env,
    reserve_a: u128,
    reserve_b: u128,
    a_desired: u128,
    b_desired: u128,
    a_min: u128,
    b_min: u128,
) -> (u128, u128) {
    if reserve_a == 0 && reserve_b == 0 {
        return (a_desired, b_desired);
    }

    let b_optimal = quote(e, a_desired, reserve_a, reserve_b);
    if b_optimal <= b_desired {
        if b_optimal < b_min {
            panic_with_error!(e, RouterError::InsufficientBAmount);
        }
        return (a_desired, b_optimal);
    }

    let a_optimal = quote(e, b_desired, reserve_b, reserve_a);
    if a_optimal < a_min {
        panic_with_error!(e, RouterError::InsufficientAAmount);
    }
    (a_optimal, b_desired)
}

pub struct OneCoinDeposit {
    pub swap_in: u128,
    pub swap_out: u128,
    pub deposit_in: u128,
    pub deposit_out: u128,
    pub liquidity: u128,
}

// Swap part of `amount_in` for the other token, then deposit both sides.
// The snapshot is oriented to the input token.
pub fn plan_one_coin_deposit(
    e: &Env,
    snapshot: &UniSnapshot,
    fee: u64,
    amount_in: u128,
) -> OneCoinDeposit {
    let (reserve_in, reserve_out) = (snapshot.reserve_a, snapshot.reserve_b);
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(e, RouterError::BothReserve0);
    }

    let swap_in = get_one_coin_swap_amount(e, reserve_in, amount_in, fee);
    if swap_in == 0 || swap_in >= amount_in {
        panic_with_error!(e, RouterError::InsufficientSwapAmount);
    }
    let swap_out = get_amount_out(e, swap_in, reserve_in, reserve_out, fee);
    if swap_out == 0 {
        panic_with_error!(e, RouterError::InsufficientSwapAmount);
    }

    let reserve_in = reserve_in + swap_in;
    let reserve_out = reserve_out - swap_out;
    let (deposit_in, deposit_out) = optimal_amounts(
        e,
        reserve_in,
        reserve_out,
        amount_in - swap_in,
        swap_out,
        0,
        0,
    );
    let liquidity = snapshot.lp_for(e, reserve_in, reserve_out, deposit_in, deposit_out);
    if liquidity == 0 {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }

    OneCoinDeposit {
        swap_in,
        swap_out,
        deposit_in,
        deposit_out,
        liquidity,
    }
}

pub struct OneCoinWithdraw {
    pub amount_out: u128,
    pub mint_fee: u128,
}

// Burn `liquidity` and sell the other side into the token kept.
// The snapshot is oriented to the output token.
pub fn plan_one_coin_withdraw(
    e: &Env,
    pool: &Address,
    token_out: &Address,
    snapshot: &UniSnapshot,
    fee: u64,
    liquidity: u128,
) -> OneCoinWithdraw {
    let balance_out = to_u128(e, SorobanTokenClient::new(e, token_out).balance(pool));
    let balance_other = to_u128(
        e,
        SorobanTokenClient::new(e, &snapshot.token_b).balance(pool),
    );

    let mint_fee = snapshot.pending_admin_fee(e, snapshot.reserve_a, snapshot.reserve_b);
    let total_supply = snapshot.total_supply + mint_fee;
    if total_supply == 0 {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }
    let withdrawn_out = get_share(e, liquidity, balance_out, total_supply);
    let withdrawn_other = get_share(e, liquidity, balance_other, total_supply);
    if withdrawn_out == 0 || withdrawn_other == 0 {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }

    let swap_out = get_amount_out(
        e,
        withdrawn_other,
        balance_other - withdrawn_other,
        balance_out - withdrawn_out,
        fee,
    );
    if swap_out == 0 {
        panic_with_error!(e, RouterError::InsufficientSwapAmount);
    }

    OneCoinWithdraw {
        amount_out: withdrawn_out + swap_out,
        mint_fee,
    }
}
