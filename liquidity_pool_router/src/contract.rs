use crate::errors::RouterError;
use crate::liquidity::{
    optimal_amounts, plan_one_coin_deposit, plan_one_coin_withdraw, UniSnapshot,
};
use crate::pool_interface::{PoolClient, UniPoolClient};
use crate::pool_utils::{
    assert_owner_liquidity, assert_path, execute_hop, get_pool, get_uni_pool, quote_hop,
    token_index, uni_outputs,
};
use crate::router_interface::{RouterInterface, UniLiquidityInterface};
use crate::storage::{get_factory, set_factory};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, vec, Address, Env, Vec};
use utils::convert::to_i128;

#[contract]
pub struct LiquidityPoolRouter;

fn assert_pair_token(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    token: &Address,
    error: RouterError,
) {
    if token != token_a && token != token_b {
        panic_with_error!(e, error);
    }
}

fn amounts_out(e: &Env, user: &Address, amount_in: i128, path: &Vec<Address>) -> Vec<i128> {
    if amount_in <= 0 {
        panic_with_error!(e, RouterError::InsufficientSwapAmount);
    }
    assert_path(e, path);

    let mut amounts = vec![e, amount_in];
    let mut amount = amount_in;
    for i in 0..path.len() - 1 {
        let token_in = path.get_unchecked(i);
        let token_out = path.get_unchecked(i + 1);
        let pool = get_pool(e, &token_in, &token_out);
        amount = quote_hop(e, user, &pool, &token_in, &token_out, amount);
        amounts.push_back(amount);
    }
    amounts
}

// Inputs along the path and the uni pool serving each hop
fn uni_amounts_in(
    e: &Env,
    user: &Address,
    amount_out: i128,
    path: &Vec<Address>,
) -> (Vec<i128>, Vec<Address>) {
    if amount_out <= 0 {
        panic_with_error!(e, RouterError::InsufficientOutAmount);
    }
    assert_path(e, path);

    let router = e.current_contract_address();
    let hint = Some(user.clone());
    let mut amounts = vec![e, amount_out];
    let mut pools = Vec::new(e);
    let mut amount = amount_out;
    for i in (0..path.len() - 1).rev() {
        let token_in = path.get_unchecked(i);
        let token_out = path.get_unchecked(i + 1);
        let pool = get_uni_pool(e, &token_in, &token_out);
        amount = UniPoolClient::new(e, &pool).get_amount_in(&router, &token_out, &amount, &hint);
        amounts.push_front(amount);
        pools.push_front(pool);
    }
    (amounts, pools)
}

#[contractimpl]
impl LiquidityPoolRouter {
    pub fn __constructor(e: Env, factory: Address) {
        set_factory(&e, &factory);
    }
}

#[contractimpl]
impl RouterInterface for LiquidityPoolRouter {
    fn factory(e: Env) -> Address {
        get_factory(&e)
    }

    fn get_amounts_out(e: Env, user: Address, amount_in: i128, path: Vec<Address>) -> Vec<i128> {
        amounts_out(&e, &user, amount_in, &path)
    }

    fn uni_get_amounts_in(
        e: Env,
        user: Address,
        amount_out: i128,
        path: Vec<Address>,
    ) -> Vec<i128> {
        uni_amounts_in(&e, &user, amount_out, &path).0
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: i128,
        min_out: i128,
        path: Vec<Address>,
    ) -> Vec<i128> {
        user.require_auth();
        if amount_in <= 0 {
            panic_with_error!(&e, RouterError::InsufficientSwapAmount);
        }
        if min_out < 0 {
            panic_with_error!(&e, RouterError::InsufficientOutAmount);
        }
        assert_path(&e, &path);

        let router = e.current_contract_address();
        SorobanTokenClient::new(&e, &path.get_unchecked(0)).transfer(&user, &router, &amount_in);

        let mut amounts = vec![&e, amount_in];
        let mut amount = amount_in;
        for i in 0..path.len() - 1 {
            let token_in = path.get_unchecked(i);
            let token_out = path.get_unchecked(i + 1);
            let pool = get_pool(&e, &token_in, &token_out);
            amount = execute_hop(&e, &user, &pool, &token_in, &token_out, amount);
            amounts.push_back(amount);
        }
        if amount < min_out {
            panic_with_error!(&e, RouterError::InsufficientOutAmount);
        }

        SorobanTokenClient::new(&e, &path.get_unchecked(path.len() - 1))
            .transfer(&router, &user, &amount);
        amounts
    }

    fn uni_swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: i128,
        max_in: i128,
        path: Vec<Address>,
    ) -> Vec<i128> {
        user.require_auth();
        if max_in < 0 {
            panic_with_error!(&e, RouterError::InsufficientInAmount);
        }
        let (amounts, pools) = uni_amounts_in(&e, &user, amount_out, &path);
        if amounts.get_unchecked(0) > max_in {
            panic_with_error!(&e, RouterError::InsufficientInAmount);
        }

        let router = e.current_contract_address();
        let hint = Some(user.clone());
        SorobanTokenClient::new(&e, &path.get_unchecked(0)).transfer(
            &user,
            &pools.get_unchecked(0),
            &amounts.get_unchecked(0),
        );
        // every hop pays straight into the next pool
        for i in 0..pools.len() {
            let pool = pools.get_unchecked(i);
            let to = if i + 1 < pools.len() {
                pools.get_unchecked(i + 1)
            } else {
                user.clone()
            };
            let (amount0_out, amount1_out) = uni_outputs(
                &e,
                &pool,
                &path.get_unchecked(i + 1),
                amounts.get_unchecked(i + 1),
            );
            UniPoolClient::new(&e, &pool).swap(&router, &amount0_out, &amount1_out, &to, &hint);
        }
        amounts
    }
}

#[contractimpl]
impl UniLiquidityInterface for LiquidityPoolRouter {
    fn uni_add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        a_desired: i128,
        b_desired: i128,
        a_min: i128,
        b_min: i128,
    ) -> (i128, i128, i128) {
        user.require_auth();
        if a_desired <= 0 || a_min < 0 {
            panic_with_error!(&e, RouterError::InsufficientAAmount);
        }
        if b_desired <= 0 || b_min < 0 {
            panic_with_error!(&e, RouterError::InsufficientBAmount);
        }

        let pool = get_uni_pool(&e, &token_a, &token_b);
        let snapshot = UniSnapshot::load(&e, &pool, &token_a);
        let (amount_a, amount_b) = optimal_amounts(
            &e,
            snapshot.reserve_a,
            snapshot.reserve_b,
            a_desired as u128,
            b_desired as u128,
            a_min as u128,
            b_min as u128,
        );
        let (amount_a, amount_b) = (to_i128(&e, amount_a), to_i128(&e, amount_b));

        SorobanTokenClient::new(&e, &token_a).transfer(&user, &pool, &amount_a);
        SorobanTokenClient::new(&e, &token_b).transfer(&user, &pool, &amount_b);
        let liquidity = UniPoolClient::new(&e, &pool).mint(&user);
        (amount_a, amount_b, liquidity)
    }

    fn uni_add_liquidity_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_in: Address,
        amount_in: i128,
        min_lp: i128,
    ) -> i128 {
        user.require_auth();
        if amount_in <= 0 {
            panic_with_error!(&e, RouterError::InsufficientInAmount);
        }
        if min_lp < 0 {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        assert_pair_token(&e, &token_a, &token_b, &token_in, RouterError::InputTokenNotMatch);

        let pool = get_uni_pool(&e, &token_a, &token_b);
        let router = e.current_contract_address();
        let hint = Some(user.clone());
        let fee = PoolClient::new(&e, &pool).fee_for(&router, &hint);
        let snapshot = UniSnapshot::load(&e, &pool, &token_in);
        let plan = plan_one_coin_deposit(&e, &snapshot, fee, amount_in as u128);

        let client = UniPoolClient::new(&e, &pool);
        let token_in_client = SorobanTokenClient::new(&e, &token_in);
        let token_other_client = SorobanTokenClient::new(&e, &snapshot.token_b);

        token_in_client.transfer(&user, &pool, &to_i128(&e, plan.swap_in));
        let (amount0_out, amount1_out) =
            uni_outputs(&e, &pool, &snapshot.token_b, to_i128(&e, plan.swap_out));
        client.swap(&router, &amount0_out, &amount1_out, &router, &hint);

        token_in_client.transfer(&user, &pool, &to_i128(&e, plan.deposit_in));
        token_other_client.transfer(&router, &pool, &to_i128(&e, plan.deposit_out));
        let liquidity = client.mint(&user);

        let change = plan.swap_out - plan.deposit_out;
        if change > 0 {
            token_other_client.transfer(&router, &user, &to_i128(&e, change));
        }
        if liquidity < min_lp {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        liquidity
    }

    fn uni_remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        a_min: i128,
        b_min: i128,
    ) -> (i128, i128) {
        user.require_auth();
        if liquidity <= 0 {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        if a_min < 0 {
            panic_with_error!(&e, RouterError::InsufficientAAmount);
        }
        if b_min < 0 {
            panic_with_error!(&e, RouterError::InsufficientBAmount);
        }

        let pool = get_uni_pool(&e, &token_a, &token_b);
        assert_owner_liquidity(&e, &pool, &user, liquidity);

        PoolClient::new(&e, &pool).transfer(&user, &pool, &liquidity);
        let (amount0, amount1) = UniPoolClient::new(&e, &pool).burn(&user);
        let tokens = PoolClient::new(&e, &pool).tokens();
        let (amount_a, amount_b) = if token_index(&e, &tokens, &token_a) == 0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };

        if amount_a < a_min {
            panic_with_error!(&e, RouterError::InsufficientAAmount);
        }
        if amount_b < b_min {
            panic_with_error!(&e, RouterError::InsufficientBAmount);
        }
        (amount_a, amount_b)
    }

    fn uni_remove_liquidity_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_out: Address,
        liquidity: i128,
        min_out: i128,
    ) -> (i128, i128) {
        user.require_auth();
        if liquidity <= 0 {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        if min_out < 0 {
            panic_with_error!(&e, RouterError::InsufficientOutAmount);
        }
        assert_pair_token(&e, &token_a, &token_b, &token_out, RouterError::OutputTokenNotMatch);

        let pool = get_uni_pool(&e, &token_a, &token_b);
        assert_owner_liquidity(&e, &pool, &user, liquidity);

        let router = e.current_contract_address();
        let hint = Some(user.clone());
        let pool_client = PoolClient::new(&e, &pool);
        let client = UniPoolClient::new(&e, &pool);
        let tokens = pool_client.tokens();
        let out_idx = token_index(&e, &tokens, &token_out);
        let token_other = tokens.get_unchecked(1 - out_idx);

        let minted_before = client.minted_admin_balance();
        pool_client.transfer(&user, &pool, &liquidity);
        let (amount0, amount1) = client.burn(&router);
        let mint_fee = client.minted_admin_balance() - minted_before;
        let (withdrawn_out, withdrawn_other) = if out_idx == 0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };

        let swap_out = client.get_amount_out(&router, &token_other, &withdrawn_other, &hint);
        if swap_out == 0 {
            panic_with_error!(&e, RouterError::InsufficientSwapAmount);
        }
        SorobanTokenClient::new(&e, &token_other).transfer(&router, &pool, &withdrawn_other);
        let (amount0_out, amount1_out) = uni_outputs(&e, &pool, &token_out, swap_out);
        client.swap(&router, &amount0_out, &amount1_out, &user, &hint);
        SorobanTokenClient::new(&e, &token_out).transfer(&router, &user, &withdrawn_out);

        let amount_out = withdrawn_out + swap_out;
        if amount_out < min_out {
            panic_with_error!(&e, RouterError::InsufficientOutAmount);
        }
        (amount_out, mint_fee)
    }

    fn uni_get_lp_token_amount(
        e: Env,
        token_a: Address,
        token_b: Address,
        a_desired: i128,
        b_desired: i128,
    ) -> (i128, i128, i128) {
        if a_desired <= 0 {
            panic_with_error!(&e, RouterError::InsufficientAAmount);
        }
        if b_desired <= 0 {
            panic_with_error!(&e, RouterError::InsufficientBAmount);
        }
        let pool = get_uni_pool(&e, &token_a, &token_b);
        let snapshot = UniSnapshot::load(&e, &pool, &token_a);
        let (amount_a, amount_b) = optimal_amounts(
            &e,
            snapshot.reserve_a,
            snapshot.reserve_b,
            a_desired as u128,
            b_desired as u128,
            0,
            0,
        );
        let liquidity = snapshot.lp_for(
            &e,
            snapshot.reserve_a,
            snapshot.reserve_b,
            amount_a,
            amount_b,
        );
        (
            to_i128(&e, amount_a),
            to_i128(&e, amount_b),
            to_i128(&e, liquidity),
        )
    }

    fn uni_get_lp_token_amount_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_in: Address,
        amount_in: i128,
    ) -> i128 {
        if amount_in <= 0 {
            panic_with_error!(&e, RouterError::InsufficientInAmount);
        }
        assert_pair_token(&e, &token_a, &token_b, &token_in, RouterError::InputTokenNotMatch);

        let pool = get_uni_pool(&e, &token_a, &token_b);
        let fee = PoolClient::new(&e, &pool).fee_for(&e.current_contract_address(), &Some(user));
        let snapshot = UniSnapshot::load(&e, &pool, &token_in);
        to_i128(
            &e,
            plan_one_coin_deposit(&e, &snapshot, fee, amount_in as u128).liquidity,
        )
    }

    fn uni_get_withdraw_amount(
        e: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
    ) -> (i128, i128) {
        if liquidity <= 0 {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        let pool = get_uni_pool(&e, &token_a, &token_b);
        let (amount0, amount1) = UniPoolClient::new(&e, &pool).get_withdraw_amount(&liquidity);
        let tokens = PoolClient::new(&e, &pool).tokens();
        if token_index(&e, &tokens, &token_a) == 0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        }
    }

    fn uni_get_withdraw_amount_one_coin(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        token_out: Address,
        liquidity: i128,
    ) -> (i128, i128) {
        if liquidity <= 0 {
            panic_with_error!(&e, RouterError::InsufficientLiquidity);
        }
        assert_pair_token(&e, &token_a, &token_b, &token_out, RouterError::OutputTokenNotMatch);

        let pool = get_uni_pool(&e, &token_a, &token_b);
        let fee = PoolClient::new(&e, &pool).fee_for(&e.current_contract_address(), &Some(user));
        let snapshot = UniSnapshot::load(&e, &pool, &token_out);
        let plan = plan_one_coin_withdraw(
            &e,
            &pool,
            &token_out,
            &snapshot,
            fee,
            liquidity as u128,
        );
        (to_i128(&e, plan.amount_out), to_i128(&e, plan.mint_fee))
    }
}
