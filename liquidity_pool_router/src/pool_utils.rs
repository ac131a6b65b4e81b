use crate::errors::RouterError;
use crate::pool_interface::{FactoryClient, PoolClient, StablePoolClient, UniPoolClient};
use crate::storage::get_factory;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{
    panic_with_error, symbol_short, vec, Address, Env, IntoVal, Symbol, Vec,
};

pub const POOL_TYPE_UNI: Symbol = symbol_short!("uni");
pub const POOL_TYPE_STABLE: Symbol = symbol_short!("stable");

#[derive(Clone, Copy, PartialEq)]
pub enum PoolType {
    Uni,
    Stable,
}

pub fn get_pool(e: &Env, token_a: &Address, token_b: &Address) -> Address {
    match FactoryClient::new(e, &get_factory(e)).get_pair(token_a, token_b) {
        Some(pool) => pool,
        None => panic_with_error!(e, RouterError::PairNotFound),
    }
}

pub fn get_pool_type(e: &Env, pool: &Address) -> PoolType {
    let ex_type = PoolClient::new(e, pool).ex_type();
    if ex_type == POOL_TYPE_UNI {
        PoolType::Uni
    } else if ex_type == POOL_TYPE_STABLE {
        PoolType::Stable
    } else {
        panic_with_error!(e, RouterError::UnknownPoolType);
    }
}

pub fn get_uni_pool(e: &Env, token_a: &Address, token_b: &Address) -> Address {
    let pool = get_pool(e, token_a, token_b);
    if get_pool_type(e, &pool) != PoolType::Uni {
        panic_with_error!(e, RouterError::UniPoolRequired);
    }
    pool
}

pub fn assert_path(e: &Env, path: &Vec<Address>) {
    if path.len() < 2 {
        panic_with_error!(e, RouterError::InvalidPath);
    }
}

pub fn token_index(e: &Env, tokens: &Vec<Address>, token: &Address) -> u32 {
    match tokens.first_index_of(token) {
        Some(idx) => idx,
        None => panic_with_error!(e, RouterError::InvalidPath),
    }
}

// Pool outputs (amount0_out, amount1_out) paying `amount` of `token_out`
pub fn uni_outputs(e: &Env, pool: &Address, token_out: &Address, amount: i128) -> (i128, i128) {
    let tokens = PoolClient::new(e, pool).tokens();
    if token_index(e, &tokens, token_out) == 0 {
        (amount, 0)
    } else {
        (0, amount)
    }
}

pub fn quote_hop(
    e: &Env,
    user: &Address,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
) -> i128 {
    let router = e.current_contract_address();
    let hint = Some(user.clone());
    match get_pool_type(e, pool) {
        PoolType::Uni => {
            UniPoolClient::new(e, pool).get_amount_out(&router, token_in, &amount_in, &hint)
        }
        PoolType::Stable => {
            let tokens = PoolClient::new(e, pool).tokens();
            StablePoolClient::new(e, pool).get_dy(
                &router,
                &token_index(e, &tokens, token_in),
                &token_index(e, &tokens, token_out),
                &amount_in,
                &hint,
            )
        }
    }
}

// Swaps `amount_in` of `token_in` held by the router, the output stays with the router.
pub fn execute_hop(
    e: &Env,
    user: &Address,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
) -> i128 {
    let router = e.current_contract_address();
    let hint = Some(user.clone());
    match get_pool_type(e, pool) {
        PoolType::Uni => {
            let client = UniPoolClient::new(e, pool);
            let amount_out = client.get_amount_out(&router, token_in, &amount_in, &hint);
            SorobanTokenClient::new(e, token_in).transfer(&router, pool, &amount_in);
            let (amount0_out, amount1_out) = uni_outputs(e, pool, token_out, amount_out);
            client.swap(&router, &amount0_out, &amount1_out, &router, &hint);
            amount_out
        }
        PoolType::Stable => {
            let tokens = PoolClient::new(e, pool).tokens();
            // the pool pulls the input from the router
            e.authorize_as_current_contract(vec![
                e,
                InvokerContractAuthEntry::Contract(SubContractInvocation {
                    context: ContractContext {
                        contract: token_in.clone(),
                        fn_name: Symbol::new(e, "transfer"),
                        args: (router.clone(), pool.clone(), amount_in).into_val(e),
                    },
                    sub_invocations: vec![e],
                }),
            ]);
            StablePoolClient::new(e, pool).exchange(
                &router,
                &token_index(e, &tokens, token_in),
                &token_index(e, &tokens, token_out),
                &amount_in,
                &0,
                &hint,
            )
        }
    }
}

// Reverts when `user` is the pool owner and the removal would dig into the
// admin liquidity reserved for the owner.
pub fn assert_owner_liquidity(e: &Env, pool: &Address, user: &Address, liquidity: i128) {
    let client = PoolClient::new(e, pool);
    if &client.owner() != user {
        return;
    }
    let reserved = UniPoolClient::new(e, pool).minted_admin_balance();
    if client.balance_of(user) - liquidity < reserved {
        panic_with_error!(e, RouterError::OwnerLiquidity);
    }
}
