use crate::errors::FactoryError;
use crate::storage::{
    get_pair_of, get_pairs_count, get_token_set_pool, set_pair_at, set_pair_of, set_pairs_count,
    set_token_set_pool, PoolKind,
};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{panic_with_error, xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

// Ascending address order. Identical tokens are rejected.
pub fn sort_tokens(e: &Env, tokens: &Vec<Address>) -> Vec<Address> {
    let mut sorted: Vec<Address> = Vec::new(e);
    for token in tokens.iter() {
        let mut position = sorted.len();
        for (idx, existing) in sorted.iter().enumerate() {
            if existing == token {
                panic_with_error!(e, LiquidityPoolValidationError::CannotSwapSameToken);
            }
            if token < existing {
                position = idx as u32;
                break;
            }
        }
        sorted.insert(position, token);
    }
    sorted
}

pub fn get_tokens_salt(e: &Env, tokens: &Vec<Address>) -> BytesN<32> {
    let mut salt = Bytes::new(e);
    for token in tokens.iter() {
        salt.append(&token.to_xdr(e));
    }
    e.crypto().sha256(&salt).to_bytes()
}

// Deployment salt of a pool of the given kind over sorted tokens
pub fn get_pool_salt(e: &Env, kind: PoolKind, tokens: &Vec<Address>) -> BytesN<32> {
    let mut salt = Bytes::new(e);
    salt.append(&kind.to_xdr(e));
    for token in tokens.iter() {
        salt.append(&token.to_xdr(e));
    }
    e.crypto().sha256(&salt).to_bytes()
}

pub fn assert_token_set_free(e: &Env, sorted: &Vec<Address>) {
    if get_token_set_pool(e, &get_tokens_salt(e, sorted)).is_some() {
        panic_with_error!(e, FactoryError::PairExists);
    }
}

// Append the pool to `all_pairs` and index every token pair it covers.
// A pair already served by an earlier pool keeps pointing at it.
pub fn add_pool(e: &Env, sorted: &Vec<Address>, pool: &Address) {
    set_token_set_pool(e, &get_tokens_salt(e, sorted), pool);

    let count = get_pairs_count(e);
    set_pair_at(e, &count, pool);
    set_pairs_count(e, &(count + 1));

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let token_a = sorted.get_unchecked(i);
            let token_b = sorted.get_unchecked(j);
            if get_pair_of(e, &token_a, &token_b).is_none() {
                set_pair_of(e, &token_a, &token_b, pool);
                set_pair_of(e, &token_b, &token_a, pool);
            }
        }
    }
}
