#![cfg(any(test, feature = "testutils"))]

use crate::{Token, TokenClient};
use soroban_sdk::{Address, Env, String};

pub fn create_token<'a>(e: &Env, admin: &Address, decimals: u32) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register(
            Token,
            (
                admin.clone(),
                decimals,
                String::from_str(e, "name"),
                String::from_str(e, "symbol"),
            ),
        ),
    )
}
