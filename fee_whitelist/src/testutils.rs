#![cfg(any(test, feature = "testutils"))]

use crate::{FeeWhitelist, FeeWhitelistClient};
use soroban_sdk::{Address, Env};

pub fn create_fee_whitelist<'a>(e: &Env, owner: &Address) -> FeeWhitelistClient<'a> {
    FeeWhitelistClient::new(e, &e.register(FeeWhitelist, (owner.clone(),)))
}
