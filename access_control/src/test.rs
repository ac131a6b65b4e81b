#![cfg(test)]
extern crate std;

use crate::access::Governance;
use crate::constants::{MAX_FEE, MIN_RAMP_TIME};
use crate::fees::FeeGovernanceTrait;
use crate::params::PoolParams;
use crate::storage;
use crate::transfer::OwnerWinnerTransferTrait;
use crate::whitelist::{decode_fee, encode_fee, WhitelistGovernanceTrait};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, vec, Address, Bytes, Env, Vec};
use utils::test_utils::jump;

#[contract]
struct GovernedPool;

#[contractimpl]
impl GovernedPool {
    pub fn __constructor(e: Env, params: PoolParams, tokens: Vec<Address>, pay_token: Option<Address>) {
        Governance::new(&e).init(&params, &tokens, &pay_token);
        e.storage().instance().set(&TOKENS, &tokens);
    }

    pub fn set_has_liquidity(e: Env, value: bool) {
        e.storage().instance().set(&HAS_LIQUIDITY, &value);
    }

    pub fn commit_new_fee(e: Env, admin: Address, fee: u64, admin_fee: u64, winner_fee: u64, delay: u64) {
        let has_liquidity: bool = e.storage().instance().get(&HAS_LIQUIDITY).unwrap_or(false);
        Governance::new(&e).commit_new_fee(&admin, fee, admin_fee, winner_fee, delay, !has_liquidity);
    }

    pub fn apply_new_fee(e: Env, admin: Address) {
        Governance::new(&e).apply_new_fee(&admin);
    }

    pub fn revert_new_fee(e: Env, admin: Address) {
        Governance::new(&e).revert_new_fee(&admin);
    }

    pub fn commit_new_whitelist(e: Env, admin: Address, whitelist: Option<Address>, group_id: u32, delay: u64) {
        Governance::new(&e).commit_new_whitelist(&admin, &whitelist, group_id, delay);
    }

    pub fn apply_new_whitelist(e: Env, admin: Address) {
        Governance::new(&e).apply_new_whitelist(&admin);
    }

    pub fn commit_transfer(e: Env, admin: Address, new_owner: Address, new_winner: Address, delay: u64) {
        Governance::new(&e).commit_transfer_owner_winner(&admin, &new_owner, &new_winner, delay);
    }

    pub fn apply_transfer(e: Env, admin: Address) -> Address {
        Governance::new(&e).apply_transfer_owner_winner(&admin).1
    }

    pub fn revert_transfer(e: Env, admin: Address) {
        Governance::new(&e).revert_transfer_owner_winner(&admin);
    }

    pub fn set_pay_token(e: Env, admin: Address, pay_token: Option<Address>) {
        let tokens: Vec<Address> = e.storage().instance().get(&TOKENS).unwrap();
        Governance::new(&e).set_pay_token(&admin, &tokens, &pay_token);
    }

    pub fn fee_for(e: Env, caller: Address, from_hint: Option<Address>) -> u64 {
        Governance::new(&e).fee_for(&caller, &from_hint)
    }

    pub fn fee_whitelist(e: Env, addr: Address) -> Bytes {
        Governance::new(&e).fee_whitelist(&addr)
    }

    pub fn fees(e: Env) -> (u64, u64, u64) {
        (storage::get_fee(&e), storage::get_admin_fee(&e), storage::get_winner_fee(&e))
    }

    pub fn future_fees(e: Env) -> (u64, u64, u64, u64) {
        (
            storage::get_future_fee(&e),
            storage::get_future_admin_fee(&e),
            storage::get_future_winner_fee(&e),
            storage::get_admin_actions_deadline(&e),
        )
    }

    pub fn owner_winner(e: Env) -> (Address, Address, u64) {
        (
            storage::get_owner(&e),
            storage::get_winner(&e),
            storage::get_transfer_owner_winner_deadline(&e),
        )
    }

    pub fn whitelist(e: Env) -> (Option<Address>, u32, u64) {
        (
            storage::get_whitelist(&e),
            storage::get_group_id(&e),
            storage::get_whitelist_deadline(&e),
        )
    }

    pub fn pay_token(e: Env) -> Option<Address> {
        storage::get_pay_token(&e)
    }
}

const HAS_LIQUIDITY: u32 = 0;
const TOKENS: u32 = 1;

mod mock_whitelist {
    use crate::whitelist::encode_fee;
    use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

    #[contract]
    pub struct MockWhitelist;

    #[contractimpl]
    impl MockWhitelist {
        pub fn set(e: Env, group_id: u32, addr: Address, fee: u64) {
            e.storage().instance().set(&(group_id, addr), &fee);
        }

        pub fn fee_whitelist(e: Env, group_id: u32, addr: Address) -> Bytes {
            match e.storage().instance().get::<_, u64>(&(group_id, addr)) {
                Some(fee) => encode_fee(&e, fee),
                None => Bytes::new(&e),
            }
        }
    }
}
use mock_whitelist::{MockWhitelist, MockWhitelistClient};

struct Setup<'a> {
    env: Env,
    pool: GovernedPoolClient<'a>,
    owner: Address,
    winner: Address,
    tokens: Vec<Address>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        jump(&env, 1_000);

        let owner = Address::generate(&env);
        let winner = Address::generate(&env);
        let tokens = vec![&env, Address::generate(&env), Address::generate(&env)];
        let params = PoolParams {
            owner: owner.clone(),
            winner: winner.clone(),
            fee: 30_000_000,
            admin_fee: 0,
            winner_fee: 0,
            whitelist: None,
            group_id: 0,
        };
        let pool = GovernedPoolClient::new(
            &env,
            &env.register(GovernedPool, (params, tokens.clone(), None::<Address>)),
        );
        pool.set_has_liquidity(&true);

        Setup {
            env,
            pool,
            owner,
            winner,
            tokens,
        }
    }
}

#[test]
fn test_fee_commit_apply() {
    let setup = Setup::default();
    let delay = 3 * MIN_RAMP_TIME;

    setup.pool.commit_new_fee(&setup.owner, &1234, &3456, &67890, &delay);
    assert_eq!(setup.pool.future_fees(), (1234, 3456, 67890, 1_000 + delay));
    assert_eq!(setup.pool.fees(), (30_000_000, 0, 0));

    jump(&setup.env, delay - 5);
    assert!(setup.pool.try_apply_new_fee(&setup.owner).is_err());

    jump(&setup.env, 5);
    setup.pool.apply_new_fee(&setup.owner);
    assert_eq!(setup.pool.fees(), (1234, 3456, 67890));
    assert_eq!(setup.pool.future_fees(), (0, 0, 0, 0));
}

#[test]
#[should_panic(expected = "Error(Contract, #2104)")]
fn test_fee_apply_too_early() {
    let setup = Setup::default();
    setup.pool.commit_new_fee(&setup.owner, &1234, &3456, &67890, &MIN_RAMP_TIME);
    jump(&setup.env, MIN_RAMP_TIME - 1);
    setup.pool.apply_new_fee(&setup.owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #2103)")]
fn test_fee_commit_twice() {
    let setup = Setup::default();
    setup.pool.commit_new_fee(&setup.owner, &1, &2, &3, &MIN_RAMP_TIME);
    setup.pool.commit_new_fee(&setup.owner, &1, &2, &3, &MIN_RAMP_TIME);
}

#[test]
#[should_panic(expected = "Error(Contract, #2106)")]
fn test_fee_apply_without_commit() {
    let setup = Setup::default();
    setup.pool.apply_new_fee(&setup.owner);
}

#[test]
fn test_fee_delay_bound() {
    let setup = Setup::default();
    assert!(setup
        .pool
        .try_commit_new_fee(&setup.owner, &1, &2, &3, &(MIN_RAMP_TIME - 1))
        .is_err());

    // an empty pool accepts a short delay
    setup.pool.set_has_liquidity(&false);
    setup.pool.commit_new_fee(&setup.owner, &1, &2, &3, &10);
    jump(&setup.env, 10);
    setup.pool.apply_new_fee(&setup.owner);
    assert_eq!(setup.pool.fees(), (1, 2, 3));
}

#[test]
fn test_fee_caps() {
    let setup = Setup::default();
    let too_big_fee = setup
        .pool
        .try_commit_new_fee(&setup.owner, &(MAX_FEE + 1), &0, &0, &MIN_RAMP_TIME);
    assert!(too_big_fee.is_err());
    let too_big_admin_fee = setup.pool.try_commit_new_fee(
        &setup.owner,
        &0,
        &10_000_000_001,
        &0,
        &MIN_RAMP_TIME,
    );
    assert!(too_big_admin_fee.is_err());
    let too_big_winner_fee = setup.pool.try_commit_new_fee(
        &setup.owner,
        &0,
        &0,
        &10_000_000_001,
        &MIN_RAMP_TIME,
    );
    assert!(too_big_winner_fee.is_err());
    setup
        .pool
        .commit_new_fee(&setup.owner, &MAX_FEE, &10_000_000_000, &10_000_000_000, &MIN_RAMP_TIME);
}

#[test]
#[should_panic(expected = "Error(Contract, #2107)")]
fn test_fee_cap_error_kind() {
    let setup = Setup::default();
    setup
        .pool
        .commit_new_fee(&setup.owner, &(MAX_FEE + 1), &0, &0, &MIN_RAMP_TIME);
}

#[test]
fn test_fee_revert() {
    let setup = Setup::default();
    setup.pool.commit_new_fee(&setup.owner, &1, &2, &3, &MIN_RAMP_TIME);
    setup.pool.revert_new_fee(&setup.owner);
    assert_eq!(setup.pool.future_fees(), (0, 0, 0, 0));

    // a new commit is accepted once reverted
    setup.pool.commit_new_fee(&setup.owner, &4, &5, &6, &MIN_RAMP_TIME);
    assert_eq!(setup.pool.future_fees(), (4, 5, 6, 1_000 + MIN_RAMP_TIME));
}

#[test]
#[should_panic(expected = "Error(Contract, #2101)")]
fn test_fee_commit_not_owner() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.pool.commit_new_fee(&stranger, &1, &2, &3, &MIN_RAMP_TIME);
}

#[test]
fn test_transfer_owner_winner() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    let new_winner = Address::generate(&setup.env);

    setup
        .pool
        .commit_transfer(&setup.owner, &new_owner, &new_winner, &MIN_RAMP_TIME);
    assert!(setup
        .pool
        .try_commit_transfer(&setup.owner, &new_owner, &new_winner, &MIN_RAMP_TIME)
        .is_err());
    assert!(setup.pool.try_apply_transfer(&setup.owner).is_err());

    jump(&setup.env, MIN_RAMP_TIME);
    assert_eq!(setup.pool.apply_transfer(&setup.owner), new_owner);
    assert_eq!(setup.pool.owner_winner(), (new_owner.clone(), new_winner, 0));

    // the previous owner lost its rights
    assert!(setup
        .pool
        .try_commit_new_fee(&setup.owner, &1, &2, &3, &MIN_RAMP_TIME)
        .is_err());
    setup.pool.commit_new_fee(&new_owner, &1, &2, &3, &MIN_RAMP_TIME);
}

#[test]
#[should_panic(expected = "Error(Contract, #2102)")]
fn test_transfer_commit_twice() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .pool
        .commit_transfer(&setup.owner, &new_owner, &setup.winner, &MIN_RAMP_TIME);
    setup
        .pool
        .commit_transfer(&setup.owner, &new_owner, &setup.winner, &MIN_RAMP_TIME);
}

#[test]
#[should_panic(expected = "Error(Contract, #2104)")]
fn test_transfer_short_delay() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .pool
        .commit_transfer(&setup.owner, &new_owner, &setup.winner, &(MIN_RAMP_TIME - 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #2105)")]
fn test_transfer_apply_without_commit() {
    let setup = Setup::default();
    setup.pool.apply_transfer(&setup.owner);
}

#[test]
fn test_transfer_revert() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .pool
        .commit_transfer(&setup.owner, &new_owner, &setup.winner, &MIN_RAMP_TIME);
    setup.pool.revert_transfer(&setup.owner);
    jump(&setup.env, MIN_RAMP_TIME);
    assert!(setup.pool.try_apply_transfer(&setup.owner).is_err());
    assert_eq!(
        setup.pool.owner_winner(),
        (setup.owner.clone(), setup.winner.clone(), 0)
    );
}

#[test]
fn test_whitelist_fee_for() {
    let setup = Setup::default();
    let env = &setup.env;
    let registry = MockWhitelistClient::new(env, &env.register(MockWhitelist, ()));
    let vip = Address::generate(env);
    let router = Address::generate(env);
    let user = Address::generate(env);
    registry.set(&7, &vip, &1_000_000);
    registry.set(&8, &user, &5);

    assert_eq!(setup.pool.fee_whitelist(&vip).len(), 0);
    assert_eq!(setup.pool.fee_for(&vip, &None), 30_000_000);

    setup
        .pool
        .commit_new_whitelist(&setup.owner, &Some(registry.address.clone()), &7, &100);
    assert_eq!(setup.pool.fee_for(&vip, &None), 30_000_000);
    jump(env, 100);
    setup.pool.apply_new_whitelist(&setup.owner);
    assert_eq!(setup.pool.whitelist(), (Some(registry.address.clone()), 7, 0));

    assert_eq!(decode_fee(&setup.pool.fee_whitelist(&vip)), Some(1_000_000));
    assert_eq!(setup.pool.fee_for(&vip, &None), 1_000_000);
    assert_eq!(setup.pool.fee_for(&router, &Some(vip.clone())), 1_000_000);
    assert_eq!(setup.pool.fee_for(&router, &None), 30_000_000);
    // user is listed in another group only
    assert_eq!(setup.pool.fee_for(&router, &Some(user)), 30_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2104)")]
fn test_whitelist_zero_delay() {
    let setup = Setup::default();
    setup.pool.commit_new_whitelist(&setup.owner, &None, &1, &0);
}

#[test]
fn test_pay_token() {
    let setup = Setup::default();
    assert_eq!(setup.pool.pay_token(), None);
    let token = setup.tokens.get(1).unwrap();
    setup.pool.set_pay_token(&setup.owner, &Some(token.clone()));
    assert_eq!(setup.pool.pay_token(), Some(token));
    setup.pool.set_pay_token(&setup.owner, &None);
    assert_eq!(setup.pool.pay_token(), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #2007)")]
fn test_pay_token_not_in_pool() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.pool.set_pay_token(&setup.owner, &Some(stranger));
}

#[test]
fn test_fee_encoding() {
    let env = Env::default();
    assert_eq!(decode_fee(&encode_fee(&env, 123_456)), Some(123_456));
    assert_eq!(decode_fee(&Bytes::new(&env)), None);
    assert_eq!(decode_fee(&Bytes::from_array(&env, &[1, 2, 3])), None);
}
