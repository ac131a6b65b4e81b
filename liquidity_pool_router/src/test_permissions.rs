#![cfg(test)]

use crate::testutils::create_router;
use crate::LiquidityPoolRouterClient;
use soroban_liquidity_pool_contract::testutils::{create_uni_pool, pool_params};
use soroban_liquidity_pool_factory_contract::testutils::create_factory;
use soroban_liquidity_pool_stableswap_contract::testutils::create_stable_pool;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, Vec};
use soroban_token_contract::testutils::create_token;

const E: i128 = 1_000_000_000_000_000_000;

struct Setup<'a> {
    env: Env,
    user: Address,
    tokens: [TokenClient<'a>; 3],
    router: LiquidityPoolRouterClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let user = Address::generate(&env);
        let admin = Address::generate(&env);
        let tokens = [0, 1, 2].map(|_| {
            let token = create_token(&env, &admin, 18);
            token.mint(&user, &(10_000_000 * E));
            TokenClient::new(&env, &token.address)
        });
        let factory = create_factory(
            &env,
            &owner,
            &BytesN::from_array(&env, &[1; 32]),
            &BytesN::from_array(&env, &[2; 32]),
        );
        let router = create_router(&env, &factory.address);
        let params = pool_params(&owner, &owner, 30_000_000);

        let uni = create_uni_pool(
            &env,
            &vec![&env, tokens[0].address.clone(), tokens[1].address.clone()],
            &None,
            &params,
        );
        factory.add_custom_pair(&owner, &uni.address);
        router.uni_add_liquidity(
            &user,
            &tokens[0].address,
            &tokens[1].address,
            &(500_000 * E),
            &(1_000_000 * E),
            &0,
            &0,
        );

        let stable = create_stable_pool(
            &env,
            &vec![&env, tokens[1].address.clone(), tokens[2].address.clone()],
            &None,
            &params,
            720,
        );
        factory.add_custom_pair(&owner, &stable.address);
        stable.add_liquidity(&user, &vec![&env, 1_000_000 * E, 1_000_000 * E], &0);

        Setup {
            env,
            user,
            tokens,
            router,
        }
    }
}

impl Setup<'_> {
    fn path(&self) -> Vec<Address> {
        vec![
            &self.env,
            self.tokens[0].address.clone(),
            self.tokens[1].address.clone(),
            self.tokens[2].address.clone(),
        ]
    }
}

#[test]
fn test_swap_with_user_auth_only() {
    let setup = Setup::default();
    let e = &setup.env;
    let path = setup.path();

    let out = setup
        .router
        .mock_auths(&[MockAuth {
            address: &setup.user,
            invoke: &MockAuthInvoke {
                contract: &setup.router.address,
                fn_name: "swap_exact_tokens_for_tokens",
                args: (setup.user.clone(), E, 0_i128, path.clone()).into_val(e),
                sub_invokes: &[MockAuthInvoke {
                    contract: &setup.tokens[0].address,
                    fn_name: "transfer",
                    args: (setup.user.clone(), setup.router.address.clone(), E).into_val(e),
                    sub_invokes: &[],
                }],
            },
        }])
        .swap_exact_tokens_for_tokens(&setup.user, &E, &0, &path);
    assert_eq!(out.get_unchecked(2), 1988014030401965157);
    assert_eq!(setup.tokens[1].balance(&setup.router.address), 0);
}

#[test]
fn test_swap_requires_user_auth() {
    let setup = Setup::default();
    setup.env.mock_auths(&[]);
    assert!(setup
        .router
        .try_swap_exact_tokens_for_tokens(&setup.user, &E, &0, &setup.path())
        .is_err());
}

#[test]
fn test_add_liquidity_requires_user_auth() {
    let setup = Setup::default();
    setup.env.mock_auths(&[]);
    assert!(setup
        .router
        .try_uni_add_liquidity(
            &setup.user,
            &setup.tokens[0].address,
            &setup.tokens[1].address,
            &E,
            &(2 * E),
            &0,
            &0,
        )
        .is_err());
}

#[test]
fn test_remove_liquidity_requires_user_auth() {
    let setup = Setup::default();
    setup.env.mock_auths(&[]);
    assert!(setup
        .router
        .try_uni_remove_liquidity(
            &setup.user,
            &setup.tokens[0].address,
            &setup.tokens[1].address,
            &E,
            &0,
            &0,
        )
        .is_err());
}
