use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
    generate_persistent_storage_map,
};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolKind {
    Uni = 0,
    Stable = 1,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Owner,
    UniPoolHash,
    StablePoolHash,
    PairsCount,
    Pair(u32),
    PairOf(Address, Address),
    TokenSet(BytesN<32>),
}

generate_instance_storage_getter_and_setter!(owner, DataKey::Owner, Address);
generate_instance_storage_getter_and_setter!(uni_pool_hash, DataKey::UniPoolHash, BytesN<32>);
generate_instance_storage_getter_and_setter!(
    stable_pool_hash,
    DataKey::StablePoolHash,
    BytesN<32>
);
generate_instance_storage_getter_and_setter_with_default!(pairs_count, DataKey::PairsCount, u32, 0);

generate_persistent_storage_map!(pair_at, DataKey::Pair, u32, Address);
generate_persistent_storage_map!(token_set_pool, DataKey::TokenSet, BytesN<32>, Address);

pub fn get_pool_hash(e: &Env, kind: PoolKind) -> BytesN<32> {
    match kind {
        PoolKind::Uni => get_uni_pool_hash(e),
        PoolKind::Stable => get_stable_pool_hash(e),
    }
}

pub fn set_pool_hash(e: &Env, kind: PoolKind, hash: &BytesN<32>) {
    match kind {
        PoolKind::Uni => set_uni_pool_hash(e, hash),
        PoolKind::Stable => set_stable_pool_hash(e, hash),
    }
}

pub fn get_pair_of(e: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    let key = DataKey::PairOf(token_a.clone(), token_b.clone());
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub fn set_pair_of(e: &Env, token_a: &Address, token_b: &Address, pool: &Address) {
    let key = DataKey::PairOf(token_a.clone(), token_b.clone());
    e.storage().persistent().set(&key, pool);
    bump_persistent(e, &key);
}
