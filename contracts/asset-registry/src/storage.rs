use soroban_sdk::{Address, Env};

use crate::types::StorageKey;

const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Admin ==========

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Records ==========

pub fn get_record_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::RecordCount)
        .unwrap_or(0)
}

fn increment_record_count(env: &Env) {
    let count = get_record_count(env) + 1;
    env.storage().instance().set(&StorageKey::RecordCount, &count);
}

pub fn get_owner(env: &Env, record_id: u64) -> Option<Address> {
    let key = StorageKey::Owner(record_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

pub fn has_record(env: &Env, record_id: u64) -> bool {
    env.storage().persistent().has(&StorageKey::Owner(record_id))
}

pub fn set_owner(env: &Env, record_id: u64, owner: &Address) {
    let key = StorageKey::Owner(record_id);
    if !env.storage().persistent().has(&key) {
        increment_record_count(env);
    }
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
