#![no_std]

//! Asset Registry Contract
//!
//! Keeps the owner of every non-fungible record it has minted and answers
//! `owner_of` queries for marketplaces that list those records. Holders move
//! records between addresses with `transfer`, which is how a seller hands a
//! record over to an auction house before activating an auction.

use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
use events::{RecordMinted, RecordTransferred};

#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Mint a new record to `owner` (admin only)
    pub fn mint(env: Env, record_id: u64, owner: Address) -> Result<(), Error> {
        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if storage::has_record(&env, record_id) {
            return Err(Error::RecordAlreadyExists);
        }

        storage::set_owner(&env, record_id, &owner);
        log!(&env, "record minted", record_id, owner);

        RecordMinted { record_id, owner }.publish(&env);
        Ok(())
    }

    /// Move a record from its current owner to `to`
    pub fn transfer(env: Env, from: Address, to: Address, record_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner = storage::get_owner(&env, record_id).ok_or(Error::RecordNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        storage::set_owner(&env, record_id, &to);

        RecordTransferred {
            record_id,
            from,
            to,
        }
        .publish(&env);
        Ok(())
    }

    pub fn owner_of(env: Env, record_id: u64) -> Result<Address, Error> {
        storage::get_owner(&env, record_id).ok_or(Error::RecordNotFound)
    }

    pub fn exists(env: Env, record_id: u64) -> bool {
        storage::has_record(&env, record_id)
    }

    pub fn record_count(env: Env) -> u64 {
        storage::get_record_count(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }
}
