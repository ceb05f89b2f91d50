//! Client side of the asset contract. Any contract exposing
//! `owner_of(record_id) -> Address` and
//! `transfer(from, to, record_id)` can back an auction.

use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;
use crate::types::AssetLocation;

#[allow(dead_code)]
#[contractclient(name = "AssetOwnershipClient")]
pub trait AssetOwnership {
    fn owner_of(env: Env, record_id: u64) -> Address;
    fn transfer(env: Env, from: Address, to: Address, record_id: u64);
}

/// Ask the asset contract who owns the record. A trapped or failing lookup
/// counts as an unconfirmed owner.
pub fn owner_of(env: &Env, asset: &AssetLocation) -> Result<Address, Error> {
    let client = AssetOwnershipClient::new(env, &asset.contract);
    match client.try_owner_of(&asset.record_id) {
        Ok(Ok(owner)) => Ok(owner),
        _ => Err(Error::OwnershipMismatch),
    }
}

pub fn require_owned_by(env: &Env, asset: &AssetLocation, expected: &Address) -> Result<(), Error> {
    if owner_of(env, asset)? != *expected {
        return Err(Error::OwnershipMismatch);
    }
    Ok(())
}

/// Move the record from `from` into the custody of this contract. The asset
/// contract refuses the move unless `from` currently owns the record.
pub fn take_custody(env: &Env, asset: &AssetLocation, from: &Address) -> Result<(), Error> {
    let client = AssetOwnershipClient::new(env, &asset.contract);
    match client.try_transfer(from, &env.current_contract_address(), &asset.record_id) {
        Ok(Ok(_)) => Ok(()),
        _ => Err(Error::OwnershipMismatch),
    }
}
