//! Authorization guards. Every guard runs before the calling operation
//! writes anything.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::registry;
use crate::types::{Auction, AuctionStatus, HouseConfig};

pub fn require_initialized(env: &Env) -> Result<HouseConfig, Error> {
    registry::get_config(env).ok_or(Error::NotInitialized)
}

pub fn is_owner(config: &HouseConfig, caller: &Address) -> bool {
    config.admin == *caller
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<HouseConfig, Error> {
    let config = require_initialized(env)?;
    if !is_owner(&config, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

pub fn is_seller(auction: &Auction, caller: &Address) -> bool {
    auction.seller == *caller
}

pub fn require_seller(auction: &Auction, caller: &Address) -> Result<(), Error> {
    if !is_seller(auction, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_status(auction: &Auction, status: AuctionStatus) -> Result<(), Error> {
    if auction.status != status {
        return Err(Error::InvalidState);
    }
    Ok(())
}

/// Bidding is open only while the auction is active and `now` is strictly
/// before the deadline.
pub fn require_live(auction: &Auction, now: u32) -> Result<(), Error> {
    if !auction.is_live(now) {
        return Err(Error::InvalidState);
    }
    Ok(())
}
