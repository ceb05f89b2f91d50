//! Auction registry: every auction ever listed, keyed by sequential id, plus
//! per-seller and per-bidder indexes. Entries are append-only.

use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::errors::Error;
use crate::types::{
    AssetLocation, Auction, Bid, HouseConfig, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ========== Config ==========

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<HouseConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &HouseConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn read_persistent<V>(env: &Env, key: &StorageKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &StorageKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Auctions ==========

/// Number of auctions ever created. Ids run from `0` to `count() - 1`.
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCount)
        .unwrap_or(0)
}

/// Store a freshly built auction under the next id and index it by seller.
/// The id carried by `auction` is overwritten.
pub fn create(env: &Env, mut auction: Auction) -> u64 {
    let auction_id = count(env);
    auction.auction_id = auction_id;

    write_persistent(env, &StorageKey::Auction(auction_id), &auction);
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCount, &(auction_id + 1));
    push_index(env, StorageKey::SellerAuctions(auction.seller.clone()), auction_id);

    auction_id
}

pub fn get(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    if auction_id >= count(env) {
        return Err(Error::NotFound);
    }
    read_persistent(env, &StorageKey::Auction(auction_id)).ok_or(Error::NotFound)
}

/// Persist a state transition of an existing auction
pub fn save(env: &Env, auction: &Auction) {
    write_persistent(env, &StorageKey::Auction(auction.auction_id), auction);
}

// ========== Bids ==========

pub fn bids(env: &Env, auction_id: u64) -> Vec<Bid> {
    read_persistent(env, &StorageKey::Bids(auction_id)).unwrap_or(Vec::new(env))
}

pub fn push_bid(env: &Env, auction_id: u64, bid: Bid) {
    let mut history = bids(env, auction_id);
    history.push_back(bid);
    write_persistent(env, &StorageKey::Bids(auction_id), &history);
}

// ========== Custody ==========

/// Auction the house holds `asset` for, if it was deposited through the house
pub fn custody_of(env: &Env, asset: &AssetLocation) -> Option<u64> {
    read_persistent(env, &StorageKey::Custody(asset.clone()))
}

pub fn set_custody(env: &Env, asset: &AssetLocation, auction_id: u64) {
    write_persistent(env, &StorageKey::Custody(asset.clone()), &auction_id);
}

// ========== Indexes ==========

pub fn list_by_seller(env: &Env, seller: &Address) -> Vec<u64> {
    read_index(env, &StorageKey::SellerAuctions(seller.clone()))
}

pub fn list_by_bidder(env: &Env, bidder: &Address) -> Vec<u64> {
    read_index(env, &StorageKey::BidderAuctions(bidder.clone()))
}

/// Record that `bidder` had a bid accepted on `auction_id`. Repeated bids on
/// the same auction are recorded once per bid.
pub fn record_bidder(env: &Env, bidder: &Address, auction_id: u64) {
    push_index(env, StorageKey::BidderAuctions(bidder.clone()), auction_id);
}

fn read_index(env: &Env, key: &StorageKey) -> Vec<u64> {
    read_persistent(env, key).unwrap_or(Vec::new(env))
}

fn push_index(env: &Env, key: StorageKey, auction_id: u64) {
    let mut ids = read_index(env, &key);
    ids.push_back(auction_id);
    write_persistent(env, &key, &ids);
}
