#![no_std]

//! Auction House Contract
//!
//! Sellers list non-fungible records held on external asset contracts and
//! bidders compete with strictly increasing bids until a deadline, expressed
//! as a ledger sequence number, passes.
//!
//! An auction is created `Pending` while the seller still owns the record.
//! The seller then deposits the record with `deposit_asset`, which moves it
//! into this contract's custody on the asset contract and ties it to that
//! auction. `activate_auction` checks that custody and opens bidding.

mod access;
mod auction;
mod errors;
mod events;
mod oracle;
mod registry;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use errors::Error;
use events::{AssetDeposited, AuctionActivated, AuctionCreated, BidPlaced, HouseInitialized};
pub use types::{AssetLocation, Auction, AuctionStatus, AuctionSummary, Bid, HouseConfig};

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the house with its administrative identity. The admin
    /// cannot be changed afterwards.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if registry::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = HouseConfig {
            admin: admin.clone(),
            initialized_at: env.ledger().sequence(),
        };
        registry::set_config(&env, &config);
        registry::extend_instance_ttl(&env);

        HouseInitialized { admin }.publish(&env);
        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// List a record for auction. The auction starts `Pending`.
    ///
    /// # Arguments
    /// * `seller` - Current owner of the record, must authorize the call
    /// * `asset` - Asset contract and record id being auctioned
    /// * `deadline` - Ledger sequence at which bidding closes, must be in the future
    /// * `distribution_cut` - Percentage (0..=100) of proceeds routed to `distribution_address`
    ///
    /// # Errors
    /// * `Error::ValidationError` - Deadline not in the future or cut above 100
    /// * `Error::OwnershipMismatch` - Asset contract does not report `seller` as owner
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        env: Env,
        seller: Address,
        title: String,
        description: String,
        asset: AssetLocation,
        deadline: u32,
        starting_price: u128,
        reserve_price: u128,
        distribution_cut: u32,
        distribution_address: Address,
    ) -> Result<u64, Error> {
        seller.require_auth();
        access::require_initialized(&env)?;

        let now = env.ledger().sequence();
        let auction = Auction::new(
            seller.clone(),
            asset,
            title.clone(),
            description,
            deadline,
            starting_price,
            reserve_price,
            distribution_cut,
            distribution_address,
            now,
        )?;
        oracle::require_owned_by(&env, &auction.asset, &seller)?;

        let auction_id = registry::create(&env, auction);
        registry::extend_instance_ttl(&env);
        log!(&env, "auction created", auction_id, seller, deadline);

        AuctionCreated {
            auction_id,
            title,
            starting_price,
            reserve_price,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Hand the auctioned record over to the house (seller only). The asset
    /// contract moves it from the seller to this contract, so the deposit
    /// only succeeds while the seller still owns the record.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction id
    /// * `Error::Unauthorized` - Caller is not the seller
    /// * `Error::InvalidState` - Auction is not pending, or the record is already held for an auction
    /// * `Error::OwnershipMismatch` - Asset contract refused the transfer
    pub fn deposit_asset(env: Env, seller: Address, auction_id: u64) -> Result<(), Error> {
        seller.require_auth();
        access::require_initialized(&env)?;

        let auction = registry::get(&env, auction_id)?;
        access::require_seller(&auction, &seller)?;
        access::require_status(&auction, AuctionStatus::Pending)?;
        if registry::custody_of(&env, &auction.asset).is_some() {
            return Err(Error::InvalidState);
        }

        oracle::take_custody(&env, &auction.asset, &seller)?;
        registry::set_custody(&env, &auction.asset, auction_id);
        registry::extend_instance_ttl(&env);
        log!(&env, "asset deposited", auction_id);

        AssetDeposited { auction_id, seller }.publish(&env);
        Ok(())
    }

    /// Open a pending auction for bidding (seller only). The record must
    /// have been deposited for this auction and still be held by the house.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction id
    /// * `Error::Unauthorized` - Caller is not the seller
    /// * `Error::InvalidState` - Auction is not pending
    /// * `Error::OwnershipMismatch` - Record not deposited for this auction, or no longer held by this contract
    pub fn activate_auction(env: Env, seller: Address, auction_id: u64) -> Result<bool, Error> {
        seller.require_auth();
        access::require_initialized(&env)?;

        let mut auction = registry::get(&env, auction_id)?;
        access::require_seller(&auction, &seller)?;
        access::require_status(&auction, AuctionStatus::Pending)?;
        if registry::custody_of(&env, &auction.asset) != Some(auction_id) {
            return Err(Error::OwnershipMismatch);
        }
        oracle::require_owned_by(&env, &auction.asset, &env.current_contract_address())?;

        auction.activate()?;
        registry::save(&env, &auction);
        registry::extend_instance_ttl(&env);
        log!(&env, "auction activated", auction_id);

        AuctionActivated { auction_id, seller }.publish(&env);
        Ok(true)
    }

    /// Bid `amount` on a live auction.
    ///
    /// Returns `true` when the bid is recorded and `false` when it does not
    /// strictly beat the current bid, in which case nothing changes.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction id
    /// * `Error::InvalidState` - Auction is not active or its deadline has been reached
    pub fn place_bid(env: Env, bidder: Address, auction_id: u64, amount: u128) -> Result<bool, Error> {
        bidder.require_auth();
        access::require_initialized(&env)?;

        let mut auction = registry::get(&env, auction_id)?;
        let now = env.ledger().sequence();

        let bid = match auction.place_bid(&bidder, amount, now)? {
            Some(bid) => bid,
            None => {
                log!(&env, "bid rejected", auction_id, amount, auction.current_bid);
                return Ok(false);
            }
        };

        registry::push_bid(&env, auction_id, bid);
        registry::save(&env, &auction);
        registry::record_bidder(&env, &bidder, auction_id);
        registry::extend_instance_ttl(&env);

        BidPlaced {
            auction_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(true)
    }

    /// Cancel an auction (seller or admin). Not available yet.
    pub fn cancel_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let config = access::require_initialized(&env)?;

        let auction = registry::get(&env, auction_id)?;
        if !access::is_seller(&auction, &caller) && !access::is_owner(&config, &caller) {
            return Err(Error::Unauthorized);
        }

        Err(Error::NotSupported)
    }

    /// Close an auction past its deadline (admin only). Not available yet.
    pub fn end_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;
        registry::get(&env, auction_id)?;

        Err(Error::NotSupported)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        access::require_initialized(&env).map(|config| config.admin)
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<AuctionSummary, Error> {
        let auction = registry::get(&env, auction_id)?;
        let bid_count = registry::bids(&env, auction_id).len();
        Ok(auction.summary(bid_count))
    }

    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        registry::get(&env, auction_id).map(|auction| auction.status)
    }

    /// Whether bids are currently accepted on the auction
    pub fn is_live(env: Env, auction_id: u64) -> Result<bool, Error> {
        let auction = registry::get(&env, auction_id)?;
        Ok(auction.is_live(env.ledger().sequence()))
    }

    /// Total number of auctions ever created
    pub fn get_auction_count(env: Env) -> u64 {
        registry::count(&env)
    }

    /// Number of auctions listed by `user`
    pub fn get_auctions_count_for_user(env: Env, user: Address) -> u32 {
        registry::list_by_seller(&env, &user).len()
    }

    pub fn get_auction_id_for_user_and_idx(env: Env, user: Address, idx: u32) -> Result<u64, Error> {
        registry::list_by_seller(&env, &user)
            .get(idx)
            .ok_or(Error::NotFound)
    }

    pub fn get_auctions_by_seller(env: Env, user: Address) -> Vec<u64> {
        registry::list_by_seller(&env, &user)
    }

    /// Auction ids `user` had bids accepted on, once per accepted bid
    pub fn get_auctions_by_bidder(env: Env, user: Address) -> Vec<u64> {
        registry::list_by_bidder(&env, &user)
    }

    pub fn get_bidder_auctions_count(env: Env, user: Address) -> u32 {
        registry::list_by_bidder(&env, &user).len()
    }

    pub fn get_bidder_auction_id_by_idx(env: Env, user: Address, idx: u32) -> Result<u64, Error> {
        registry::list_by_bidder(&env, &user)
            .get(idx)
            .ok_or(Error::NotFound)
    }

    pub fn get_bid_count_for_auction(env: Env, auction_id: u64) -> Result<u32, Error> {
        registry::get(&env, auction_id)?;
        Ok(registry::bids(&env, auction_id).len())
    }

    pub fn get_bid_for_auction_by_idx(env: Env, auction_id: u64, idx: u32) -> Result<Bid, Error> {
        registry::get(&env, auction_id)?;
        registry::bids(&env, auction_id)
            .get(idx)
            .ok_or(Error::NotFound)
    }
}

#[cfg(test)]
mod test;
