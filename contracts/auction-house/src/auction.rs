use soroban_sdk::{Address, String};

use crate::access;
use crate::errors::Error;
use crate::types::{
    AssetLocation, Auction, AuctionStatus, AuctionSummary, Bid, MAX_DISTRIBUTION_CUT,
};

impl Auction {
    /// Build a pending auction from listing input, validated against the
    /// current ledger sequence `now`. The id is assigned by the registry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seller: Address,
        asset: AssetLocation,
        title: String,
        description: String,
        deadline: u32,
        starting_price: u128,
        reserve_price: u128,
        distribution_cut: u32,
        distribution_address: Address,
        now: u32,
    ) -> Result<Auction, Error> {
        if deadline <= now {
            return Err(Error::ValidationError);
        }
        if distribution_cut > MAX_DISTRIBUTION_CUT {
            return Err(Error::ValidationError);
        }

        Ok(Auction {
            auction_id: 0,
            seller,
            asset,
            title,
            description,
            deadline,
            status: AuctionStatus::Pending,
            distribution_cut,
            distribution_address,
            starting_price,
            reserve_price,
            current_bid: 0,
        })
    }

    pub fn is_live(&self, now: u32) -> bool {
        self.status == AuctionStatus::Active && now < self.deadline
    }

    /// Pending -> Active.
    pub fn activate(&mut self) -> Result<(), Error> {
        access::require_status(self, AuctionStatus::Pending)?;
        self.status = AuctionStatus::Active;
        Ok(())
    }

    /// Offer `amount` from `bidder` at ledger sequence `now`.
    ///
    /// Fails with `InvalidState` when the auction is not live. Returns
    /// `Ok(None)` and leaves the auction untouched when `amount` is below the
    /// starting price or does not strictly beat the current bid; equal bids
    /// never win. Otherwise raises the current bid and returns the bid to
    /// record.
    pub fn place_bid(&mut self, bidder: &Address, amount: u128, now: u32) -> Result<Option<Bid>, Error> {
        access::require_live(self, now)?;

        if amount < self.starting_price || amount <= self.current_bid {
            return Ok(None);
        }

        self.current_bid = amount;
        Ok(Some(Bid {
            bidder: bidder.clone(),
            amount,
            timestamp: now,
        }))
    }

    pub fn summary(&self, bid_count: u32) -> AuctionSummary {
        AuctionSummary {
            seller: self.seller.clone(),
            asset_contract: self.asset.contract.clone(),
            record_id: self.asset.record_id,
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline,
            distribution_cut: self.distribution_cut,
            distribution_address: self.distribution_address.clone(),
            starting_price: self.starting_price,
            reserve_price: self.reserve_price,
            current_bid: self.current_bid,
            bid_count,
        }
    }
}
