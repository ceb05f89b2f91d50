use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the house is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HouseInitialized {
    #[topic]
    pub admin: Address,
}

/// Event emitted when an auction is listed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub auction_id: u64,
    pub title: String,
    pub starting_price: u128,
    pub reserve_price: u128,
}

/// Event emitted when the seller hands the asset over to the house
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetDeposited {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
}

/// Event emitted when the seller opens an auction for bidding
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionActivated {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: u128,
}
