use soroban_sdk::{contracttype, Address, String};

/// Number of ledgers in a day (assuming ~5 second ledger close time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound of the distribution cut, in percent
pub const MAX_DISTRIBUTION_CUT: u32 = 100;

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// House configuration (admin)
    Config,
    /// Number of auctions ever created, also the next auction id
    AuctionCount,
    /// Auction data by id
    Auction(u64),
    /// Bids placed on an auction, in arrival order
    Bids(u64),
    /// Auction ids listed by a seller
    SellerAuctions(Address),
    /// Auction ids a bidder has placed accepted bids on
    BidderAuctions(Address),
    /// Auction a deposited asset is held for
    Custody(AssetLocation),
}

/// Lifecycle of an auction. Status only ever moves forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Listed, waiting for the seller to activate it
    Pending = 0,
    /// Accepting bids until the deadline
    Active = 1,
    /// Closed for good
    Inactive = 2,
}


/// Where the auctioned record lives: the asset contract and the record id
/// inside it. Only the asset contract can say who owns it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetLocation {
    pub contract: Address,
    pub record_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HouseConfig {
    pub admin: Address,
    pub initialized_at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub seller: Address,
    pub asset: AssetLocation,
    pub title: String,
    pub description: String,
    /// Ledger sequence at which bidding closes (exclusive)
    pub deadline: u32,
    pub status: AuctionStatus,
    /// Percentage of the proceeds routed to `distribution_address`
    pub distribution_cut: u32,
    pub distribution_address: Address,
    pub starting_price: u128,
    pub reserve_price: u128,
    pub current_bid: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: u128,
    /// Ledger sequence the bid was accepted at
    pub timestamp: u32,
}

/// Read-only view of an auction returned by `get_auction`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSummary {
    pub seller: Address,
    pub asset_contract: Address,
    pub record_id: u64,
    pub title: String,
    pub description: String,
    pub deadline: u32,
    pub distribution_cut: u32,
    pub distribution_address: Address,
    pub starting_price: u128,
    pub reserve_price: u128,
    pub current_bid: u128,
    pub bid_count: u32,
}
