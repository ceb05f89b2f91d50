pub mod event_test;

use crate::{AssetLocation, AuctionHouse, AuctionHouseClient};
use asset_registry::{AssetRegistry, AssetRegistryClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

pub const RECORD_ID: u64 = 1;

pub struct Setup {
    pub env: Env,
    pub client: AuctionHouseClient<'static>,
    pub house: Address,
    pub assets: AssetRegistryClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub bidder: Address,
}

impl Setup {
    pub fn asset(&self) -> AssetLocation {
        AssetLocation {
            contract: self.assets.address.clone(),
            record_id: RECORD_ID,
        }
    }

    /// List `RECORD_ID` with starting price 100, reserve 200 and a 10% cut.
    pub fn create_auction(&self, deadline: u32) -> u64 {
        self.client.create_auction(
            &self.seller,
            &String::from_str(&self.env, "Genesis piece"),
            &String::from_str(&self.env, "First record ever minted"),
            &self.asset(),
            &deadline,
            &100,
            &200,
            &10,
            &self.admin,
        )
    }

    /// Hand the record over to the house for `auction_id`.
    pub fn deposit_asset(&self, auction_id: u64) {
        self.client.deposit_asset(&self.seller, &auction_id);
    }

    pub fn create_active_auction(&self, deadline: u32) -> u64 {
        let auction_id = self.create_auction(deadline);
        self.deposit_asset(auction_id);
        self.client.activate_auction(&self.seller, &auction_id);
        auction_id
    }
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    set_clock(&env, 1);

    let house = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &house);

    let assets_id = env.register(AssetRegistry, ());
    let assets = AssetRegistryClient::new(&env, &assets_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);

    assets.initialize(&admin);
    assets.mint(&RECORD_ID, &seller);
    client.initialize(&admin);

    Setup {
        env,
        client,
        house,
        assets,
        admin,
        seller,
        bidder,
    }
}

/// Move the logical clock (ledger sequence) to `sequence`.
pub fn set_clock(env: &Env, sequence: u32) {
    env.ledger().set_sequence_number(sequence);
}
