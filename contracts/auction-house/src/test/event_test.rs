use crate::events::{AuctionActivated, AuctionCreated, BidPlaced};
use crate::test::{set_clock, setup_test};
use crate::Error;
use soroban_sdk::{testutils::Events, vec, Address, Env, Event, String};

/// The last invocation emitted exactly `event`, from `contract`.
fn assert_emitted_only(env: &Env, contract: &Address, event: &impl Event) {
    assert_eq!(
        env.events().all(),
        vec![
            env,
            (contract.clone(), event.topics(env), event.data(env))
        ]
    );
}

fn assert_nothing_emitted(env: &Env) {
    assert!(env.events().all().is_empty());
}

#[test]
fn test_create_auction_emits_auction_created() {
    let s = setup_test();

    let auction_id = s.create_auction(10);

    assert_emitted_only(
        &s.env,
        &s.house,
        &AuctionCreated {
            auction_id,
            title: String::from_str(&s.env, "Genesis piece"),
            starting_price: 100,
            reserve_price: 200,
        },
    );
}

#[test]
fn test_activate_emits_auction_activated() {
    let s = setup_test();
    let auction_id = s.create_auction(10);
    s.deposit_asset(auction_id);

    s.client.activate_auction(&s.seller, &auction_id);

    assert_emitted_only(
        &s.env,
        &s.house,
        &AuctionActivated {
            auction_id,
            seller: s.seller.clone(),
        },
    );
}

#[test]
fn test_accepted_bid_emits_bid_placed() {
    let s = setup_test();
    let auction_id = s.create_active_auction(10);

    assert!(s.client.place_bid(&s.bidder, &auction_id, &150));

    assert_emitted_only(
        &s.env,
        &s.house,
        &BidPlaced {
            auction_id,
            bidder: s.bidder.clone(),
            amount: 150,
        },
    );
}

#[test]
fn test_rejected_bid_emits_nothing() {
    let s = setup_test();
    let auction_id = s.create_active_auction(10);
    assert!(s.client.place_bid(&s.bidder, &auction_id, &150));

    assert!(!s.client.place_bid(&s.bidder, &auction_id, &150));
    assert_nothing_emitted(&s.env);

    assert!(!s.client.place_bid(&s.bidder, &auction_id, &50));
    assert_nothing_emitted(&s.env);
}

#[test]
fn test_bid_on_closed_auction_emits_nothing() {
    let s = setup_test();
    let pending = s.create_auction(10);

    let result = s.client.try_place_bid(&s.bidder, &pending, &150);
    assert_eq!(result, Err(Ok(Error::InvalidState)));
    assert_nothing_emitted(&s.env);

    let s = setup_test();
    let expired = s.create_active_auction(10);
    set_clock(&s.env, 10);

    let result = s.client.try_place_bid(&s.bidder, &expired, &150);
    assert_eq!(result, Err(Ok(Error::InvalidState)));
    assert_nothing_emitted(&s.env);
}

#[test]
fn test_unauthorized_activation_emits_nothing() {
    let s = setup_test();
    let auction_id = s.create_auction(10);
    s.deposit_asset(auction_id);

    let result = s.client.try_activate_auction(&s.bidder, &auction_id);

    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_nothing_emitted(&s.env);
}
