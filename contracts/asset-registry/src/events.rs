use soroban_sdk::{contractevent, Address};

/// Event emitted when a new record is minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordMinted {
    #[topic]
    pub record_id: u64,
    pub owner: Address,
}

/// Event emitted when a record changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordTransferred {
    #[topic]
    pub record_id: u64,
    pub from: Address,
    pub to: Address,
}
