use soroban_sdk::contracttype;

/// Storage keys for the asset registry contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    RecordCount,
    Owner(u64),
}
