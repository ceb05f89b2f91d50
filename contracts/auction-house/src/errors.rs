use soroban_sdk::contracterror;

/// Error codes for the auction house contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the admin or not the seller
    Unauthorized = 1,
    /// Auction is not in the status the operation needs, or is past its deadline
    InvalidState = 2,
    /// Deadline not in the future or distribution cut above 100
    ValidationError = 3,
    /// Asset contract did not confirm the expected owner
    OwnershipMismatch = 4,
    /// Auction id or bid index out of range
    NotFound = 5,
    /// Contract has not been initialized
    NotInitialized = 6,
    /// Contract has already been initialized
    AlreadyInitialized = 7,
    /// Operation is declared but not available yet
    NotSupported = 8,
}
