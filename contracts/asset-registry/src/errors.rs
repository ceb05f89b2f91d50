use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 100,
    AlreadyInitialized = 101,
    RecordNotFound = 103,
    RecordAlreadyExists = 104,
    NotOwner = 105,
}
