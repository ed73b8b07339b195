use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    MinterNotSet = 4,

    // Mint / lookup errors
    InvalidAmount = 5,
    TokenNotFound = 6,
    Overflow = 7,
}
