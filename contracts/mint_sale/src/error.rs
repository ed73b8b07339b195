use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the administrator
    Unauthorized = 10,

    // ============================================
    // SALE GATING ERRORS (20-29)
    // ============================================
    /// Public sale is switched off
    SaleInactive = 20,
    /// Quantity must be at least one
    InvalidQuantity = 21,
    /// Quantity exceeds the per-transaction limit
    TransactionLimitExceeded = 22,

    // ============================================
    // SUPPLY ERRORS (30-39)
    // ============================================
    /// Not enough units left under the supply limit
    InsufficientSupply = 30,

    // ============================================
    // PAYMENT ERRORS (40-49)
    // ============================================
    /// Payment is not exactly unit_price * quantity
    IncorrectPayment = 40,

    // ============================================
    // WITHDRAWAL ERRORS (50-59)
    // ============================================
    /// No funds held by the contract
    NoBalance = 50,

    // ============================================
    // CONFIGURATION ERRORS (60-69)
    // ============================================
    /// Unit price must be positive
    InvalidConfig = 60,
    /// Base URI must not be empty
    EmptyBaseUri = 61,

    // ============================================
    // OPERATIONAL ERRORS (70-79)
    // ============================================
    /// Arithmetic overflow
    Overflow = 70,
    /// Ledger supply or returned ids disagree with the sale's issued count
    LedgerMismatch = 71,
}
