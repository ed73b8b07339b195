use soroban_sdk::{contractclient, Address, Env, Vec};

/// Token ledger the sale mints through.
///
/// The sale is expected to be the ledger's only minter, so the ledger's
/// total supply tracks the sale's issued count.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    /// Mint `count` units to `to` and return the newly assigned ids.
    fn mint(env: Env, to: Address, count: u32) -> Vec<u64>;

    fn balance_of(env: Env, owner: Address) -> u32;

    fn total_supply(env: Env) -> u32;
}
