use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env, String};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const DEFAULT_UNIT_PRICE: i128 = 45 * SCALE / 1000; // 0.045
pub const DEFAULT_SUPPLY_LIMIT: u32 = 10_000;
pub const DEFAULT_TX_LIMIT: u32 = 10;

/// Sale parameters shared by every minting path
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Price of one unit in payment-token base units (fixed at deployment)
    pub unit_price: i128,
    /// Maximum units that may ever be minted
    pub supply_limit: u32,
    /// Maximum units per public purchase
    pub tx_limit: u32,
    /// Gate for the public purchase path
    pub sale_active: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PaymentToken,
    Ledger,
    Payout, // receives the fixed share on withdrawal
    BaseUri,
    Config,
    Issued,
    HeldFunds,
}

pub struct Storage;

impl Storage {
    // Admin
    pub fn has_admin(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    pub fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    // Collaborating contracts
    pub fn payment_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_payment_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::PaymentToken, token);
    }

    pub fn ledger(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Ledger)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_ledger(env: &Env, ledger: &Address) {
        env.storage().instance().set(&DataKey::Ledger, ledger);
    }

    pub fn payout(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Payout)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_payout(env: &Env, payout: &Address) {
        env.storage().instance().set(&DataKey::Payout, payout);
    }

    pub fn base_uri(env: &Env) -> Result<String, Error> {
        env.storage()
            .instance()
            .get(&DataKey::BaseUri)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_base_uri(env: &Env, base_uri: &String) {
        env.storage().instance().set(&DataKey::BaseUri, base_uri);
    }

    // Sale state
    pub fn sale_config(env: &Env) -> Result<SaleConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_sale_config(env: &Env, config: &SaleConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn issued(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::Issued).unwrap_or(0)
    }

    pub fn set_issued(env: &Env, issued: u32) {
        env.storage().instance().set(&DataKey::Issued, &issued);
    }

    pub fn held_funds(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::HeldFunds)
            .unwrap_or(0)
    }

    pub fn set_held_funds(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::HeldFunds, &amount);
    }
}
