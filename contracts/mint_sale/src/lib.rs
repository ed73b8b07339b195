#![no_std]

mod error;
mod events;
mod ledger;
mod payout;
mod storage;
mod validation;

pub use error::Error;
use events::*;
pub use ledger::{Ledger, LedgerClient};
pub use payout::{split_withdrawal, WithdrawalSplit, PAYOUT_SHARE_PERCENT};
pub use storage::{
    SaleConfig, DEFAULT_SUPPLY_LIMIT, DEFAULT_TX_LIMIT, DEFAULT_UNIT_PRICE, SCALE,
};
use storage::Storage;
use validation::Validator;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Symbol, Vec};

#[contract]
pub struct MintSale;

#[contractimpl]
impl MintSale {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the sale
    ///
    /// `payout` is fixed for the lifetime of the contract and receives
    /// `PAYOUT_SHARE_PERCENT` of every withdrawal. The sale starts inactive.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidConfig`: unit_price must be positive
    /// - `EmptyBaseUri`: base_uri must not be empty
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        ledger: Address,
        payout: Address,
        base_uri: String,
        unit_price: i128,
        supply_limit: u32,
        tx_limit: u32,
    ) -> Result<(), Error> {
        if Storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Validator::validate_unit_price(unit_price)?;
        Validator::validate_base_uri(&base_uri)?;

        Storage::set_admin(&env, &admin);
        Storage::set_payment_token(&env, &payment_token);
        Storage::set_ledger(&env, &ledger);
        Storage::set_payout(&env, &payout);
        Storage::set_base_uri(&env, &base_uri);
        Storage::set_sale_config(
            &env,
            &SaleConfig {
                unit_price,
                supply_limit,
                tx_limit,
                sale_active: false,
            },
        );
        Storage::set_issued(&env, 0);
        Storage::set_held_funds(&env, 0);

        Ok(())
    }

    // ============================================
    // CONFIGURATION (ADMIN)
    // ============================================

    /// Replace the base URI used by the metadata resolver
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `EmptyBaseUri`: base_uri must not be empty
    pub fn set_base_uri(env: Env, caller: Address, base_uri: String) -> Result<(), Error> {
        Validator::require_admin(&env, &caller)?;
        Validator::validate_base_uri(&base_uri)?;

        Storage::set_base_uri(&env, &base_uri);

        env.events().publish(
            (Symbol::new(&env, "base_uri_changed"),),
            BaseUriChangedEvent { base_uri },
        );

        Ok(())
    }

    /// Replace the per-transaction and supply limits together
    ///
    /// A supply limit below the current issued count is accepted and simply
    /// blocks any further minting.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn configure_sale(
        env: Env,
        caller: Address,
        tx_limit: u32,
        supply_limit: u32,
    ) -> Result<(), Error> {
        Validator::require_admin(&env, &caller)?;

        let mut config = Storage::sale_config(&env)?;
        config.tx_limit = tx_limit;
        config.supply_limit = supply_limit;
        Storage::set_sale_config(&env, &config);

        env.events().publish(
            (Symbol::new(&env, "sale_configured"),),
            SaleConfiguredEvent {
                tx_limit,
                supply_limit,
            },
        );

        Ok(())
    }

    /// Open or close the public sale
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn set_sale_active(env: Env, caller: Address, active: bool) -> Result<(), Error> {
        Validator::require_admin(&env, &caller)?;

        let mut config = Storage::sale_config(&env)?;
        config.sale_active = active;
        Storage::set_sale_config(&env, &config);

        env.events().publish(
            (Symbol::new(&env, "sale_active_changed"),),
            SaleActiveChangedEvent { active },
        );

        Ok(())
    }

    /// Hand the administrator role to `new_admin`
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        let previous_admin = Validator::require_admin(&env, &caller)?;

        Storage::set_admin(&env, &new_admin);

        env.events().publish(
            (Symbol::new(&env, "admin_transferred"),),
            AdminTransferredEvent {
                previous_admin,
                new_admin,
            },
        );

        Ok(())
    }

    // ============================================
    // PUBLIC PURCHASE
    // ============================================

    /// Buy `quantity` units for exactly `unit_price * quantity`
    ///
    /// `payment` is pulled from `buyer` in the payment token and held by
    /// the contract until withdrawn. Returns the minted token ids.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `SaleInactive`: Public sale is off
    /// - `InvalidQuantity`: quantity == 0
    /// - `TransactionLimitExceeded`: quantity > tx_limit
    /// - `InsufficientSupply`: Would exceed supply_limit
    /// - `IncorrectPayment`: payment != unit_price * quantity
    pub fn buy(env: Env, buyer: Address, quantity: u32, payment: i128) -> Result<Vec<u64>, Error> {
        buyer.require_auth();

        let config = Storage::sale_config(&env)?;
        let issued_before = Storage::issued(&env);
        let issued = Validator::check_purchase(&config, issued_before, quantity, payment)?;

        let held = Storage::held_funds(&env)
            .checked_add(payment)
            .ok_or(Error::Overflow)?;

        // Commit counters before any outside call
        Storage::set_issued(&env, issued);
        Storage::set_held_funds(&env, held);

        let payment_client = token::Client::new(&env, &Storage::payment_token(&env)?);
        payment_client.transfer(&buyer, &env.current_contract_address(), &payment);

        let token_ids = Self::mint_units(&env, &buyer, issued_before, quantity)?;

        env.events().publish(
            (Symbol::new(&env, "purchased"), buyer.clone()),
            PurchasedEvent {
                buyer,
                quantity,
                payment,
                first_token_id: token_ids.first().unwrap_or(0),
                total_supply: issued,
            },
        );

        Ok(token_ids)
    }

    // ============================================
    // RESERVATION (ADMIN)
    // ============================================

    /// Mint `quantity` units to `recipient` without payment
    ///
    /// Ignores the sale gate and the per-transaction limit; only the supply
    /// limit applies. Returns the minted token ids.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidQuantity`: quantity == 0
    /// - `InsufficientSupply`: Would exceed supply_limit
    pub fn reserve(
        env: Env,
        caller: Address,
        recipient: Address,
        quantity: u32,
    ) -> Result<Vec<u64>, Error> {
        Validator::require_admin(&env, &caller)?;

        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }

        let config = Storage::sale_config(&env)?;
        let issued_before = Storage::issued(&env);
        let issued = Validator::check_supply(&config, issued_before, quantity)?;
        Storage::set_issued(&env, issued);

        let token_ids = Self::mint_units(&env, &recipient, issued_before, quantity)?;

        env.events().publish(
            (Symbol::new(&env, "reserved"), recipient.clone()),
            ReservedEvent {
                recipient,
                quantity,
                first_token_id: token_ids.first().unwrap_or(0),
                total_supply: issued,
            },
        );

        Ok(token_ids)
    }

    // ============================================
    // WITHDRAWAL (ADMIN)
    // ============================================

    /// Pay out the full held balance: 8% to the payout address, the rest
    /// to the administrator
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `NoBalance`: Nothing to withdraw
    pub fn withdraw(env: Env, caller: Address) -> Result<WithdrawalSplit, Error> {
        let admin = Validator::require_admin(&env, &caller)?;

        let held = Storage::held_funds(&env);
        if held <= 0 {
            return Err(Error::NoBalance);
        }

        let split = split_withdrawal(held).ok_or(Error::Overflow)?;

        // Zeroed before transferring; a failed transfer reverts this too
        Storage::set_held_funds(&env, 0);

        let payout = Storage::payout(&env)?;
        let payment_client = token::Client::new(&env, &Storage::payment_token(&env)?);
        let contract = env.current_contract_address();

        if split.payout_share > 0 {
            payment_client.transfer(&contract, &payout, &split.payout_share);
        }
        payment_client.transfer(&contract, &admin, &split.admin_share);

        env.events().publish(
            (Symbol::new(&env, "withdrawn"),),
            WithdrawnEvent {
                admin,
                admin_share: split.admin_share,
                payout,
                payout_share: split.payout_share,
            },
        );

        Ok(split)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn admin(env: Env) -> Result<Address, Error> {
        Storage::admin(&env)
    }

    pub fn is_admin(env: Env, address: Address) -> bool {
        Storage::admin(&env).is_ok_and(|admin| admin == address)
    }

    pub fn sale_config(env: Env) -> Result<SaleConfig, Error> {
        Storage::sale_config(&env)
    }

    pub fn unit_price(env: Env) -> Result<i128, Error> {
        Ok(Storage::sale_config(&env)?.unit_price)
    }

    pub fn sale_active(env: Env) -> Result<bool, Error> {
        Ok(Storage::sale_config(&env)?.sale_active)
    }

    pub fn base_uri(env: Env) -> Result<String, Error> {
        Storage::base_uri(&env)
    }

    /// Units minted so far through this sale
    pub fn total_supply(env: Env) -> u32 {
        Storage::issued(&env)
    }

    /// Funds collected from purchases and not yet withdrawn
    pub fn held_funds(env: Env) -> i128 {
        Storage::held_funds(&env)
    }

    pub fn payout_address(env: Env) -> Result<Address, Error> {
        Storage::payout(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Storage::payment_token(&env)
    }

    pub fn ledger(env: Env) -> Result<Address, Error> {
        Storage::ledger(&env)
    }

    /// Units held by `owner`, as recorded by the ledger
    pub fn balance_of(env: Env, owner: Address) -> Result<u32, Error> {
        let ledger = LedgerClient::new(&env, &Storage::ledger(&env)?);
        Ok(ledger.balance_of(&owner))
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    /// Mint through the ledger, refusing if anything else has minted there
    fn mint_units(
        env: &Env,
        to: &Address,
        issued_before: u32,
        quantity: u32,
    ) -> Result<Vec<u64>, Error> {
        let ledger = LedgerClient::new(env, &Storage::ledger(env)?);

        // The supply check above only holds if the ledger agrees on what exists
        if ledger.total_supply() != issued_before {
            return Err(Error::LedgerMismatch);
        }

        let token_ids = ledger.mint(to, &quantity);

        if token_ids.len() != quantity
            || token_ids.first() != Some(u64::from(issued_before) + 1)
        {
            return Err(Error::LedgerMismatch);
        }

        Ok(token_ids)
    }
}
