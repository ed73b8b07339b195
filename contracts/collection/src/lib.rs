#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
use events::{MintEvent, MinterChangedEvent};
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

/// Ledger of sequentially numbered, uniquely owned units.
///
/// Only the registered minter contract may create units. Ids start at 1 and
/// are never reused.
#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    /// Initialize the collection
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if Storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Storage::set_admin(&env, &admin);
        Storage::set_total_supply(&env, 0);

        Ok(())
    }

    /// Register the contract allowed to mint (usually the sale contract)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_minter(env: Env, minter: Address) -> Result<(), Error> {
        let admin = Storage::admin(&env)?;
        admin.require_auth();

        Storage::set_minter(&env, &minter);

        env.events().publish(
            (Symbol::new(&env, "minter_changed"),),
            MinterChangedEvent { minter },
        );

        Ok(())
    }

    /// Mint `count` new units to `to`, returning their ids
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `MinterNotSet`: No minter registered yet
    /// - `InvalidAmount`: count == 0
    /// - `Overflow`: Id space or balance exhausted
    pub fn mint(env: Env, to: Address, count: u32) -> Result<Vec<u64>, Error> {
        if !Storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }

        let minter = Storage::minter(&env).ok_or(Error::MinterNotSet)?;
        minter.require_auth();

        if count == 0 {
            return Err(Error::InvalidAmount);
        }

        let total = Storage::total_supply(&env);
        let new_total = total.checked_add(count).ok_or(Error::Overflow)?;
        let new_balance = Storage::balance(&env, &to)
            .checked_add(count)
            .ok_or(Error::Overflow)?;

        let first_token_id = u64::from(total) + 1;
        let mut token_ids = Vec::new(&env);
        for token_id in first_token_id..=u64::from(new_total) {
            token_ids.push_back(token_id);
        }

        // Ids only grow, so appending keeps the starts sorted
        let mut batch_starts = Storage::batch_starts(&env);
        batch_starts.push_back(first_token_id);

        Storage::set_batch_starts(&env, &batch_starts);
        Storage::set_batch_owner(&env, first_token_id, &to);
        Storage::set_balance(&env, &to, new_balance);
        Storage::set_total_supply(&env, new_total);

        env.events().publish(
            (Symbol::new(&env, "mint"), to.clone()),
            MintEvent {
                to,
                first_token_id,
                count,
            },
        );

        Ok(token_ids)
    }

    /// Number of units held by `owner`
    pub fn balance_of(env: Env, owner: Address) -> u32 {
        Storage::balance(&env, &owner)
    }

    /// Owner of `token_id`
    ///
    /// # Errors
    /// - `TokenNotFound`: Id was never minted
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        let total = u64::from(Storage::total_supply(&env));
        if token_id == 0 || token_id > total {
            return Err(Error::TokenNotFound);
        }

        // Find the last batch starting at or before this id.
        let batch_starts = Storage::batch_starts(&env);
        let index = match batch_starts.binary_search(token_id) {
            Ok(index) => index,
            Err(0) => return Err(Error::TokenNotFound),
            Err(insert_at) => insert_at - 1,
        };

        let first_token_id = batch_starts.get(index).ok_or(Error::TokenNotFound)?;
        Storage::batch_owner(&env, first_token_id).ok_or(Error::TokenNotFound)
    }

    /// Total units minted so far
    pub fn total_supply(env: Env) -> u32 {
        Storage::total_supply(&env)
    }

    pub fn minter(env: Env) -> Option<Address> {
        Storage::minter(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        Storage::admin(&env)
    }
}
