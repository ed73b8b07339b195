use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Minter,
    TotalSupply,
    Balance(Address),
    BatchOwner(u64), // first token id of a mint batch -> recipient
    BatchStarts,     // ascending first ids of every mint batch
}

pub struct Storage;

impl Storage {
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

    pub fn minter(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }

    pub fn set_minter(env: &Env, minter: &Address) {
        env.storage().instance().set(&DataKey::Minter, minter);
    }

    pub fn total_supply(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(env: &Env, total: u32) {
        env.storage().instance().set(&DataKey::TotalSupply, &total);
    }

    // Per-owner balances
    pub fn balance(env: &Env, owner: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(env: &Env, owner: &Address, balance: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(owner.clone()), &balance);
    }

    // Ownership is recorded once per mint batch, keyed by the batch's first id
    pub fn batch_owner(env: &Env, first_token_id: u64) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::BatchOwner(first_token_id))
    }

    pub fn set_batch_owner(env: &Env, first_token_id: u64, owner: &Address) {
        env.storage()
            .persistent()
            .set(&DataKey::BatchOwner(first_token_id), owner);
    }

    pub fn batch_starts(env: &Env) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::BatchStarts)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn set_batch_starts(env: &Env, starts: &Vec<u64>) {
        env.storage().persistent().set(&DataKey::BatchStarts, starts);
    }
}
