use crate::error::Error;
use crate::storage::{SaleConfig, Storage};
use soroban_sdk::{Address, Env, String};

pub struct Validator;

impl Validator {
    /// Require `caller` to have signed and to be the stored administrator
    pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, Error> {
        caller.require_auth();

        let admin = Storage::admin(env)?;
        if *caller != admin {
            return Err(Error::Unauthorized);
        }

        Ok(admin)
    }

    pub fn validate_unit_price(unit_price: i128) -> Result<(), Error> {
        if unit_price <= 0 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    pub fn validate_base_uri(base_uri: &String) -> Result<(), Error> {
        if base_uri.len() == 0 {
            return Err(Error::EmptyBaseUri);
        }
        Ok(())
    }

    /// Returns the issued count after minting `quantity` more units
    pub fn check_supply(config: &SaleConfig, issued: u32, quantity: u32) -> Result<u32, Error> {
        let next = issued
            .checked_add(quantity)
            .ok_or(Error::InsufficientSupply)?;

        if next > config.supply_limit {
            return Err(Error::InsufficientSupply);
        }

        Ok(next)
    }

    /// Public purchase gating, first failing check wins:
    /// sale active, tx limit, supply, exact payment.
    ///
    /// Returns the issued count after the purchase.
    pub fn check_purchase(
        config: &SaleConfig,
        issued: u32,
        quantity: u32,
        payment: i128,
    ) -> Result<u32, Error> {
        if !config.sale_active {
            return Err(Error::SaleInactive);
        }

        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }

        if quantity > config.tx_limit {
            return Err(Error::TransactionLimitExceeded);
        }

        let next = Self::check_supply(config, issued, quantity)?;

        let cost = config
            .unit_price
            .checked_mul(i128::from(quantity))
            .ok_or(Error::Overflow)?;

        if payment != cost {
            return Err(Error::IncorrectPayment);
        }

        Ok(next)
    }
}
