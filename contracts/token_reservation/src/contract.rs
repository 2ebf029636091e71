use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::{LedgerEntry, SaleConfig};
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Symbol, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Whitelisted HTKN reservation sale with rate and discount controls"
);

/// HTKN issued per unit of value before rate and discount are applied.
pub const HTKN_PER_ETH: u128 = 10;

/// Hard cap on tokens the sale may ever issue (3B HTKN, 18 decimals).
pub const TOTAL_SUPPLY: u128 = 3_000_000_000_000_000_000_000_000_000;

pub const DEFAULT_MINIMUM_PURCHASE: u128 = 50_000;

const MAX_DISCOUNT_PERCENTAGE: u32 = 30;

#[contract]
pub struct TokenReservationContract;

fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if caller != &owner {
        return Err(Error::Unauthorized);
    }
    Ok(owner)
}

// Operand order matters for rounding: the discount step truncates before
// the rate and value multiplications.
fn token_amount_for(discount: u32, usd_rate: u128, raw_amount: u128) -> Result<u128, Error> {
    let discounted = HTKN_PER_ETH
        .checked_mul(100 + discount as u128)
        .ok_or(Error::AmountOverflow)?
        / 100;
    discounted
        .checked_mul(usd_rate)
        .ok_or(Error::AmountOverflow)?
        .checked_mul(raw_amount)
        .ok_or(Error::AmountOverflow)
}

#[contractimpl]
impl TokenReservationContract {
    /// Set up the sale: owner, payment asset, and the pricing currency for
    /// the purchase path. Seeds the reference USD rates.
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        currency: Symbol,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let config = SaleConfig {
            payment_token: payment_token.clone(),
            currency: currency.clone(),
        };
        storage::set_config(&env, &config);
        storage::set_owner(&env, &owner);
        storage::set_paused(&env, false);
        storage::set_discount_rate(&env, 0);
        storage::set_minimum_purchase(&env, DEFAULT_MINIMUM_PURCHASE);
        storage::set_token_sold(&env, 0);

        storage::set_usd_rate(&env, &symbol_short!("ETH"), 400);
        storage::set_usd_rate(&env, &symbol_short!("BTC"), 11_000);
        storage::set_usd_rate(&env, &symbol_short!("USD"), 1);

        events::initialized(&env, &owner, &payment_token, &currency);
        Ok(())
    }

    /// Mark an address as eligible for the purchase path. Adding an already
    /// whitelisted address is a no-op; the owner is never recorded.
    pub fn add_to_whitelist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        let owner = require_owner(&env, &caller)?;
        if account != owner {
            storage::set_whitelisted(&env, &account);
            events::whitelist_added(&env, &account);
        }
        Ok(())
    }

    pub fn add_many_to_whitelist(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        let owner = require_owner(&env, &caller)?;
        for account in accounts.iter() {
            if account != owner {
                storage::set_whitelisted(&env, &account);
                events::whitelist_added(&env, &account);
            }
        }
        Ok(())
    }

    /// Remove an address from the whitelist. Removing an absent address is a
    /// no-op.
    pub fn remove_from_whitelist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        storage::clear_whitelisted(&env, &account);
        events::whitelist_removed(&env, &account);
        Ok(())
    }

    pub fn remove_many_from_whitelist(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        for account in accounts.iter() {
            storage::clear_whitelisted(&env, &account);
            events::whitelist_removed(&env, &account);
        }
        Ok(())
    }

    pub fn exists_in_whitelist(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    /// Set or overwrite the USD conversion rate for a currency symbol.
    pub fn set_usd_rate(
        env: Env,
        caller: Address,
        currency: Symbol,
        rate: u128,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if rate == 0 {
            return Err(Error::InvalidRate);
        }
        storage::set_usd_rate(&env, &currency, rate);
        events::usd_rate_set(&env, &currency, rate);
        Ok(())
    }

    /// Look up the USD rate for a currency. An unset symbol is a hard
    /// failure, never a zero default.
    pub fn get_usd_rate(env: Env, currency: Symbol) -> Result<u128, Error> {
        storage::get_usd_rate(&env, &currency).ok_or(Error::UnknownCurrency)
    }

    /// Set the discount as an index: stored percentage = `index * 10`,
    /// capped at 30%.
    pub fn set_discount_rate(env: Env, caller: Address, index: u32) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let percentage = index.checked_mul(10).ok_or(Error::InvalidDiscount)?;
        if percentage > MAX_DISCOUNT_PERCENTAGE {
            return Err(Error::InvalidDiscount);
        }
        storage::set_discount_rate(&env, percentage);
        events::discount_set(&env, percentage);
        Ok(())
    }

    pub fn get_discount_rate(env: Env) -> u32 {
        storage::get_discount_rate(&env)
    }

    /// Threshold applied to a participant's first contribution only.
    pub fn set_minimum_purchase(env: Env, caller: Address, amount: u128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        storage::set_minimum_purchase(&env, amount);
        events::minimum_set(&env, amount);
        Ok(())
    }

    pub fn get_minimum_purchase(env: Env) -> u128 {
        storage::get_minimum_purchase(&env)
    }

    /// The pause flag doubles as the distribution window for `transfer`:
    /// administrative credits are only permitted while it is enabled.
    pub fn set_pause_enabled(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        storage::set_paused(&env, enabled);
        events::pause_set(&env, enabled);
        Ok(())
    }

    pub fn is_pause_enabled(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn exists_in_ledger(env: Env, account: Address) -> bool {
        storage::get_ledger_entry(&env, &account).is_some()
    }

    pub fn get_ledger_entry(env: Env, account: Address) -> Option<LedgerEntry> {
        storage::get_ledger_entry(&env, &account)
    }

    /// Administrative ledger entry. Overwrites any existing record for the
    /// address; the purchase path accumulates instead.
    pub fn add_to_ledger(
        env: Env,
        caller: Address,
        account: Address,
        currency: Symbol,
        amount: u128,
        token_amount: u128,
    ) -> Result<(), Error> {
        let owner = require_owner(&env, &caller)?;
        if storage::get_usd_rate(&env, &currency).is_none() {
            return Err(Error::UnknownCurrency);
        }
        if account == owner {
            return Err(Error::InvalidBeneficiary);
        }
        let entry = LedgerEntry {
            currency,
            amount,
            token_amount,
        };
        storage::set_ledger_entry(&env, &account, &entry);
        events::ledger_entry_set(&env, &account, &entry);
        Ok(())
    }

    pub fn get_token_sold(env: Env) -> u128 {
        storage::get_token_sold(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> u128 {
        storage::get_balance(&env, &account)
    }

    pub fn htkn_per_eth(_env: Env) -> u128 {
        HTKN_PER_ETH
    }

    pub fn total_supply(_env: Env) -> u128 {
        TOTAL_SUPPLY
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn get_sale_config(env: Env) -> Result<SaleConfig, Error> {
        storage::get_config(&env)
    }

    /// Purchase path. Moves `amount` of the payment token from the purchaser
    /// to the owner and credits the computed HTKN amount, all-or-nothing: an
    /// error return rolls back the payment along with every storage write.
    pub fn purchase(env: Env, purchaser: Address, amount: u128) -> Result<u128, Error> {
        purchaser.require_auth();

        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        let config = storage::get_config(&env)?;
        let owner = storage::get_owner(&env)?;

        if !storage::is_whitelisted(&env, &purchaser) {
            return Err(Error::NotWhitelisted);
        }
        if purchaser == owner {
            return Err(Error::SelfPurchase);
        }

        // Only a participant's first contribution is held to the minimum;
        // any address already in the ledger may contribute any amount.
        let existing = storage::get_ledger_entry(&env, &purchaser);
        if existing.is_none() && amount < storage::get_minimum_purchase(&env) {
            return Err(Error::BelowMinimum);
        }

        let usd_rate =
            storage::get_usd_rate(&env, &config.currency).ok_or(Error::UnknownCurrency)?;
        let token_amount = token_amount_for(storage::get_discount_rate(&env), usd_rate, amount)?;

        let sold = storage::get_token_sold(&env)
            .checked_add(token_amount)
            .ok_or(Error::AmountOverflow)?;
        if sold > TOTAL_SUPPLY {
            return Err(Error::SupplyExceeded);
        }

        let value = i128::try_from(amount).map_err(|_| Error::AmountOverflow)?;
        token::Client::new(&env, &config.payment_token).transfer(&purchaser, &owner, &value);

        let balance = storage::get_balance(&env, &purchaser)
            .checked_add(token_amount)
            .ok_or(Error::AmountOverflow)?;
        storage::set_balance(&env, &purchaser, balance);
        storage::set_token_sold(&env, sold);

        let entry = match existing {
            Some(prev) => LedgerEntry {
                currency: config.currency.clone(),
                amount: prev
                    .amount
                    .checked_add(amount)
                    .ok_or(Error::AmountOverflow)?,
                token_amount: prev
                    .token_amount
                    .checked_add(token_amount)
                    .ok_or(Error::AmountOverflow)?,
            },
            None => LedgerEntry {
                currency: config.currency.clone(),
                amount,
                token_amount,
            },
        };
        storage::set_ledger_entry(&env, &purchaser, &entry);

        events::token_purchase(&env, &purchaser, &purchaser, amount, token_amount);
        Ok(token_amount)
    }

    /// Administrative distribution: credit a balance with no value movement
    /// and no ledger entry. Only permitted while the distribution window
    /// (the pause flag) is open.
    pub fn transfer(env: Env, caller: Address, to: Address, amount: u128) -> Result<(), Error> {
        let owner = require_owner(&env, &caller)?;
        if to == owner || to == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        if !storage::is_paused(&env) {
            return Err(Error::DistributionWindowClosed);
        }
        let balance = storage::get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::AmountOverflow)?;
        storage::set_balance(&env, &to, balance);
        events::tokens_transferred(&env, &to, amount);
        Ok(())
    }
}
