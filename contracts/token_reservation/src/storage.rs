use crate::errors::Error;
use crate::types::{DataKey, LedgerEntry, SaleConfig};
use soroban_sdk::{Address, Env, Symbol};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_discount_rate(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DiscountRate)
        .unwrap_or(0)
}

pub fn set_discount_rate(env: &Env, percentage: u32) {
    env.storage()
        .instance()
        .set(&DataKey::DiscountRate, &percentage);
}

pub fn get_minimum_purchase(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::MinimumPurchase)
        .unwrap_or(crate::contract::DEFAULT_MINIMUM_PURCHASE)
}

pub fn set_minimum_purchase(env: &Env, amount: u128) {
    env.storage()
        .instance()
        .set(&DataKey::MinimumPurchase, &amount);
}

pub fn get_token_sold(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TokenSold)
        .unwrap_or(0)
}

pub fn set_token_sold(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TokenSold, &amount);
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(account.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(account.clone()), &true);
}

pub fn clear_whitelisted(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Whitelisted(account.clone()));
}

pub fn get_usd_rate(env: &Env, currency: &Symbol) -> Option<u128> {
    env.storage()
        .persistent()
        .get(&DataKey::UsdRate(currency.clone()))
}

pub fn set_usd_rate(env: &Env, currency: &Symbol, rate: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::UsdRate(currency.clone()), &rate);
}

pub fn get_ledger_entry(env: &Env, account: &Address) -> Option<LedgerEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Ledger(account.clone()))
}

pub fn set_ledger_entry(env: &Env, account: &Address, entry: &LedgerEntry) {
    env.storage()
        .persistent()
        .set(&DataKey::Ledger(account.clone()), entry);
}

pub fn get_balance(env: &Env, account: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}
