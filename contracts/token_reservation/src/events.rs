use crate::types::LedgerEntry;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub fn initialized(env: &Env, owner: &Address, payment_token: &Address, currency: &Symbol) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), payment_token.clone(), currency.clone()),
    );
}

pub fn whitelist_added(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("wl_add"),), (account.clone(),));
}

pub fn whitelist_removed(env: &Env, account: &Address) {
    env.events()
        .publish((symbol_short!("wl_del"),), (account.clone(),));
}

pub fn usd_rate_set(env: &Env, currency: &Symbol, rate: u128) {
    env.events()
        .publish((symbol_short!("rate"),), (currency.clone(), rate));
}

pub fn discount_set(env: &Env, percentage: u32) {
    env.events()
        .publish((symbol_short!("discount"),), (percentage,));
}

pub fn minimum_set(env: &Env, amount: u128) {
    env.events()
        .publish((symbol_short!("minimum"),), (amount,));
}

pub fn pause_set(env: &Env, enabled: bool) {
    env.events().publish((symbol_short!("pause"),), (enabled,));
}

pub fn ledger_entry_set(env: &Env, account: &Address, entry: &LedgerEntry) {
    env.events().publish(
        (symbol_short!("ledger"),),
        (
            account.clone(),
            entry.currency.clone(),
            entry.amount,
            entry.token_amount,
        ),
    );
}

/// Purchase audit record: `(purchaser, beneficiary, value, amount)`.
pub fn token_purchase(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    value: u128,
    amount: u128,
) {
    env.events().publish(
        (symbol_short!("purchase"),),
        (purchaser.clone(), beneficiary.clone(), value, amount),
    );
}

pub fn tokens_transferred(env: &Env, to: &Address, amount: u128) {
    env.events()
        .publish((symbol_short!("transfer"),), (to.clone(), amount));
}
