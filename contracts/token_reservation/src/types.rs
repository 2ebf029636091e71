use soroban_sdk::{contracttype, Address, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub payment_token: Address, // Asset the purchase path collects from buyers
    pub currency: Symbol,       // Symbol the purchase path is priced in ("ETH")
}

/// Cumulative per-address contribution record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LedgerEntry {
    pub currency: Symbol,
    pub amount: u128,       // Raw contributed value, in payment units
    pub token_amount: u128, // HTKN credited for those contributions
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Paused,
    DiscountRate,
    MinimumPurchase,
    TokenSold,
    Whitelisted(Address),
    UsdRate(Symbol),
    Ledger(Address),
    Balance(Address),
}
