use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    UnknownCurrency = 4,
    InvalidRate = 5,
    InvalidDiscount = 6,
    InvalidBeneficiary = 7,
    InvalidAmount = 8,
    NotWhitelisted = 9,
    SelfPurchase = 10,
    BelowMinimum = 11,
    SupplyExceeded = 12,
    DistributionWindowClosed = 13,
    AmountOverflow = 14,
}
