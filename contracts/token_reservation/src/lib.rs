#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use contract::{
    TokenReservationContract, TokenReservationContractClient, HTKN_PER_ETH, TOTAL_SUPPLY,
};
pub use errors::Error;
pub use types::{LedgerEntry, SaleConfig};
