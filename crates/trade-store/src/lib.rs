//! SQLite access to trade transaction records.
//!
//! [`TradeStore`] runs filtered queries against the transaction table and
//! [`enrich`] labels the resulting records with reference names.

#![deny(unsafe_code)]

mod decode;
mod enrich;
mod error;
mod filter;
mod store;

pub use enrich::enrich;
pub use error::{Result, StoreError};
pub use filter::{TRADE_TABLE, TradeFilter};
pub use store::TradeStore;
