//! Typed endpoint groups
//!
//! Each group is a thin typed layer over [`KrakenClient::request`](crate::KrakenClient::request).

pub mod market;
pub mod account;
pub mod trading;
pub mod funding;

pub use market::MarketEndpoints;
pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;
pub use funding::FundingEndpoints;
