//! REST API client for Kraken cryptocurrency exchange
//!
//! This crate provides an async client for Kraken's REST API: a generic
//! dispatcher over the full method catalog, plus typed endpoint groups for
//! market data, account queries, trading and funding.
//!
//! # Layers
//!
//! - [`RequestBuilder`] turns a [`Method`] and its [`Params`] into a
//!   [`PreparedRequest`], signing private calls
//! - [`Transport`] POSTs the request and returns the raw body
//! - [`response`] classifies the body into a result payload or an error
//! - [`KrakenClient`] ties the three together
//!
//! # Authentication
//!
//! Private endpoints are signed with HMAC-SHA512 over the URI path and the
//! SHA-256 of nonce plus body, as specified by Kraken's API documentation.
//! A nonce is injected unless the caller supplied one.
//!
//! # Example
//!
//! ```no_run
//! use kraken_rest::{KrakenClient, Method, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads KRAKEN_API_KEY / KRAKEN_API_SECRET
//!     let client = KrakenClient::from_env()?;
//!
//!     let ticker = client.get_ticker("XBTUSD").await?;
//!     println!("BTC/USD: {:?}", ticker);
//!
//!     let balance = client.api(Method::Balance, Params::new()).await?;
//!     println!("Balances: {}", balance);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod endpoints;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::KrakenClient;
pub use config::ClientConfig;
pub use error::{ConfigError, RestError, RestResult};
pub use request::{PreparedRequest, RequestBuilder};
pub use transport::{HttpTransport, Transport};

pub use kraken_auth::{NonceSource, SignatureScheme};
pub use kraken_types::{Access, ErrorCategory, Method, ParamValue, Params};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    AssetInfo, AssetPairInfo, OhlcResult, OrderbookData, ServerTime, TickerInfo,
    // Account
    BalanceInfo, OpenOrdersResult, OrderInfo, TradeBalance, WsToken,
    // Trading
    OrderFlag, OrderRequest, OrderResponse, OrderSide, OrderType, TimeInForce,
};
