//! Shared types for the Kraken REST client
//!
//! This crate has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Method`], [`Access`] - The REST method catalog, tagged public/private
//! - [`Params`], [`ParamValue`] - Ordered POST parameters
//! - [`ErrorCategory`] - Kraken error code categories

pub mod error_codes;
pub mod method;
pub mod params;

pub use error_codes::*;
pub use method::*;
pub use params::*;
