//! Authentication for the Kraken REST API
//!
//! This crate holds everything a private request needs before it hits the
//! network: credentials, nonces and the request signature.
//!
//! # Example
//!
//! ```
//! use kraken_auth::{Credentials, IncreasingNonce, NonceSource, SignatureScheme};
//!
//! # fn main() -> Result<(), kraken_auth::AuthError> {
//! let creds = Credentials::new("API_KEY", "c2VjcmV0")?;
//! let nonce = IncreasingNonce::new().next_nonce().to_string();
//! let body = format!("nonce={}", nonce);
//!
//! let signature = creds.sign("/0/private/Balance", &nonce, &body, SignatureScheme::Canonical)?;
//! assert!(!signature.is_empty());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;
mod signature;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::{clock_micros, ClockNonce, CounterNonce, IncreasingNonce, NonceSource, ProcessNonce};
pub use signature::{
    decode_secret, encode_params, get_message_signature, get_message_signature_with, sign_encoded,
    SignatureScheme,
};
