//! Authentication credentials for Kraken API
//!
//! # Security
//!
//! The decoded secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};
use crate::signature::{decode_secret, sign_encoded, SignatureScheme};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "KRAKEN_API_KEY";

/// Environment variable holding the base64 API secret
pub const API_SECRET_ENV: &str = "KRAKEN_API_SECRET";

/// API credentials for authenticated requests
///
/// The secret is decoded once at construction and zeroized when the
/// Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Decoded API secret (zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and base64 secret
    ///
    /// # Errors
    /// [`AuthError::MissingCredentials`] if either value is empty,
    /// [`AuthError::InvalidCredentials`] if the secret is not base64.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.as_ref();

        if api_key.trim().is_empty() {
            return Err(AuthError::MissingCredentials("key"));
        }
        if secret.trim().is_empty() {
            return Err(AuthError::MissingCredentials("secret"));
        }

        let decoded = decode_secret(secret)?;

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(decoded)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `KRAKEN_API_KEY` and `KRAKEN_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request for Kraken's API
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/0/private/Balance")
    /// * `nonce` - Nonce carried in `post_data`
    /// * `post_data` - URL-encoded POST body, exactly as it will be sent
    ///
    /// # Returns
    /// Base64-encoded signature
    pub fn sign(
        &self,
        path: &str,
        nonce: &str,
        post_data: &str,
        scheme: SignatureScheme,
    ) -> AuthResult<String> {
        sign_encoded(self.secret.expose_secret(), path, nonce, post_data, scheme)
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_SECRET: &str =
        "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials::new("test_api_key_long", "dGVzdF9wcml2YXRlX2tleQ==").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_private_key"));
        assert!(!debug.contains("test_api_key_long"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_missing_key_or_secret() {
        assert!(matches!(
            Credentials::new("", DOC_SECRET),
            Err(AuthError::MissingCredentials("key"))
        ));
        assert!(matches!(
            Credentials::new("key", "  "),
            Err(AuthError::MissingCredentials("secret"))
        ));
    }

    #[test]
    fn test_invalid_secret() {
        assert!(matches!(
            Credentials::new("key", "***"),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_signing_matches_documented_example() {
        let creds = Credentials::new("API_KEY", DOC_SECRET).unwrap();

        let signature = creds
            .sign(
                "/0/private/AddOrder",
                "1616492376594",
                "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37500&type=buy&volume=1.25",
                SignatureScheme::Canonical,
            )
            .unwrap();

        assert_eq!(
            signature,
            "4/dpxb3iT4tp/ZCVEwSnEsLxx0bqyhLpdfOpc6fn7OR8+UClSV5n9E6aSS8MPtnRfp32bAb0nmbRn6H8ndwLUQ=="
        );
    }

    #[test]
    fn test_clone_signs_identically() {
        let creds = Credentials::new("API_KEY", DOC_SECRET).unwrap();
        let cloned = creds.clone();

        let a = creds.sign("/0/private/Balance", "1", "nonce=1", SignatureScheme::Canonical).unwrap();
        let b = cloned.sign("/0/private/Balance", "1", "nonce=1", SignatureScheme::Canonical).unwrap();
        assert_eq!(a, b);
        assert_eq!(cloned.api_key(), "API_KEY");
    }
}
