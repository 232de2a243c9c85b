//! Client configuration
//!
//! Credentials and connection settings are fixed when the client is built.
//! Validation happens in [`KrakenClient::new`](crate::KrakenClient::new), so
//! a bad configuration fails before any request is attempted.

use kraken_auth::{NonceSource, ProcessNonce, SignatureScheme, API_KEY_ENV, API_SECRET_ENV};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ConfigError, RestError, RestResult};

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";

/// Default API version
pub const DEFAULT_VERSION: u32 = 0;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("kraken-rest/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the two-factor password
pub const OTP_ENV: &str = "KRAKEN_OTP";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "KRAKEN_API_URL";

/// Environment variable overriding the API version
pub const VERSION_ENV: &str = "KRAKEN_API_VERSION";

/// Environment variable overriding the timeout, in milliseconds
pub const TIMEOUT_ENV: &str = "KRAKEN_TIMEOUT_MS";

/// Client configuration
///
/// # Example
///
/// ```
/// use kraken_rest::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("API_KEY", "c2VjcmV0")
///     .with_otp("123456")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.version, 0);
/// ```
#[derive(Debug)]
pub struct ClientConfig {
    /// API key
    pub key: String,
    /// Base64 API secret
    pub secret: SecretString,
    /// Two-factor password sent with every private request
    pub otp: Option<SecretString>,
    /// API host, without trailing slash
    pub base_url: String,
    /// API version path segment
    pub version: u32,
    /// Request timeout
    pub timeout: Duration,
    /// `User-Agent` header
    pub user_agent: String,
    /// Source of nonces for private requests without one
    pub nonce_source: Arc<dyn NonceSource>,
    /// Signature scheme for private requests
    pub signature_scheme: SignatureScheme,
}

impl ClientConfig {
    /// Create a configuration with default settings
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::from(secret.into()),
            otp: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            nonce_source: Arc::new(ProcessNonce),
            signature_scheme: SignatureScheme::default(),
        }
    }

    /// Load configuration from the environment
    ///
    /// Requires `KRAKEN_API_KEY` and `KRAKEN_API_SECRET`; `KRAKEN_OTP`,
    /// `KRAKEN_API_URL`, `KRAKEN_API_VERSION` and `KRAKEN_TIMEOUT_MS` are
    /// optional.
    pub fn from_env() -> RestResult<Self> {
        let key = required_env(API_KEY_ENV)?;
        let secret = required_env(API_SECRET_ENV)?;
        let mut config = Self::new(key, secret);

        if let Some(otp) = optional_env(OTP_ENV) {
            config = config.with_otp(otp);
        }
        if let Some(url) = optional_env(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(version) = optional_env(VERSION_ENV) {
            let parsed = version.parse().map_err(|_| ConfigError::InvalidEnvValue {
                name: VERSION_ENV,
                value: version.clone(),
            })?;
            config = config.with_version(parsed);
        }
        if let Some(timeout) = optional_env(TIMEOUT_ENV) {
            let parsed = timeout.parse().map_err(|_| ConfigError::InvalidEnvValue {
                name: TIMEOUT_ENV,
                value: timeout.clone(),
            })?;
            config = config.with_timeout(Duration::from_millis(parsed));
        }

        Ok(config)
    }

    /// Set the two-factor password
    pub fn with_otp(mut self, otp: impl Into<String>) -> Self {
        self.otp = Some(SecretString::from(otp.into()));
        self
    }

    /// Set the API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a different nonce source
    pub fn with_nonce_source(mut self, source: impl NonceSource + 'static) -> Self {
        self.nonce_source = Arc::new(source);
        self
    }

    /// Use a different signature scheme
    pub fn with_signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.signature_scheme = scheme;
        self
    }

    /// Check everything that does not involve the secret's encoding
    pub fn validate(&self) -> Result<(), ConfigError> {
        use secrecy::ExposeSecret;

        if self.key.trim().is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if self.secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }
}

fn required_env(name: &str) -> RestResult<String> {
    std::env::var(name).map_err(|_| RestError::EnvVarNotSet(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    const ENV_VARS: [&str; 6] = [API_KEY_ENV, API_SECRET_ENV, OTP_ENV, BASE_URL_ENV, VERSION_ENV, TIMEOUT_ENV];

    fn clear_env() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("key", "c2VjcmV0");
        assert_eq!(config.base_url, "https://api.kraken.com");
        assert_eq!(config.version, 0);
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert!(config.otp.is_none());
        assert_eq!(config.signature_scheme, SignatureScheme::Canonical);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("key", "c2VjcmV0")
            .with_base_url("http://localhost:8080/")
            .with_version(1)
            .with_timeout(Duration::from_secs(1))
            .with_user_agent("test-agent")
            .with_otp("123456");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.version, 1);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.otp.as_ref().map(|o| o.expose_secret()), Some("123456"));
    }

    #[test]
    fn test_validate_missing_credentials() {
        assert_eq!(ClientConfig::new("", "c2VjcmV0").validate(), Err(ConfigError::MissingKey));
        assert_eq!(ClientConfig::new("key", "").validate(), Err(ConfigError::MissingSecret));
    }

    #[test]
    fn test_validate_settings() {
        let config = ClientConfig::new("key", "c2VjcmV0").with_timeout(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));

        let config = ClientConfig::new("key", "c2VjcmV0").with_base_url("api.kraken.com");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl(_))));

        let config = ClientConfig::new("key", "c2VjcmV0").with_base_url("ftp://api.kraken.com");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("key", "c2VjcmV0").with_otp("987654");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("c2VjcmV0"));
        assert!(!debug.contains("987654"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "env-key");
        std::env::set_var(API_SECRET_ENV, "c2VjcmV0");
        std::env::set_var(TIMEOUT_ENV, "2500");
        std::env::set_var(VERSION_ENV, "1");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.key, "env-key");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.version, 1);
        assert!(config.otp.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        clear_env();
        std::env::set_var(API_SECRET_ENV, "c2VjcmV0");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, RestError::EnvVarNotSet(name) if name == API_KEY_ENV));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_bad_timeout() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "env-key");
        std::env::set_var(API_SECRET_ENV, "c2VjcmV0");
        std::env::set_var(TIMEOUT_ENV, "soon");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            RestError::Config(ConfigError::InvalidEnvValue { name: TIMEOUT_ENV, .. })
        ));

        clear_env();
    }
}
