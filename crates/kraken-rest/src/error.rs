//! Error types for REST API operations

use kraken_auth::AuthError;
use kraken_types::{ErrorCategory, UnknownMethod};

/// Client configuration errors, raised before any request is made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// API key is empty
    #[error("null key or secret: API key is empty")]
    MissingKey,

    /// API secret is empty
    #[error("null key or secret: API secret is empty")]
    MissingSecret,

    /// Base URL is not an absolute http(s) URL
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Timeout of zero
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    /// Environment variable holds an unparseable value
    #[error("invalid value for {name}: {value}")]
    InvalidEnvValue {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Client configuration rejected
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Secret could not be decoded or used as an HMAC key
    #[error("Invalid credentials: {0}")]
    InvalidCredential(String),

    /// Method name is not in the catalog
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    /// Connection failure, timeout, or failure reading the body
    #[error("Error in server response: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not JSON
    #[error("Could not understand response from server: {body}")]
    Transport {
        /// Raw response body
        body: String,
        /// JSON parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Kraken reported an error; `code` has the leading `E` stripped
    #[error("Kraken API returned error: {code}")]
    Exchange {
        /// Error code, e.g. `General:Invalid arguments`
        code: String,
        /// Category derived from the code
        category: ErrorCategory,
    },

    /// Kraken reported errors, none of them a recognizable code
    #[error("Kraken API returned an unknown error")]
    UnknownExchange {
        /// Raw error entries
        errors: Vec<String>,
    },

    /// Parameters could not be encoded
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Result does not match the expected shape
    #[error("Failed to decode result: {0}")]
    Decode(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials(msg) => Self::InvalidCredential(msg),
            AuthError::MissingCredentials("key") => Self::Config(ConfigError::MissingKey),
            AuthError::MissingCredentials(_) => Self::Config(ConfigError::MissingSecret),
            AuthError::EnvVarNotSet(name) => Self::EnvVarNotSet(name),
            AuthError::Encode(e) => Self::InvalidParameter(e.to_string()),
        }
    }
}

impl RestError {
    /// Build an exchange error from a code with its `E` already stripped
    pub fn exchange(code: impl Into<String>) -> Self {
        let code = code.into();
        let category = ErrorCategory::from_code(&code);
        Self::Exchange { code, category }
    }

    /// Exchange error code, if this is an exchange error
    pub fn exchange_code(&self) -> Option<&str> {
        match self {
            Self::Exchange { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// Check if this error was raised before anything was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::InvalidCredential(_)
                | Self::UnknownMethod(_)
                | Self::InvalidParameter(_)
                | Self::EnvVarNotSet(_)
        )
    }

    /// Check if the key, signature or nonce was rejected by Kraken
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::Exchange { code, .. } if ErrorCategory::is_auth_related(code))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
