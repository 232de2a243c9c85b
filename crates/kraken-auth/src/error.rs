//! Error types for authentication operations

/// Errors that can occur while building or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Secret is not valid base64, or cannot key the HMAC
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// API key or secret is empty
    #[error("Missing credentials: {0} is empty")]
    MissingCredentials(&'static str),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Request parameters could not be form-encoded
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("KRAKEN_API_KEY".to_string());
        assert!(err.to_string().contains("KRAKEN_API_KEY"));

        let err = AuthError::MissingCredentials("secret");
        assert_eq!(err.to_string(), "Missing credentials: secret is empty");
    }
}
