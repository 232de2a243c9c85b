//! Request building
//!
//! Turns a [`Method`] and its [`Params`] into a [`PreparedRequest`]: the
//! URL, headers and form body that the transport sends. Private requests get
//! a nonce, the configured OTP and a signature over the exact body.

use kraken_auth::{encode_params, Credentials, NonceSource, SignatureScheme};
use kraken_types::{Access, Method, Params, NONCE, OTP};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::RestResult;

/// `User-Agent` header name
pub const USER_AGENT: &str = "User-Agent";
/// `Content-Type` header name
pub const CONTENT_TYPE: &str = "Content-Type";
/// API key header name
pub const API_KEY: &str = "API-Key";
/// Signature header name
pub const API_SIGN: &str = "API-Sign";

/// Form body content type
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully built request, ready to POST
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Method being called
    pub method: Method,
    /// Full URL
    pub url: String,
    /// Path part of the URL, the one that was signed
    pub path: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// URL-encoded form body
    pub body: String,
}

impl PreparedRequest {
    /// Look up a header, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the request carries credentials
    pub fn is_signed(&self) -> bool {
        self.header(API_SIGN).is_some()
    }
}

/// Builds public and private requests from a validated configuration
#[derive(Debug)]
pub struct RequestBuilder {
    base_url: String,
    version: u32,
    user_agent: String,
    credentials: Credentials,
    otp: Option<SecretString>,
    nonce_source: Arc<dyn NonceSource>,
    scheme: SignatureScheme,
}

impl RequestBuilder {
    /// Validate the configuration and decode the credentials
    pub fn from_config(config: &ClientConfig) -> RestResult<Self> {
        config.validate()?;
        let credentials = Credentials::new(config.key.clone(), config.secret.expose_secret())?;

        Ok(Self {
            base_url: config.base_url.clone(),
            version: config.version,
            user_agent: config.user_agent.clone(),
            credentials,
            otp: config
                .otp
                .as_ref()
                .map(|otp| SecretString::from(otp.expose_secret().to_string())),
            nonce_source: Arc::clone(&config.nonce_source),
            scheme: config.signature_scheme,
        })
    }

    /// API key used for private requests
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Build a request, signing it if the method is private
    pub fn build(&self, method: Method, params: Params) -> RestResult<PreparedRequest> {
        match method.access() {
            Access::Public => self.build_public(method, params),
            Access::Private => self.build_private(method, params),
        }
    }

    fn build_public(&self, method: Method, params: Params) -> RestResult<PreparedRequest> {
        let path = method.path(self.version);
        let body = encode_params(&params)?;

        debug!(%method, %path, "built public request");

        Ok(PreparedRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            path,
            headers: self.base_headers(),
            body,
        })
    }

    fn build_private(&self, method: Method, mut params: Params) -> RestResult<PreparedRequest> {
        let path = method.path(self.version);

        params.set_first_if_absent(NONCE, self.nonce_source.next_nonce());
        if let Some(otp) = &self.otp {
            params.set(OTP, otp.expose_secret());
        }

        let nonce = params.get(NONCE).map(ToString::to_string).unwrap_or_default();
        let body = encode_params(&params)?;
        let signature = self.credentials.sign(&path, &nonce, &body, self.scheme)?;

        debug!(%method, %path, "built private request");

        let mut headers = self.base_headers();
        headers.push((API_KEY.to_string(), self.credentials.api_key().to_string()));
        headers.push((API_SIGN.to_string(), signature));

        Ok(PreparedRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            path,
            headers,
            body,
        })
    }

    fn base_headers(&self) -> Vec<(String, String)> {
        vec![
            (USER_AGENT.to_string(), self.user_agent.clone()),
            (CONTENT_TYPE.to_string(), FORM_CONTENT_TYPE.to_string()),
        ]
    }
}
