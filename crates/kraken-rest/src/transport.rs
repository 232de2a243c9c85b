//! HTTP transport
//!
//! The transport only moves bytes: it POSTs a [`PreparedRequest`] and hands
//! back the response body. Interpreting the body is the classifier's job.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::request::PreparedRequest;

/// Sends prepared requests
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// POST the request and return the raw response body
    ///
    /// # Errors
    /// [`RestError::Network`](crate::RestError::Network) on connection
    /// failure, timeout, or failure reading the body.
    async fn send(&self, request: &PreparedRequest, timeout: Duration) -> RestResult<String>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a fresh `reqwest` client
    pub fn new() -> RestResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn send(&self, request: &PreparedRequest, timeout: Duration) -> RestResult<String> {
        let mut builder = self
            .client
            .post(&request.url)
            .timeout(timeout)
            .body(request.body.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, bytes = body.len(), "received response");

        Ok(body)
    }
}
