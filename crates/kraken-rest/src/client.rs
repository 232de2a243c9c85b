//! Main REST client implementation

use kraken_types::{Access, Method, Params, UnknownMethod};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{PreparedRequest, RequestBuilder};
use crate::response::classify_body;
use crate::transport::{HttpTransport, Transport};
use crate::types::{BalanceInfo, CancelOrderResult, OrderRequest, OrderResponse, ServerTime, TickerInfo};

/// Kraken REST API client
///
/// Cheap to clone; clones share the same credentials, nonce source and
/// HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use kraken_rest::{ClientConfig, KrakenClient, Method, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = KrakenClient::new(ClientConfig::new("api-key", "c2VjcmV0"))?;
///
///     let ticker = client.api(Method::Ticker, Params::new().with("pair", "XBTUSD")).await?;
///     println!("{ticker}");
///
///     let balance = client.get_balance().await?;
///     println!("{:?}", balance.non_zero());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KrakenClient {
    inner: Arc<Inner>,
}

struct Inner {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl KrakenClient {
    /// Create a client that talks HTTP through `reqwest`
    ///
    /// # Errors
    /// Fails immediately if the key or secret is empty, the secret is not
    /// valid base64, or the configuration is otherwise invalid.
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        config.validate()?;
        Self::with_transport(config, HttpTransport::new()?)
    }

    /// Create a client from `KRAKEN_*` environment variables
    pub fn from_env() -> RestResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> RestResult<Self> {
        let builder = RequestBuilder::from_config(&config)?;

        info!(base_url = %config.base_url, version = config.version, "Created Kraken REST client");

        Ok(Self {
            inner: Arc::new(Inner {
                builder,
                transport: Arc::new(transport),
                timeout: config.timeout,
            }),
        })
    }

    /// API key used for private calls
    pub fn api_key(&self) -> &str {
        self.inner.builder.api_key()
    }

    /// Build (and sign, if private) a request without sending it
    pub fn prepare(&self, method: Method, params: Params) -> RestResult<PreparedRequest> {
        self.inner.builder.build(method, params)
    }

    /// Call a method and return its `result` payload
    ///
    /// Public methods are sent unsigned; private methods get a nonce, the
    /// configured OTP and the `API-Key`/`API-Sign` headers.
    #[instrument(skip(self, method, params), fields(method = %method))]
    pub async fn api(&self, method: Method, params: Params) -> RestResult<Value> {
        let request = self.prepare(method, params)?;
        let body = self.inner.transport.send(&request, self.inner.timeout).await?;
        let result = classify_body(&body);

        if let Err(err) = &result {
            debug!(error = %err, "call failed");
        }
        result
    }

    /// Call a method by its exchange name, e.g. `"Ticker"`
    ///
    /// # Errors
    /// [`RestError::UnknownMethod`] if the name is not in the catalog. No
    /// request is made in that case.
    pub async fn api_by_name(&self, name: &str, params: Params) -> RestResult<Value> {
        let method: Method = name.parse()?;
        self.api(method, params).await
    }

    /// Call a public method by name
    pub async fn public_method(&self, name: &str, params: Params) -> RestResult<Value> {
        let method = Self::parse_with_access(name, Access::Public)?;
        self.api(method, params).await
    }

    /// Call a private method by name
    pub async fn private_method(&self, name: &str, params: Params) -> RestResult<Value> {
        let method = Self::parse_with_access(name, Access::Private)?;
        self.api(method, params).await
    }

    fn parse_with_access(name: &str, access: Access) -> RestResult<Method> {
        let method: Method = name.parse()?;
        if method.access() != access {
            return Err(UnknownMethod(name.to_string()).into());
        }
        Ok(method)
    }

    /// Call a method and decode its `result` into `T`
    pub async fn request<T: DeserializeOwned>(&self, method: Method, params: Params) -> RestResult<T> {
        let value = self.api(method, params).await?;
        serde_json::from_value(value).map_err(|e| RestError::Decode(format!("{method}: {e}")))
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Public market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Private account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Private trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Private funding endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(self)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Get server time
    pub async fn server_time(&self) -> RestResult<ServerTime> {
        self.market().get_server_time().await
    }

    /// Get ticker information for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XBTUSD", "ETHUSD")
    pub async fn get_ticker(&self, pair: &str) -> RestResult<HashMap<String, TickerInfo>> {
        self.market().get_tickers(&[pair]).await
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<BalanceInfo> {
        self.account().get_balance().await
    }

    /// Place a new order
    pub async fn add_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        self.trading().add_order(order).await
    }

    /// Cancel an order by transaction ID
    pub async fn cancel_order(&self, txid: &str) -> RestResult<CancelOrderResult> {
        self.trading().cancel_order(txid).await
    }
}

impl std::fmt::Debug for KrakenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenClient")
            .field("builder", &self.inner.builder)
            .field("transport", &self.inner.transport)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}
