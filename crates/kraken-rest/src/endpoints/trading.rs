//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use kraken_types::{Method, Params};
use tracing::{debug, instrument};

use crate::client::KrakenClient;
use crate::error::RestResult;
use crate::types::{CancelOrderResult, OrderRequest, OrderResponse};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a KrakenClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a KrakenClient) -> Self {
        Self { client }
    }

    /// Add a new order
    ///
    /// # Returns
    /// Order response with transaction ID(s)
    #[instrument(skip(self, order), fields(pair = %order.pair, side = ?order.side, order_type = ?order.order_type))]
    pub async fn add_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.volume, order.pair
        );
        self.client.request(Method::AddOrder, order.to_params()).await
    }

    /// Cancel an order by transaction ID or user reference
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, txid: &str) -> RestResult<CancelOrderResult> {
        let params = Params::new().with("txid", txid);
        self.client.request(Method::CancelOrder, params).await
    }
}
