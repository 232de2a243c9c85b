//! Private account endpoints
//!
//! These endpoints require authentication.

use kraken_types::{Method, Params};
use tracing::instrument;

use crate::client::KrakenClient;
use crate::error::RestResult;
use crate::types::{
    BalanceInfo, ClosedOrdersResult, LedgersResult, OpenOrdersResult, TradeBalance, TradeVolume, WsToken,
};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a KrakenClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a KrakenClient) -> Self {
        Self { client }
    }

    /// Get account balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<BalanceInfo> {
        self.client.request(Method::Balance, Params::new()).await
    }

    /// Get trade balance (margin info)
    ///
    /// # Arguments
    /// * `asset` - Base asset for calculations (default: "ZUSD")
    #[instrument(skip(self))]
    pub async fn get_trade_balance(&self, asset: Option<&str>) -> RestResult<TradeBalance> {
        let params = Params::new().with_opt("asset", asset);
        self.client.request(Method::TradeBalance, params).await
    }

    /// Get open orders
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, trades: Option<bool>, userref: Option<i32>) -> RestResult<OpenOrdersResult> {
        let params = Params::new().with_opt("trades", trades).with_opt("userref", userref);
        self.client.request(Method::OpenOrders, params).await
    }

    /// Get closed orders
    ///
    /// # Arguments
    /// * `start` - Start timestamp or order txid, exclusive
    /// * `end` - End timestamp or order txid, inclusive
    /// * `ofs` - Offset for pagination
    #[instrument(skip(self))]
    pub async fn get_closed_orders(
        &self,
        start: Option<u64>,
        end: Option<u64>,
        ofs: Option<u32>,
    ) -> RestResult<ClosedOrdersResult> {
        let params = Params::new()
            .with_opt("start", start)
            .with_opt("end", end)
            .with_opt("ofs", ofs);
        self.client.request(Method::ClosedOrders, params).await
    }

    /// Get ledger entries
    #[instrument(skip(self))]
    pub async fn get_ledgers(&self, asset: Option<&str>, ofs: Option<u32>) -> RestResult<LedgersResult> {
        let params = Params::new().with_opt("asset", asset).with_opt("ofs", ofs);
        self.client.request(Method::Ledgers, params).await
    }

    /// Get 30-day trade volume and fee tier
    #[instrument(skip(self))]
    pub async fn get_trade_volume(&self, pair: Option<&str>) -> RestResult<TradeVolume> {
        let params = Params::new().with_opt("pair", pair);
        self.client.request(Method::TradeVolume, params).await
    }

    /// Get a token for private WebSocket channels
    ///
    /// The token is valid for about 15 minutes.
    #[instrument(skip(self))]
    pub async fn get_websockets_token(&self) -> RestResult<WsToken> {
        self.client.request(Method::GetWebSocketsToken, Params::new()).await
    }
}
