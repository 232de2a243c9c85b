//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use kraken_types::{Method, Params};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::client::KrakenClient;
use crate::error::RestResult;
use crate::types::{
    AssetInfo, AssetPairInfo, OhlcResult, OrderbookData, RecentSpreadsResult, RecentTradesResult,
    ServerTime, TickerInfo,
};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a KrakenClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a KrakenClient) -> Self {
        Self { client }
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        debug!("Fetching server time");
        self.client.request(Method::Time, Params::new()).await
    }

    /// Get asset info
    ///
    /// # Arguments
    /// * `assets` - Optional list of assets to get info for (e.g., ["XBT", "ETH"])
    #[instrument(skip(self))]
    pub async fn get_assets(&self, assets: Option<&[&str]>) -> RestResult<HashMap<String, AssetInfo>> {
        let params = Params::new().with_opt("asset", assets.map(|a| a.join(",")));
        self.client.request(Method::Assets, params).await
    }

    /// Get tradable asset pairs
    ///
    /// # Arguments
    /// * `pairs` - Optional list of pairs to get info for (e.g., ["XBTUSD", "ETHUSD"])
    #[instrument(skip(self))]
    pub async fn get_asset_pairs(&self, pairs: Option<&[&str]>) -> RestResult<HashMap<String, AssetPairInfo>> {
        let params = Params::new().with_opt("pair", pairs.map(|p| p.join(",")));
        self.client.request(Method::AssetPairs, params).await
    }

    /// Get ticker information for one or more pairs
    #[instrument(skip(self))]
    pub async fn get_tickers(&self, pairs: &[&str]) -> RestResult<HashMap<String, TickerInfo>> {
        debug!("Fetching tickers for {} pairs", pairs.len());
        let params = Params::new().with("pair", pairs.join(","));
        self.client.request(Method::Ticker, params).await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XBTUSD")
    /// * `count` - Maximum number of asks/bids (1-500)
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, pair: &str, count: Option<u16>) -> RestResult<HashMap<String, OrderbookData>> {
        let params = Params::new()
            .with("pair", pair)
            .with_opt("count", count.map(|c| u32::from(c.min(500))));
        self.client.request(Method::Depth, params).await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XBTUSD")
    /// * `since` - Return trades since this cursor (optional)
    #[instrument(skip(self))]
    pub async fn get_recent_trades(&self, pair: &str, since: Option<&str>) -> RestResult<RecentTradesResult> {
        let params = Params::new().with("pair", pair).with_opt("since", since);
        self.client.request(Method::Trades, params).await
    }

    /// Get recent spread data
    #[instrument(skip(self))]
    pub async fn get_recent_spreads(&self, pair: &str, since: Option<u64>) -> RestResult<RecentSpreadsResult> {
        let params = Params::new().with("pair", pair).with_opt("since", since);
        self.client.request(Method::Spread, params).await
    }

    /// Get OHLC data
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XBTUSD")
    /// * `interval` - Time frame interval in minutes (1, 5, 15, 30, 60, 240, 1440, 10080, 21600)
    /// * `since` - Return candles since this timestamp (optional)
    #[instrument(skip(self))]
    pub async fn get_ohlc(&self, pair: &str, interval: Option<u32>, since: Option<u64>) -> RestResult<OhlcResult> {
        let params = Params::new()
            .with("pair", pair)
            .with_opt("interval", interval)
            .with_opt("since", since);
        self.client.request(Method::Ohlc, params).await
    }
}
