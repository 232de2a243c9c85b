//! Types for Kraken REST API requests and responses

use kraken_types::Params;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Market Data Types
// ============================================================================

/// Server time
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp
    pub unixtime: u64,
    /// RFC 1123 time string
    pub rfc1123: String,
}

/// Asset information
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInfo {
    /// Asset class
    pub aclass: String,
    /// Alternate name
    pub altname: String,
    /// Decimals
    pub decimals: u32,
    /// Display decimals
    pub display_decimals: u32,
}

/// Ticker information for a trading pair
#[derive(Debug, Clone, Deserialize)]
pub struct TickerInfo {
    /// Ask [price, whole lot volume, lot volume]
    pub a: Vec<String>,
    /// Bid [price, whole lot volume, lot volume]
    pub b: Vec<String>,
    /// Last trade closed [price, lot volume]
    pub c: Vec<String>,
    /// Volume [today, last 24 hours]
    pub v: Vec<String>,
    /// Volume weighted average price [today, last 24 hours]
    pub p: Vec<String>,
    /// Number of trades [today, last 24 hours]
    pub t: Vec<u64>,
    /// Low [today, last 24 hours]
    pub l: Vec<String>,
    /// High [today, last 24 hours]
    pub h: Vec<String>,
    /// Today's opening price
    pub o: String,
}

impl TickerInfo {
    /// Get the current ask price
    pub fn ask_price(&self) -> Option<Decimal> {
        self.a.first().and_then(|s| s.parse().ok())
    }

    /// Get the current bid price
    pub fn bid_price(&self) -> Option<Decimal> {
        self.b.first().and_then(|s| s.parse().ok())
    }

    /// Get the last trade price
    pub fn last_price(&self) -> Option<Decimal> {
        self.c.first().and_then(|s| s.parse().ok())
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }

    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        let mid = self.mid_price()?;
        Some((ask - bid) / mid * Decimal::from(10000))
    }
}

/// Asset pair information
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPairInfo {
    /// Alternate pair name
    pub altname: String,
    /// WebSocket pair name
    pub wsname: Option<String>,
    /// Asset class of base
    pub aclass_base: String,
    /// Base asset
    pub base: String,
    /// Asset class of quote
    pub aclass_quote: String,
    /// Quote asset
    pub quote: String,
    /// Pair decimals
    pub pair_decimals: u32,
    /// Lot decimals
    pub lot_decimals: u32,
    /// Fee schedule array [volume, percent fee]
    #[serde(default)]
    pub fees: Vec<Vec<serde_json::Value>>,
    /// Minimum order size
    pub ordermin: Option<String>,
}

/// Orderbook snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct OrderbookData {
    /// Ask levels [price, volume, timestamp]
    pub asks: Vec<Vec<serde_json::Value>>,
    /// Bid levels [price, volume, timestamp]
    pub bids: Vec<Vec<serde_json::Value>>,
}

impl OrderbookData {
    fn level_price(levels: &[Vec<serde_json::Value>]) -> Option<Decimal> {
        levels.first()?.first()?.as_str()?.parse().ok()
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        Self::level_price(&self.asks)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        Self::level_price(&self.bids)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Recent trades result
#[derive(Debug, Clone, Deserialize)]
pub struct RecentTradesResult {
    /// Last trade ID for pagination
    pub last: Option<String>,
    /// Trades data (pair -> array of trades)
    #[serde(flatten)]
    pub trades: HashMap<String, Vec<Vec<serde_json::Value>>>,
}

/// Recent spreads result
#[derive(Debug, Clone, Deserialize)]
pub struct RecentSpreadsResult {
    /// Last timestamp for pagination
    pub last: Option<u64>,
    /// Spread data (pair -> array of spreads)
    #[serde(flatten)]
    pub spreads: HashMap<String, Vec<Vec<serde_json::Value>>>,
}

/// OHLC result
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcResult {
    /// Last timestamp for pagination
    pub last: Option<u64>,
    /// Candle data [time, open, high, low, close, vwap, volume, count] per pair
    #[serde(flatten)]
    pub ohlc: HashMap<String, Vec<Vec<serde_json::Value>>>,
}

// ============================================================================
// Account Types
// ============================================================================

/// Account balance information
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceInfo(pub HashMap<String, String>);

impl BalanceInfo {
    /// Get balance for a specific asset
    pub fn get(&self, asset: &str) -> Option<Decimal> {
        self.0.get(asset).and_then(|s| s.parse().ok())
    }

    /// Get all non-zero balances
    pub fn non_zero(&self) -> HashMap<String, Decimal> {
        self.0
            .iter()
            .filter_map(|(k, v)| {
                let balance: Decimal = v.parse().ok()?;
                (!balance.is_zero()).then(|| (k.clone(), balance))
            })
            .collect()
    }
}

/// Trade balance (margin info)
#[derive(Debug, Clone, Deserialize)]
pub struct TradeBalance {
    /// Equivalent balance (base currency)
    pub eb: String,
    /// Trade balance
    pub tb: String,
    /// Margin amount of open positions
    pub m: Option<String>,
    /// Unrealized P&L of open positions
    pub n: Option<String>,
    /// Equity
    pub e: Option<String>,
    /// Free margin
    pub mf: Option<String>,
    /// Margin level
    pub ml: Option<String>,
}

/// Order information, open or closed
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInfo {
    /// Order status
    pub status: String,
    /// Open timestamp
    pub opentm: f64,
    /// Close timestamp (closed orders only)
    pub closetm: Option<f64>,
    /// Order description
    pub descr: OrderDescription,
    /// Volume
    pub vol: String,
    /// Executed volume
    pub vol_exec: String,
    /// Cost
    pub cost: String,
    /// Fee
    pub fee: String,
    /// Average price
    pub price: String,
    /// Miscellaneous
    #[serde(default)]
    pub misc: String,
    /// Order flags
    #[serde(default)]
    pub oflags: String,
}

/// Order description
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDescription {
    /// Asset pair
    pub pair: String,
    /// Type (buy/sell)
    #[serde(rename = "type")]
    pub side: String,
    /// Order type
    pub ordertype: String,
    /// Primary price
    pub price: String,
    /// Secondary price
    pub price2: String,
    /// Order description
    pub order: String,
}

/// Open orders result
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrdersResult {
    /// Open orders keyed by transaction ID
    pub open: HashMap<String, OrderInfo>,
}

/// Closed orders result
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedOrdersResult {
    /// Closed orders keyed by transaction ID
    pub closed: HashMap<String, OrderInfo>,
    /// Count of total results
    pub count: u32,
}

/// Ledgers result
#[derive(Debug, Clone, Deserialize)]
pub struct LedgersResult {
    /// Ledger entries keyed by ID
    pub ledger: HashMap<String, LedgerEntry>,
    /// Count of total results
    pub count: u32,
}

/// Ledger entry
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntry {
    /// Reference ID
    pub refid: String,
    /// Time
    pub time: f64,
    /// Type
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Asset
    pub asset: String,
    /// Amount
    pub amount: String,
    /// Fee
    pub fee: String,
    /// Balance after
    pub balance: String,
}

/// Trade volume info
#[derive(Debug, Clone, Deserialize)]
pub struct TradeVolume {
    /// Currency for volume
    pub currency: String,
    /// Current 30-day volume
    pub volume: String,
    /// Fee tier info per pair
    pub fees: Option<HashMap<String, FeeInfo>>,
    /// Maker fee tier info per pair
    pub fees_maker: Option<HashMap<String, FeeInfo>>,
}

/// Fee tier info
#[derive(Debug, Clone, Deserialize)]
pub struct FeeInfo {
    /// Current fee
    pub fee: String,
    /// Minimum fee
    pub minfee: String,
    /// Maximum fee
    pub maxfee: String,
    /// Next tier volume
    pub nextvolume: Option<String>,
}

/// WebSocket authentication token
#[derive(Debug, Clone, Deserialize)]
pub struct WsToken {
    /// The authentication token
    pub token: String,
    /// Token expiration in seconds (typically 900 = 15 minutes)
    pub expires: u64,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop loss
    StopLoss,
    /// Take profit
    TakeProfit,
    /// Stop loss limit
    StopLossLimit,
    /// Take profit limit
    TakeProfitLimit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::StopLoss => "stop-loss",
            Self::TakeProfit => "take-profit",
            Self::StopLossLimit => "stop-loss-limit",
            Self::TakeProfitLimit => "take-profit-limit",
        };
        write!(f, "{}", s)
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Good till date
    #[serde(rename = "GTD")]
    GoodTillDate,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::GoodTillDate => write!(f, "GTD"),
        }
    }
}

/// Order flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFlag {
    /// Post-only order (maker only)
    PostOnly,
    /// Fee in base currency
    FeeInBase,
    /// Fee in quote currency
    FeeInQuote,
    /// Disable market price protection
    NoMarketPriceProtection,
    /// Order volume in quote currency
    VolumeInQuote,
}

impl OrderFlag {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostOnly => "post",
            Self::FeeInBase => "fcib",
            Self::FeeInQuote => "fciq",
            Self::NoMarketPriceProtection => "nompp",
            Self::VolumeInQuote => "viqc",
        }
    }
}

/// Request to place an order
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading pair
    pub pair: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order volume
    pub volume: Decimal,
    /// Price (for limit and stop orders)
    pub price: Option<Decimal>,
    /// Secondary price (for stop-loss-limit, take-profit-limit)
    pub price2: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Leverage (for margin)
    pub leverage: Option<String>,
    /// Order flags
    pub flags: Vec<OrderFlag>,
    /// User reference ID
    pub userref: Option<i32>,
    /// Validate only (don't submit)
    pub validate: bool,
}

impl OrderRequest {
    fn new(pair: impl Into<String>, side: OrderSide, order_type: OrderType, volume: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side,
            order_type,
            volume,
            price: None,
            price2: None,
            time_in_force: None,
            leverage: None,
            flags: Vec::new(),
            userref: None,
            validate: false,
        }
    }

    /// Create a market order
    pub fn market(pair: impl Into<String>, side: OrderSide, volume: Decimal) -> Self {
        Self::new(pair, side, OrderType::Market, volume)
    }

    /// Create a limit order
    pub fn limit(pair: impl Into<String>, side: OrderSide, volume: Decimal, price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::new(pair, side, OrderType::Limit, volume)
        }
    }

    /// Create a stop loss order
    pub fn stop_loss(pair: impl Into<String>, side: OrderSide, volume: Decimal, stop_price: Decimal) -> Self {
        Self {
            price: Some(stop_price),
            ..Self::new(pair, side, OrderType::StopLoss, volume)
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Add an order flag
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Set as post-only (maker only)
    pub fn post_only(self) -> Self {
        self.with_flag(OrderFlag::PostOnly)
    }

    /// Set leverage for margin trading
    pub fn with_leverage(mut self, leverage: impl Into<String>) -> Self {
        self.leverage = Some(leverage.into());
        self
    }

    /// Set user reference ID
    pub fn with_userref(mut self, userref: i32) -> Self {
        self.userref = Some(userref);
        self
    }

    /// Set as validate-only (don't actually submit)
    pub fn validate_only(mut self) -> Self {
        self.validate = true;
        self
    }

    /// POST parameters for `AddOrder`
    pub fn to_params(&self) -> Params {
        let flags = (!self.flags.is_empty())
            .then(|| self.flags.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(","));

        Params::new()
            .with("pair", self.pair.as_str())
            .with("type", self.side.to_string())
            .with("ordertype", self.order_type.to_string())
            .with("volume", self.volume.to_string())
            .with_opt("price", self.price.map(|p| p.to_string()))
            .with_opt("price2", self.price2.map(|p| p.to_string()))
            .with_opt("timeinforce", self.time_in_force.map(|t| t.to_string()))
            .with_opt("leverage", self.leverage.as_deref())
            .with_opt("oflags", flags)
            .with_opt("userref", self.userref)
            .with_opt("validate", self.validate.then_some(true))
    }
}

/// Response from placing an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    /// Order description
    pub descr: OrderResponseDescription,
    /// Transaction IDs
    pub txid: Option<Vec<String>>,
}

/// Order response description
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponseDescription {
    /// Order description
    pub order: String,
    /// Close order description (if applicable)
    pub close: Option<String>,
}

/// Cancel order result
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResult {
    /// Number of orders cancelled
    pub count: u32,
    /// Whether cancel is pending
    pub pending: Option<bool>,
}

// ============================================================================
// Funding Types
// ============================================================================

/// Deposit method
#[derive(Debug, Clone, Deserialize)]
pub struct DepositMethod {
    /// Method name
    pub method: String,
    /// Limit
    pub limit: serde_json::Value,
    /// Fee
    pub fee: Option<String>,
    /// Generation address
    #[serde(rename = "gen-address")]
    pub gen_address: Option<bool>,
}

/// Deposit address
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Address
    pub address: String,
    /// Expiry time
    pub expiretm: Option<String>,
    /// New address generated
    pub new: Option<bool>,
}

/// Withdrawal info
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawInfo {
    /// Withdrawal method
    pub method: String,
    /// Limit
    pub limit: String,
    /// Amount after fees
    pub amount: String,
    /// Fee
    pub fee: String,
}

/// Deposit or withdrawal status entry
#[derive(Debug, Clone, Deserialize)]
pub struct TransferStatus {
    /// Method name
    pub method: String,
    /// Asset class
    pub aclass: String,
    /// Asset
    pub asset: String,
    /// Reference ID
    pub refid: String,
    /// Method transaction ID
    pub txid: String,
    /// Method transaction information
    pub info: String,
    /// Amount
    pub amount: String,
    /// Fee
    pub fee: Option<String>,
    /// Unix timestamp
    pub time: u64,
    /// Status
    pub status: String,
}
