//! REST method catalog
//!
//! Every method the client can call is a variant of [`Method`]. Each one is
//! tagged [`Access::Public`] or [`Access::Private`], which decides whether
//! the request is signed.

use std::fmt;
use std::str::FromStr;

/// Whether a method needs authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Unauthenticated market data
    Public,
    /// Signed account and trading operations
    Private,
}

impl Access {
    /// Path segment used in the request URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid API method")]
pub struct UnknownMethod(pub String);

/// Kraken REST API methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    // === Public ===
    /// Server time
    Time,
    /// Asset info
    Assets,
    /// Tradable asset pairs
    AssetPairs,
    /// Ticker information
    Ticker,
    /// Order book
    Depth,
    /// Recent trades
    Trades,
    /// Recent spreads
    Spread,
    /// OHLC candles
    Ohlc,

    // === Private ===
    /// Account balance
    Balance,
    /// Margin and equity summary
    TradeBalance,
    /// Open orders
    OpenOrders,
    /// Closed orders
    ClosedOrders,
    /// Orders by transaction id
    QueryOrders,
    /// Trade history
    TradesHistory,
    /// Trades by transaction id
    QueryTrades,
    /// Open margin positions
    OpenPositions,
    /// Ledger entries
    Ledgers,
    /// Ledger entries by id
    QueryLedgers,
    /// 30-day volume and fee tier
    TradeVolume,
    /// Place an order
    AddOrder,
    /// Cancel an order
    CancelOrder,
    /// Deposit methods for an asset
    DepositMethods,
    /// Deposit addresses for an asset and method
    DepositAddresses,
    /// Recent deposit status
    DepositStatus,
    /// Withdrawal fee and limit
    WithdrawInfo,
    /// Request a withdrawal
    Withdraw,
    /// Recent withdrawal status
    WithdrawStatus,
    /// Cancel a pending withdrawal
    WithdrawCancel,
    /// Token for private WebSocket channels
    GetWebSocketsToken,
}

impl Method {
    /// Public methods, in catalog order
    pub const PUBLIC: [Method; 8] = [
        Self::Time,
        Self::Assets,
        Self::AssetPairs,
        Self::Ticker,
        Self::Depth,
        Self::Trades,
        Self::Spread,
        Self::Ohlc,
    ];

    /// Private methods, in catalog order
    pub const PRIVATE: [Method; 21] = [
        Self::Balance,
        Self::TradeBalance,
        Self::OpenOrders,
        Self::ClosedOrders,
        Self::QueryOrders,
        Self::TradesHistory,
        Self::QueryTrades,
        Self::OpenPositions,
        Self::Ledgers,
        Self::QueryLedgers,
        Self::TradeVolume,
        Self::AddOrder,
        Self::CancelOrder,
        Self::DepositMethods,
        Self::DepositAddresses,
        Self::DepositStatus,
        Self::WithdrawInfo,
        Self::Withdraw,
        Self::WithdrawStatus,
        Self::WithdrawCancel,
        Self::GetWebSocketsToken,
    ];

    /// Method name as it appears in the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Assets => "Assets",
            Self::AssetPairs => "AssetPairs",
            Self::Ticker => "Ticker",
            Self::Depth => "Depth",
            Self::Trades => "Trades",
            Self::Spread => "Spread",
            Self::Ohlc => "OHLC",
            Self::Balance => "Balance",
            Self::TradeBalance => "TradeBalance",
            Self::OpenOrders => "OpenOrders",
            Self::ClosedOrders => "ClosedOrders",
            Self::QueryOrders => "QueryOrders",
            Self::TradesHistory => "TradesHistory",
            Self::QueryTrades => "QueryTrades",
            Self::OpenPositions => "OpenPositions",
            Self::Ledgers => "Ledgers",
            Self::QueryLedgers => "QueryLedgers",
            Self::TradeVolume => "TradeVolume",
            Self::AddOrder => "AddOrder",
            Self::CancelOrder => "CancelOrder",
            Self::DepositMethods => "DepositMethods",
            Self::DepositAddresses => "DepositAddresses",
            Self::DepositStatus => "DepositStatus",
            Self::WithdrawInfo => "WithdrawInfo",
            Self::Withdraw => "Withdraw",
            Self::WithdrawStatus => "WithdrawStatus",
            Self::WithdrawCancel => "WithdrawCancel",
            Self::GetWebSocketsToken => "GetWebSocketsToken",
        }
    }

    /// Whether this method is public or private
    pub fn access(&self) -> Access {
        match self {
            Self::Time
            | Self::Assets
            | Self::AssetPairs
            | Self::Ticker
            | Self::Depth
            | Self::Trades
            | Self::Spread
            | Self::Ohlc => Access::Public,
            _ => Access::Private,
        }
    }

    /// Returns true if requests for this method must be signed
    pub fn is_private(&self) -> bool {
        self.access() == Access::Private
    }

    /// Request path for this method, e.g. `/0/public/Ticker`
    pub fn path(&self, version: u32) -> String {
        format!("/{}/{}/{}", version, self.access(), self.as_str())
    }

    /// Every method in the catalog
    pub fn all() -> impl Iterator<Item = Method> {
        Self::PUBLIC.into_iter().chain(Self::PRIVATE)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Exact, case-sensitive match against the catalog
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}
