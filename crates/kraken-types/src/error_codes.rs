//! Kraken API error code categories
//!
//! Kraken reports failures as strings shaped like `"ECATEGORY:Message"`,
//! for example `"EAPI:Invalid nonce"` or `"EOrder:Insufficient funds"`.
//! The client strips the leading `E` before surfacing the code, so the
//! helpers here work on both forms.

use std::fmt;

/// Kraken API error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// EAPI:* errors - API-level issues (key, signature, nonce, rate limit)
    Api,
    /// EGeneral:* errors - General errors
    General,
    /// EService:* errors - Service availability
    Service,
    /// EOrder:* errors - Trading/order errors
    Order,
    /// EFunding:* errors - Deposit/withdrawal errors
    Funding,
    /// EQuery:* errors - Query/search errors
    Query,
    /// ETrade:* errors - Trade execution errors
    Trade,
    /// Unknown error category
    Unknown,
}

impl ErrorCategory {
    /// Categorize an error code, with or without its leading `E`
    pub fn from_code(code: &str) -> Self {
        let prefix = code.split(':').next().unwrap_or_default();
        let prefix = match prefix {
            // "EAPI" vs "API": only strip when the rest is a known category
            p if p.len() > 1 && p.starts_with('E') && Self::from_prefix(&p[1..]).is_some() => &p[1..],
            p => p,
        };

        Self::from_prefix(prefix).unwrap_or(Self::Unknown)
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "API" => Some(Self::Api),
            "General" => Some(Self::General),
            "Service" => Some(Self::Service),
            "Order" => Some(Self::Order),
            "Funding" => Some(Self::Funding),
            "Query" => Some(Self::Query),
            "Trade" => Some(Self::Trade),
            _ => None,
        }
    }

    /// Returns true for errors caused by the key, signature or nonce
    pub fn is_auth_related(code: &str) -> bool {
        Self::from_code(code) == Self::Api
            && ["Invalid key", "Invalid signature", "Invalid nonce"]
                .iter()
                .any(|m| code.contains(m))
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Api => "API",
            Self::General => "General",
            Self::Service => "Service",
            Self::Order => "Order",
            Self::Funding => "Funding",
            Self::Query => "Query",
            Self::Trade => "Trade",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Message part of an error code, after the first colon
pub fn error_message(code: &str) -> &str {
    code.split_once(':').map(|(_, m)| m.trim()).unwrap_or(code)
}
