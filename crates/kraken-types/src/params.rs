//! Ordered request parameters
//!
//! Kraken signs the exact bytes of the POST body, so parameter order has to
//! survive from the caller to the wire. [`Params`] keeps insertion order and
//! serializes as a sequence of `(name, value)` pairs, which is what
//! `serde_urlencoded` expects.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Name of the parameter carrying the request nonce
pub const NONCE: &str = "nonce";

/// Name of the parameter carrying the two-factor password
pub const OTP: &str = "otp";

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text value
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer (nonces, timestamps)
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::UInt(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered mapping from parameter name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Params::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style setter that skips `None`
    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Set a parameter
    ///
    /// An existing parameter keeps its position and gets the new value; a new
    /// one is appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a parameter at the front, unless it already exists
    pub fn set_first_if_absent(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        if !self.contains(&name) {
            self.entries.insert(0, (name, value.into()));
        }
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Returns true if the parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a parameter, returning its value
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            seq.serialize_element(&(name.as_str(), value.to_string()))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let params = Params::new()
            .with("pair", "XBTUSD")
            .with("count", 10u32)
            .with("since", 1_700_000_000u64);

        let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["pair", "count", "since"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);
        params.set("a", "3");

        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().next(), Some(("a", &ParamValue::from("3"))));
    }

    #[test]
    fn test_set_first_if_absent() {
        let mut params = Params::from([("pair", "XBTUSD")]);
        params.set_first_if_absent(NONCE, 42u64);
        assert_eq!(params.iter().next().map(|(k, _)| k), Some(NONCE));

        params.set_first_if_absent(NONCE, 43u64);
        assert_eq!(params.get(NONCE), Some(&ParamValue::UInt(42)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ParamValue::from(1.25).to_string(), "1.25");
        assert_eq!(ParamValue::from(-3i64).to_string(), "-3");
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from("XBT").to_string(), "XBT");
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with_opt("since", None::<u64>)
            .with_opt("count", Some(5u32));

        assert!(!params.contains("since"));
        assert_eq!(params.get("count"), Some(&ParamValue::UInt(5)));
    }

    #[test]
    fn test_form_encoding() {
        let params = Params::new()
            .with("pair", "XBT USD")
            .with("price", 37500.5)
            .with("close[ordertype]", "limit");

        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(encoded, "pair=XBT+USD&price=37500.5&close%5Bordertype%5D=limit");
    }

    #[test]
    fn test_remove() {
        let mut params = Params::from([("a", 1i64), ("b", 2i64)]);
        assert_eq!(params.remove("a"), Some(ParamValue::Int(1)));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);
    }
}
