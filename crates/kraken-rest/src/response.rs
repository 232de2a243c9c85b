//! Response classification
//!
//! Kraken answers with `{"error": [...], "result": ...}`. An empty (or
//! missing) error list means success. Otherwise the first entry starting
//! with `E` is the error code; later entries are ignored.

use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Parse a raw body as JSON
pub fn parse_body(body: &str) -> RestResult<Value> {
    serde_json::from_str(body).map_err(|source| RestError::Transport {
        body: body.to_string(),
        source,
    })
}

/// Error entries of a parsed response
pub fn error_entries(response: &Value) -> Vec<String> {
    match response.get("error") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|e| match e {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Classify a parsed response into its result payload or an error
pub fn classify(mut response: Value) -> RestResult<Value> {
    let errors = error_entries(&response);

    if errors.is_empty() {
        return Ok(response
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null));
    }

    match errors.iter().find_map(|e| e.strip_prefix('E')) {
        Some(code) => Err(RestError::exchange(code)),
        None => Err(RestError::UnknownExchange { errors }),
    }
}

/// [`parse_body`] followed by [`classify`]
pub fn classify_body(body: &str) -> RestResult<Value> {
    classify(parse_body(body)?)
}
