//! Locating the recipe list inside a provider response.

use log::{debug, warn};
use serde_json::Value;

/// Wrapper keys providers put the list under, in lookup priority order.
pub const WRAPPER_KEYS: [&str; 4] = ["recipes", "plan", "meals", "weeklyPlan"];

/// Returns the array of raw recipes (or plan days) in `response`.
///
/// A bare array is returned as is; otherwise the first [`WRAPPER_KEYS`]
/// entry holding an array wins. Anything else, including an
/// `{"error": ...}` payload, yields an empty list.
pub fn extract_recipes(response: &Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items.clone(),
        Value::Object(fields) => WRAPPER_KEYS
            .iter()
            .find_map(|key| match fields.get(*key) {
                Some(Value::Array(items)) => {
                    debug!("Found {} items under '{}'", items.len(), key);
                    Some(items.clone())
                }
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Parses raw provider text into JSON.
///
/// Models like to wrap JSON in markdown fences even when asked not to, so
/// those are stripped first. Text that still is not JSON becomes
/// `Value::Null`.
pub fn parse_response(text: &str) -> Value {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Value::Null;
    }

    match serde_json::from_str(stripped) {
        Ok(value) => value,
        Err(e) => {
            warn!("Provider returned text that is not JSON: {}", e);
            debug!("Unparseable provider text: {}", text);
            Value::Null
        }
    }
}

/// Error message carried by a provider error payload, if any.
///
/// Accepts both `{"error": "message"}` and `{"error": {"message": ...}}`.
pub fn provider_error(response: &Value) -> Option<String> {
    match response.get("error")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Object(details) => details
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| Some(Value::Object(details.clone()).to_string())),
        _ => None,
    }
}

fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // drop the info string ("json") up to the first newline
        body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches("json"),
        };
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}
