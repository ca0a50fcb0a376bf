//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! Settings and system parameters arrive as a loose JSON object (CLI
//! `--params`, scene files). Each helper takes the object, a key, and a
//! default; missing keys or wrong types fall back to the default. Only
//! `param_color` can fail, and only on a present-but-unparsable hex string.

use serde_json::Value;

use crate::color::Srgb;
use crate::error::FieldError;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts any JSON number, including integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds for non-negative integers.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a string slice from `params[name]`, or `None` if missing or wrong type.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}

/// Extracts a hex color from `params[name]`.
///
/// Returns `Ok(None)` when the key is missing or not a string, and
/// `FieldError::InvalidColor` when a string is present but unparsable;
/// a mistyped color is reported rather than silently defaulted.
pub fn param_color(params: &Value, name: &str) -> Result<Option<Srgb>, FieldError> {
    match param_str(params, name) {
        Some(hex) => Srgb::from_hex(hex).map(Some),
        None => Ok(None),
    }
}
