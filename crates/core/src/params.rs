//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; range checks belong to the caller's `validate()`.

use serde_json::Value;

/// Extracts an `i64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Floats are rejected even when they hold an integral value.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    params.get(name).and_then(Value::as_i64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing, negative,
/// not an integer, or larger than `u32::MAX`.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}
