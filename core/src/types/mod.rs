//! Domain types — the session request, its panes, and launch settings.
//!
//! Config values arrive as a decoded `serde_json::Value` tree (YAML input is
//! converted into the same tree). Both `Session` and `Pane` dispatch on the
//! node kind: mapping, sequence, or scalar.

pub mod config;
pub mod pane;
pub mod session;

use serde_json::Value;

use crate::error::ConfigError;


/// Parse a non-negative integer option. Integers and numeric strings are accepted.
pub(crate) fn parse_index(key: &str, value: &Value) -> Result<usize, ConfigError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| ConfigError::invalid(key, format!("expected a non-negative integer, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::invalid(key, format!("expected a non-negative integer, got '{}'", s))),
        other => Err(ConfigError::invalid(
            key,
            format!("expected a non-negative integer, got {}", kind_name(other)),
        )),
    }
}

/// Truthiness of an on/off option: null, `false`, zero and empty strings are off.
pub(crate) fn parse_flag(key: &str, value: &Value) -> Result<bool, ConfigError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => Ok(!s.is_empty()),
        other => Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {}", kind_name(other)),
        )),
    }
}

/// String form of a scalar node. `None` for mappings and sequences.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
