//! Polars `AnyValue` conversion helpers.
//!
//! Tables are normalized to `Float64`/`String` columns, but these helpers
//! accept the wider set of dtypes a freshly decoded frame can carry.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to its display string.
///
/// Missing cells render as the empty string; floats are formatted without
/// trailing zeros.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Float64(value) => format_numeric(value),
        AnyValue::Float32(value) => format_numeric(f64::from(value)),
        AnyValue::Int64(value) => value.to_string(),
        AnyValue::Int32(value) => value.to_string(),
        AnyValue::Int16(value) => value.to_string(),
        AnyValue::Int8(value) => value.to_string(),
        AnyValue::UInt64(value) => value.to_string(),
        AnyValue::UInt32(value) => value.to_string(),
        AnyValue::UInt16(value) => value.to_string(),
        AnyValue::UInt8(value) => value.to_string(),
        AnyValue::Boolean(value) => {
            if value {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        value => value.to_string(),
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for missing or
/// non-numeric values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float64(value) => Some(value),
        AnyValue::Float32(value) => Some(f64::from(value)),
        AnyValue::Int8(value) => Some(f64::from(value)),
        AnyValue::Int16(value) => Some(f64::from(value)),
        AnyValue::Int32(value) => Some(f64::from(value)),
        AnyValue::Int64(value) => Some(value as f64),
        AnyValue::UInt8(value) => Some(f64::from(value)),
        AnyValue::UInt16(value) => Some(f64::from(value)),
        AnyValue::UInt32(value) => Some(f64::from(value)),
        AnyValue::UInt64(value) => Some(value as f64),
        AnyValue::String(value) => parse_f64(value),
        AnyValue::StringOwned(value) => parse_f64(&value),
        _ => None,
    }
}

/// Above 2^53 an `f64` no longer holds every integer, and a cast to `i64`
/// saturates; render those through the float path.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Formats a float without trailing zeros (`1.50` -> `"1.5"`, `3.0` -> `"3"`).
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Parses a trimmed string as `f64`; empty and invalid strings yield `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
