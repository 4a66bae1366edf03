//! Literal coercion: raw source text to typed values.
//!
//! Kind sniffing always tries integer, then float, then boolean. An
//! all-digit string is therefore an integer and never anything else.

use crate::token::{TokenKind, Value};
use crate::types::PrimitiveType;

/// Failure to coerce raw text into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    #[error("`{0}` is not a valid {1}")]
    Invalid(String, PrimitiveType),
    #[error("string literal `{0}` is not enclosed in double quotes")]
    Unquoted(String),
}

#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parse standard decimal notation. `inf`, `nan` and friends are rejected
/// so that identifiers spelled that way stay identifiers, and values out of
/// `f64` range are not floats.
#[must_use]
pub fn parse_float(raw: &str) -> Option<f64> {
    let decimal = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if decimal {
        raw.parse().ok().filter(|v: &f64| v.is_finite())
    } else {
        None
    }
}

#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strip the surrounding double quotes of a string literal.
///
/// # Errors
///
/// Returns [`CoerceError::Unquoted`] if `raw` does not both start and end
/// with `"`.
pub fn parse_string(raw: &str) -> Result<String, CoerceError> {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::to_string)
        .ok_or_else(|| CoerceError::Unquoted(raw.to_string()))
}

/// Classify a bare word as an integer, float or boolean literal.
#[must_use]
pub fn sniff(raw: &str) -> Option<(TokenKind, Value)> {
    if let Some(v) = parse_int(raw) {
        Some((TokenKind::Int, Value::Int(v)))
    } else if let Some(v) = parse_float(raw) {
        Some((TokenKind::Float, Value::Float(v)))
    } else {
        parse_bool(raw).map(|v| (TokenKind::Bool, Value::Bool(v)))
    }
}

/// Coerce `raw` to exactly the requested primitive type.
///
/// # Errors
///
/// Returns [`CoerceError`] if `raw` is not a valid literal of type `ty`.
pub fn coerce(raw: &str, ty: PrimitiveType) -> Result<Value, CoerceError> {
    let value = match ty {
        PrimitiveType::Int => parse_int(raw).map(Value::Int),
        PrimitiveType::Float => parse_float(raw).map(Value::Float),
        PrimitiveType::Bool => parse_bool(raw).map(Value::Bool),
        PrimitiveType::Str => return parse_string(raw).map(Value::Str),
    };
    value.ok_or_else(|| CoerceError::Invalid(raw.to_string(), ty))
}
