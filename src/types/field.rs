//! Field value type for the CSV encoder
//!
//! A field is a single scalar inside a record. Every variant has a textual
//! form, which is what ends up (quoted) in the CSV output.

use std::fmt;

/// A single scalar value within a record
///
/// `Null` and `Undefined` are kept apart because their textual forms differ
/// (`null` vs `undefined`) when null fields are not being ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An explicit null value
    Null,

    /// The absent sentinel (a field that was never set)
    Undefined,

    /// Boolean, rendered as `true` / `false`
    Bool(bool),

    /// Signed integer
    Integer(i64),

    /// Unsigned integer too large for `Integer`
    Unsigned(u64),

    /// Floating point number
    ///
    /// Integral values render without a fractional part (`1.0` → `1`).
    Float(f64),

    /// Text, rendered verbatim
    Text(String),
}

impl FieldValue {
    /// Whether this value is `Null` or `Undefined`
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, FieldValue::Null | FieldValue::Undefined)
    }
}

/// Outside `[1e-6, 1e21)` numbers switch to exponent notation
const EXPONENT_MIN: f64 = 1e-6;
const EXPONENT_MAX: f64 = 1e21;

/// Shortest round-trip digits, in plain or exponent form
///
/// Plain form never has a trailing `.0`. Exponent form always carries a sign
/// on the exponent (`1e+21`, `1.5e-7`).
fn fmt_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        // covers -0.0
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (EXPONENT_MIN..EXPONENT_MAX).contains(&magnitude) {
        // f64 Display prints integral values without a fractional part
        return write!(f, "{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&scientific),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Undefined => f.write_str("undefined"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Unsigned(u) => write!(f, "{}", u),
            FieldValue::Float(x) => fmt_float(*x, f),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => FieldValue::Integer(i),
            Err(_) => FieldValue::Unsigned(value),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
