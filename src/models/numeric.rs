//! Lenient numeric deserializers for quantity inputs.
//!
//! Field-entry payloads carry counts that may arrive as numbers, numeric
//! strings, empty strings, or nulls. Per the input contract this is
//! data-entry normalization, not an error: anything non-numeric or negative
//! clamps to zero, and fractional counts truncate toward zero. The
//! normalization happens here at the deserialization boundary so the
//! calculators only ever see well-formed values.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

fn clamp_count(raw: RawNumber) -> u32 {
    match raw {
        RawNumber::Int(i) => i.clamp(0, u32::MAX as i64) as u32,
        RawNumber::Float(f) => {
            let truncated = f.trunc();
            if truncated.is_finite() && truncated > 0.0 {
                truncated.min(u32::MAX as f64) as u32
            } else {
                0
            }
        }
        RawNumber::Text(s) => match f64::from_str(s.trim()) {
            Ok(f) => clamp_count(RawNumber::Float(f)),
            Err(_) => 0,
        },
        RawNumber::Null(()) => 0,
    }
}

fn clamp_decimal(raw: RawNumber) -> Decimal {
    let value = match raw {
        RawNumber::Int(i) => Decimal::from(i),
        RawNumber::Float(f) => Decimal::from_f64_retain(f).unwrap_or(Decimal::ZERO),
        RawNumber::Text(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        RawNumber::Null(()) => Decimal::ZERO,
    };
    value.max(Decimal::ZERO)
}

/// Deserializes a whole-number quantity, clamping to `>= 0`.
///
/// Non-numeric or empty input becomes 0; fractional input truncates toward
/// zero and then floors at 0.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(clamp_count(RawNumber::deserialize(deserializer)?))
}

/// Deserializes a non-negative decimal quantity, clamping to `>= 0`.
///
/// Non-numeric or empty input becomes zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(clamp_decimal(RawNumber::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct CountHolder {
        #[serde(default, deserialize_with = "lenient_count")]
        value: u32,
    }

    #[derive(Deserialize)]
    struct DecimalHolder {
        #[serde(default, deserialize_with = "lenient_decimal")]
        value: Decimal,
    }

    fn count_of(json: &str) -> u32 {
        serde_json::from_str::<CountHolder>(json).unwrap().value
    }

    fn decimal_of(json: &str) -> Decimal {
        serde_json::from_str::<DecimalHolder>(json).unwrap().value
    }

    #[test]
    fn test_count_from_integer() {
        assert_eq!(count_of(r#"{"value": 12}"#), 12);
    }

    #[test]
    fn test_count_from_numeric_string() {
        assert_eq!(count_of(r#"{"value": "7"}"#), 7);
    }

    #[test]
    fn test_count_negative_clamps_to_zero() {
        assert_eq!(count_of(r#"{"value": -3}"#), 0);
        assert_eq!(count_of(r#"{"value": "-3"}"#), 0);
    }

    #[test]
    fn test_count_fractional_truncates_toward_zero() {
        assert_eq!(count_of(r#"{"value": 4.9}"#), 4);
        assert_eq!(count_of(r#"{"value": "4.9"}"#), 4);
        assert_eq!(count_of(r#"{"value": -0.5}"#), 0);
    }

    #[test]
    fn test_count_non_numeric_is_zero() {
        assert_eq!(count_of(r#"{"value": "abc"}"#), 0);
        assert_eq!(count_of(r#"{"value": ""}"#), 0);
        assert_eq!(count_of(r#"{"value": null}"#), 0);
    }

    #[test]
    fn test_count_missing_field_defaults_to_zero() {
        assert_eq!(count_of(r#"{}"#), 0);
    }

    #[test]
    fn test_decimal_from_number_and_string() {
        assert_eq!(decimal_of(r#"{"value": 2.5}"#), Decimal::new(25, 1));
        assert_eq!(decimal_of(r#"{"value": "2.5"}"#), Decimal::new(25, 1));
    }

    #[test]
    fn test_decimal_negative_clamps_to_zero() {
        assert_eq!(decimal_of(r#"{"value": "-10"}"#), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_non_numeric_is_zero() {
        assert_eq!(decimal_of(r#"{"value": "n/a"}"#), Decimal::ZERO);
        assert_eq!(decimal_of(r#"{"value": null}"#), Decimal::ZERO);
    }
}
