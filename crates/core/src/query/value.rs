//! Typed views over raw record values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use super::error::QueryError;
use crate::statement::json_kind;

/// Number of leading characters of a date that hold the year.
const YEAR_PREFIX_LEN: usize = 4;

/// Converts a JSON number to a decimal.
///
/// Magnitudes beyond the decimal range saturate at `Decimal::MAX`/`Decimal::MIN`
/// and digits past the 28th decimal place are rounded away.
pub(crate) fn number_to_decimal(number: &Number) -> Decimal {
    if let Some(i) = number.as_i64() {
        return Decimal::from(i);
    }
    if let Some(u) = number.as_u64() {
        return Decimal::from(u);
    }

    // Parse the shortest round-trip text so 1.1 stays exactly 1.1.
    let text = number.to_string();
    Decimal::from_str(&text)
        .ok()
        .or_else(|| scientific_to_decimal(&text))
        .unwrap_or_else(|| saturated(number.as_f64().is_some_and(f64::is_sign_negative)))
}

/// Scales a `<mantissa>e<exponent>` text one power of ten at a time.
fn scientific_to_decimal(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i32 = exponent.parse().ok()?;

    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            match value.checked_mul(Decimal::TEN) {
                Some(scaled) => scaled,
                None => return Some(saturated(value.is_sign_negative())),
            }
        } else {
            value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        };
    }

    Some(value)
}

const fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Numeric view of a value. Booleans count as 0 and 1.
pub(crate) fn numeric(field: &str, value: &Value) -> Result<Decimal, QueryError> {
    match value {
        Value::Number(n) => Ok(number_to_decimal(n)),
        Value::Bool(b) => Ok(Decimal::from(u8::from(*b))),
        _ => Err(QueryError::TypeMismatch {
            field: field.to_string(),
            expected: "a decimal number",
            found: json_kind(value),
        }),
    }
}

/// Year encoded in the first four characters of a date string.
pub(crate) fn year(field: &str, value: &Value) -> Result<i64, QueryError> {
    let Value::String(date) = value else {
        return Err(QueryError::TypeMismatch {
            field: field.to_string(),
            expected: "a date string",
            found: json_kind(value),
        });
    };

    let prefix: String = date.chars().take(YEAR_PREFIX_LEN).collect();
    prefix
        .trim()
        .parse::<i64>()
        .map_err(|_| QueryError::InvalidDate {
            field: field.to_string(),
            value: date.clone(),
        })
}
