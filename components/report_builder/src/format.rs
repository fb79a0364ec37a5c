//! Number formatting for report cells
//!
//! Values arrive as raw JSON from the load-generator document. Absent values
//! render as zero.

use crate::error::{ReportError, ReportResult};
use serde_json::Value;

/// Decimal places for duration and ratio cells
pub const DEFAULT_PLACES: usize = 6;

/// Render an integer with `,` thousands separators
///
/// # Example
/// ```
/// use report_builder::format::group_thousands;
///
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// assert_eq!(group_thousands(-1000), "-1,000");
/// ```
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Integer cell with thousands separators
///
/// Floats are truncated toward zero; integer strings and booleans are
/// accepted.
pub fn format_int(field: &str, value: Option<&Value>) -> ReportResult<String> {
    let n = match value {
        None => 0,
        Some(v) => as_integer(v).ok_or_else(|| invalid(field, v))?,
    };
    Ok(group_thousands(n))
}

/// Fixed-precision decimal cell
pub fn format_float(field: &str, value: Option<&Value>, places: usize) -> ReportResult<String> {
    let x = match value {
        None => 0.0,
        Some(v) => as_float(v).ok_or_else(|| invalid(field, v))?,
    };
    Ok(format!("{:.*}", places, x))
}

/// Cell showing the value as-is
///
/// Strings are unquoted. Booleans and null use the `True`/`False`/`None`
/// spelling that earlier reports were published with.
pub fn format_plain(value: Option<&Value>) -> String {
    match value {
        None => "0".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::Null) => "None".to_string(),
        Some(other) => other.to_string(),
    }
}

fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(i128::from(u))
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i128)
            }
        }
        Value::Bool(b) => Some(i128::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn invalid(field: &str, value: &Value) -> ReportError {
    ReportError::InvalidNumber {
        field: field.to_string(),
        value: value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(-12), "-12");
        assert_eq!(group_thousands(-123456789), "-123,456,789");
    }

    #[test]
    fn test_format_int_variants() {
        assert_eq!(format_int("f", None).unwrap(), "0");
        assert_eq!(format_int("f", Some(&json!(52428800))).unwrap(), "52,428,800");
        assert_eq!(format_int("f", Some(&json!(1999.9))).unwrap(), "1,999");
        assert_eq!(format_int("f", Some(&json!(-2.7))).unwrap(), "-2");
        assert_eq!(format_int("f", Some(&json!("4096"))).unwrap(), "4,096");
        assert_eq!(format_int("f", Some(&json!(true))).unwrap(), "1");
        assert_eq!(
            format_int("f", Some(&json!(u64::MAX))).unwrap(),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_format_int_rejects_non_numeric() {
        let err = format_int("resources.max_sys_bytes", Some(&json!("lots"))).unwrap_err();
        assert!(err.to_string().contains("resources.max_sys_bytes"));
        assert!(format_int("f", Some(&json!(null))).is_err());
        assert!(format_int("f", Some(&json!([1]))).is_err());
    }

    #[test]
    fn test_format_float_places() {
        assert_eq!(format_float("f", None, DEFAULT_PLACES).unwrap(), "0.000000");
        assert_eq!(format_float("f", Some(&json!(1.5)), DEFAULT_PLACES).unwrap(), "1.500000");
        assert_eq!(format_float("f", Some(&json!(12.34567)), 4).unwrap(), "12.3457");
        assert_eq!(format_float("f", Some(&json!(3)), 4).unwrap(), "3.0000");
        assert_eq!(format_float("f", Some(&json!("0.25")), 2).unwrap(), "0.25");
    }

    #[test]
    fn test_format_float_rejects_non_numeric() {
        assert!(format_float("f", Some(&json!({"a": 1})), 6).is_err());
        assert!(format_float("f", Some(&json!("fast")), 6).is_err());
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(None), "0");
        assert_eq!(format_plain(Some(&json!("full"))), "full");
        assert_eq!(format_plain(Some(&json!(0.995))), "0.995");
        assert_eq!(format_plain(Some(&json!(1200))), "1200");
        assert_eq!(format_plain(Some(&json!(false))), "False");
        assert_eq!(format_plain(Some(&json!(true))), "True");
        assert_eq!(format_plain(Some(&json!(null))), "None");
    }
}
