//! Number and cell formatting for result tables.

use contracts::shared::visualization::ColumnType;
use serde_json::Value;

use crate::shared::date_utils::{format_date, format_datetime};

/// Thousands separated by a space, `decimals` digits after the point (max 3).
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals.min(3)), value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Text for one result cell, formatted by the column's declared type.
pub fn format_cell(value: &Value, column_type: Option<ColumnType>) -> String {
    match (value, column_type) {
        (Value::Null, _) => String::new(),
        (Value::Number(n), Some(ColumnType::Integer)) => n
            .as_i64()
            .map(|i| format_number_int(i as f64))
            .unwrap_or_else(|| n.to_string()),
        (Value::Number(n), _) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => format_number_int(i as f64),
            (None, Some(f)) => format_number_with_decimals(f, 2),
            _ => n.to_string(),
        },
        (Value::String(s), Some(ColumnType::Datetime)) => format_datetime(s),
        (Value::String(s), Some(ColumnType::Date)) => format_date(s),
        (Value::String(s), _) => s.clone(),
        (Value::Bool(b), _) => b.to_string(),
        (other, _) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(0.5, 2), "0.50");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_number_int(-123456.0), "-123 456");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!(null), None), "");
        assert_eq!(format_cell(&json!(1500), Some(ColumnType::Integer)), "1 500");
        assert_eq!(format_cell(&json!(1200.5), Some(ColumnType::Float)), "1 200.50");
        assert_eq!(format_cell(&json!("DE"), Some(ColumnType::String)), "DE");
        assert_eq!(format_cell(&json!(true), Some(ColumnType::Boolean)), "true");
        assert_eq!(
            format_cell(&json!("2024-03-15T14:02:26Z"), Some(ColumnType::Datetime)),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_cell(&json!("2024-03-15"), Some(ColumnType::Date)), "15.03.2024");
    }
}
