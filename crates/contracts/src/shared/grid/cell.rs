use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value of a single grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Integer value
    Integer(i64),
    /// Ordered list (note logs)
    List(Vec<String>),
    /// Missing value
    Null,
}

impl CellValue {
    /// Numeric view of the cell; text is never coerced
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CellValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Plain stringification used by search, sort and CSV export.
/// Lists join with `,`, `Null` is empty.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::List(items) => f.write_str(&items.join(",")),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        CellValue::List(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// A row the grid can read fields from by name.
///
/// Unknown fields must return `CellValue::Null`.
pub trait GridRow {
    fn field(&self, field: &str) -> CellValue;
}

/// Loosely typed record, handy for ad-hoc tables
impl GridRow for HashMap<String, CellValue> {
    fn field(&self, field: &str) -> CellValue {
        self.get(field).cloned().unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::from("Acme").to_string(), "Acme");
        assert_eq!(CellValue::Number(1200.0).to_string(), "1200");
        assert_eq!(CellValue::Number(4.5).to_string(), "4.5");
        assert_eq!(CellValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(CellValue::Integer(-3).to_string(), "-3");
        assert_eq!(
            CellValue::List(vec!["a".into(), "b".into()]).to_string(),
            "a,b"
        );
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Integer(7).as_number(), Some(7.0));
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::from("12").as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CellValue::from(None::<String>), CellValue::Null);
        assert_eq!(
            CellValue::from(Some("2025-01-01".to_string())),
            CellValue::Text("2025-01-01".into())
        );
    }
}
