//! Generated cell values.

use std::fmt;

/// A single generated cell value.
///
/// Datasets are single-column, so the value model stays deliberately small:
/// integers for sampled numeric columns, text for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value (ages, counts)
    Int(i64),
    /// Text value (names, formatted dates, addresses)
    Text(String),
}

impl Value {
    /// Render the value as a CSV field.
    pub fn to_field(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_field() {
        assert_eq!(Value::Int(42).to_field(), "42");
        assert_eq!(Value::Text("hello".to_string()).to_field(), "hello");
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Value::Int(-3).as_int(), Some(-3));
        assert_eq!(Value::Text("3".to_string()).as_int(), None);
    }
}
