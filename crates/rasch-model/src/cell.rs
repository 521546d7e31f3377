//! Raw, untyped input cells and the ragged grid that holds them.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One cell of an uploaded grid, before any interpretation.
///
/// Exports mix booleans, numbers and free text in the same column, so the
/// representation is kept explicit and normalization matches on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawCell {
    /// Absent value (JSON `null`, an empty delimited field, or row padding).
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawCell {
    /// Returns true for absent cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::Float(_) => false,
        }
    }

    /// Returns the text payload if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text.trim()),
        }
    }
}

impl From<Value> for RawCell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else {
                    // u64 beyond i64 range and real numbers
                    number.as_f64().map_or(Self::Empty, Self::Float)
                }
            }
            Value::String(text) => Self::Text(text),
            // Nested values only survive through their textual form.
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Text(nested.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for RawCell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawCell {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T> From<Option<T>> for RawCell
where
    T: Into<RawCell>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// An ordered, possibly ragged grid of raw cells.
///
/// The first row is usually a header but nothing here assumes it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct RawMatrix {
    rows: Vec<Vec<RawCell>>,
}

impl RawMatrix {
    pub fn new(rows: Vec<Vec<RawCell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    /// Number of rows, blank ones included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns a rectangular copy, short rows padded with [`RawCell::Empty`].
    pub fn padded(&self) -> Vec<Vec<RawCell>> {
        let width = self.width();
        self.rows
            .iter()
            .map(|row| {
                let mut padded = row.clone();
                padded.resize(width, RawCell::Empty);
                padded
            })
            .collect()
    }
}

impl FromIterator<Vec<RawCell>> for RawMatrix {
    fn from_iter<I: IntoIterator<Item = Vec<RawCell>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
