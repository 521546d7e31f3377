use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Canonical ternary value of a cleaned cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Response {
    #[default]
    Missing,
    Incorrect,
    Correct,
}

impl Response {
    /// Maps 0/1 to a response; any other integer is `None`.
    pub fn from_binary(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Incorrect),
            1 => Some(Self::Correct),
            _ => None,
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value { Self::Correct } else { Self::Incorrect }
    }

    pub fn as_u8(self) -> Option<u8> {
        match self {
            Self::Missing => None,
            Self::Incorrect => Some(0),
            Self::Correct => Some(1),
        }
    }

    /// True for 0 and 1.
    pub fn is_observed(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_u8() {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_u8().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<u8>::deserialize(deserializer)? {
            None => Ok(Self::Missing),
            Some(value) => Self::from_binary(i64::from(value)).ok_or_else(|| {
                serde::de::Error::custom(format!("response must be 0, 1 or null, got {value}"))
            }),
        }
    }
}

/// Constant used to replace missing responses after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMissing {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl FillMissing {
    pub fn response(self) -> Response {
        match self {
            Self::Zero => Response::Incorrect,
            Self::One => Response::Correct,
        }
    }
}

/// Error returned when a fill value is not `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fill value must be 0 or 1, got '{0}'")]
pub struct InvalidFillValue(pub String);

impl FromStr for FillMissing {
    type Err = InvalidFillValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Zero),
            "1" => Ok(Self::One),
            other => Err(InvalidFillValue(other.to_string())),
        }
    }
}
