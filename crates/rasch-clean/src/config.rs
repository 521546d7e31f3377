//! Thresholds that drive item-column inference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or checking a [`CleanConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse cleaning config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },

    #[error("relaxed_binary_ratio ({relaxed}) must not exceed min_binary_ratio ({strict})")]
    RelaxedAboveStrict { relaxed: f64, strict: f64 },

    #[error("block_target.min ({min}) must not exceed block_target.max ({max})")]
    EmptyBlockTarget { min: usize, max: usize },

    #[error("block_target.max must be at least 1")]
    ZeroBlockTarget,

    #[error("fallback_top_n must be at least 1")]
    ZeroFallback,
}

/// Inclusive range of item counts a test is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCountRange {
    pub min: usize,
    pub max: usize,
}

impl ItemCountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// 0 inside the range, else the distance to the nearer bound.
    pub fn distance(&self, len: usize) -> usize {
        if len < self.min {
            self.min - len
        } else if len > self.max {
            len - self.max
        } else {
            0
        }
    }
}

impl Default for ItemCountRange {
    fn default() -> Self {
        Self::new(35, 55)
    }
}

/// Configuration for the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Binary ratio at which an unlabelled column counts as an item.
    pub min_binary_ratio: f64,
    /// Threshold used when nothing reaches `min_binary_ratio`.
    pub relaxed_binary_ratio: f64,
    /// Preferred number of contiguous item columns; longer runs are cut to `max`.
    pub block_target: ItemCountRange,
    /// Columns taken by ratio rank when no candidate exists at all.
    pub fallback_top_n: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_binary_ratio: 0.85,
            relaxed_binary_ratio: 0.70,
            block_target: ItemCountRange::default(),
            fallback_top_n: 40,
        }
    }
}

impl CleanConfig {
    /// Parses a (possibly partial) JSON config; missing fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_binary_ratio", self.min_binary_ratio),
            ("relaxed_binary_ratio", self.relaxed_binary_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { field, value });
            }
        }
        if self.relaxed_binary_ratio > self.min_binary_ratio {
            return Err(ConfigError::RelaxedAboveStrict {
                relaxed: self.relaxed_binary_ratio,
                strict: self.min_binary_ratio,
            });
        }
        if self.block_target.max == 0 {
            return Err(ConfigError::ZeroBlockTarget);
        }
        if self.block_target.min > self.block_target.max {
            return Err(ConfigError::EmptyBlockTarget {
                min: self.block_target.min,
                max: self.block_target.max,
            });
        }
        if self.fallback_top_n == 0 {
            return Err(ConfigError::ZeroFallback);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CleanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_target, ItemCountRange::new(35, 55));
        assert_eq!(config.fallback_top_n, 40);
    }

    #[test]
    fn distance_to_range() {
        let range = ItemCountRange::default();
        assert_eq!(range.distance(20), 15);
        assert_eq!(range.distance(35), 0);
        assert_eq!(range.distance(55), 0);
        assert_eq!(range.distance(70), 15);
    }

    #[test]
    fn zero_width_block_target_is_rejected() {
        let config = CleanConfig {
            block_target: ItemCountRange::new(0, 0),
            ..CleanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroBlockTarget)
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CleanConfig::from_json_str(r#"{"fallback_top_n": 25}"#).expect("parse");
        assert_eq!(config.fallback_top_n, 25);
        assert!((config.min_binary_ratio - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = CleanConfig::from_json_str(r#"{"min_binary_ratio": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::RatioOutOfRange { .. }));

        let err = CleanConfig::from_json_str(r#"{"relaxed_binary_ratio": 0.9}"#).unwrap_err();
        assert!(matches!(err, ConfigError::RelaxedAboveStrict { .. }));

        let err =
            CleanConfig::from_json_str(r#"{"block_target": {"min": 10, "max": 5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBlockTarget { .. }));

        let err =
            CleanConfig::from_json_str(r#"{"block_target": {"min": 0, "max": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBlockTarget));

        let err = CleanConfig::from_json_str(r#"{"fallback_top_n": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroFallback));

        let err = CleanConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
