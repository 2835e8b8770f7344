use serde::{Deserialize, Serialize};

use super::{defaults, ensure_positive_ms, ensure_unit};
use crate::errors::ConfigError;

/// Exponential recency weighting of feedback.
///
/// Off in the recommended config: with a one-day half-life it expresses a
/// freshness preference rather than a manipulation signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalDecayConfig {
    pub enabled: bool,
    /// Age at which an entry's weight halves. Default: 1 day.
    pub half_life_ms: i64,
}

impl TemporalDecayConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: false,
        half_life_ms: defaults::DEFAULT_DECAY_HALF_LIFE_MS,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive_ms("temporal_decay.half_life_ms", self.half_life_ms)
    }
}

impl Default for TemporalDecayConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

/// Discount for the most recently joined submitter cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitterRecencyConfig {
    pub enabled: bool,
    /// Fraction of submitters, newest first, treated as new. Default: 0.2.
    pub recent_threshold: f64,
    /// Default: 0.2.
    pub discount_factor: f64,
}

impl SubmitterRecencyConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        recent_threshold: defaults::DEFAULT_RECENT_THRESHOLD,
        discount_factor: defaults::DEFAULT_RECENCY_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unit("submitter_recency.recent_threshold", self.recent_threshold)?;
        ensure_unit("submitter_recency.discount_factor", self.discount_factor)
    }
}

impl Default for SubmitterRecencyConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
