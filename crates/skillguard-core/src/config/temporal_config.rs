use serde::{Deserialize, Serialize};

use super::{defaults, ensure_at_least, ensure_positive_ms, ensure_unit};
use crate::errors::ConfigError;

/// Lockstep timing and regular-interval bot detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalCorrelationConfig {
    pub enabled: bool,
    /// Both submitters need at least this many events, and the pair needs at
    /// least this many coincidences. Default: 3.
    pub min_lockstep_events: usize,
    /// Two events this close are a coincidence. Default: 5s.
    pub lockstep_window_ms: i64,
    /// Coincidences over the shorter timeline must exceed this. Default: 0.5.
    pub min_coincidence_rate: f64,
    /// Submitters with fewer events skip the regularity check. Default: 5.
    pub min_feedback_for_regularity: usize,
    /// Interval coefficient of variation below this is mechanical. Default: 0.15.
    pub regularity_threshold: f64,
    /// Default: 0.2.
    pub discount_factor: f64,
}

impl TemporalCorrelationConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        min_lockstep_events: defaults::DEFAULT_MIN_LOCKSTEP_EVENTS,
        lockstep_window_ms: defaults::DEFAULT_LOCKSTEP_WINDOW_MS,
        min_coincidence_rate: defaults::DEFAULT_MIN_COINCIDENCE_RATE,
        min_feedback_for_regularity: defaults::DEFAULT_MIN_FEEDBACK_FOR_REGULARITY,
        regularity_threshold: defaults::DEFAULT_REGULARITY_THRESHOLD,
        discount_factor: defaults::DEFAULT_TEMPORAL_CORRELATION_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_at_least(
            "temporal_correlation.min_lockstep_events",
            self.min_lockstep_events,
            1,
        )?;
        ensure_positive_ms(
            "temporal_correlation.lockstep_window_ms",
            self.lockstep_window_ms,
        )?;
        ensure_unit(
            "temporal_correlation.min_coincidence_rate",
            self.min_coincidence_rate,
        )?;
        ensure_at_least(
            "temporal_correlation.min_feedback_for_regularity",
            self.min_feedback_for_regularity,
            3,
        )?;
        if !(self.regularity_threshold.is_finite() && self.regularity_threshold >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "temporal_correlation.regularity_threshold",
                value: self.regularity_threshold,
                expected: ">= 0",
            });
        }
        ensure_unit("temporal_correlation.discount_factor", self.discount_factor)
    }
}

impl Default for TemporalCorrelationConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
