use serde::{Deserialize, Serialize};

use super::{defaults, ensure_at_least, ensure_positive_ms, ensure_unit};
use crate::errors::ConfigError;

/// Per-agent rating burst detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    pub enabled: bool,
    /// Sliding window width. Default: 60s.
    pub window_ms: i64,
    /// A window holding more entries than this is a burst. Default: 10.
    pub max_in_window: usize,
    /// Default: 0.5.
    pub discount_factor: f64,
}

impl VelocityConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        window_ms: defaults::DEFAULT_VELOCITY_WINDOW_MS,
        max_in_window: defaults::DEFAULT_VELOCITY_MAX_IN_WINDOW,
        discount_factor: defaults::DEFAULT_VELOCITY_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive_ms("velocity.window_ms", self.window_ms)?;
        ensure_at_least("velocity.max_in_window", self.max_in_window, 1)?;
        ensure_unit("velocity.discount_factor", self.discount_factor)
    }
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

/// New-submitter sign-up wave detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    pub enabled: bool,
    /// Sliding window width over first-seen times. Default: 1h.
    pub window_ms: i64,
    /// More distinct new submitters than this in one window is a wave. Default: 5.
    pub max_new_in_window: usize,
    /// Default: 0.1.
    pub discount_factor: f64,
}

impl AnomalyConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        window_ms: defaults::DEFAULT_ANOMALY_WINDOW_MS,
        max_new_in_window: defaults::DEFAULT_ANOMALY_MAX_NEW_IN_WINDOW,
        discount_factor: defaults::DEFAULT_ANOMALY_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive_ms("anomaly.window_ms", self.window_ms)?;
        ensure_at_least("anomaly.max_new_in_window", self.max_new_in_window, 1)?;
        ensure_unit("anomaly.discount_factor", self.discount_factor)
    }
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
