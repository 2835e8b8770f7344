use serde::{Deserialize, Serialize};

use super::{defaults, ensure_unit};
use crate::errors::ConfigError;

/// Mutual-feedback pair and Sybil cluster detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub enabled: bool,
    /// Weight applied to flagged entries, and the floor of the Sybil-fraction
    /// penalty. Default: 0.1.
    pub discount_factor: f64,
}

impl GraphConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        discount_factor: defaults::DEFAULT_GRAPH_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unit("graph.discount_factor", self.discount_factor)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
