use serde::{Deserialize, Serialize};

use super::{defaults, ensure_at_least, ensure_unit};
use crate::errors::ConfigError;

/// Behavioral-overlap clustering of reviewers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaccardConfig {
    pub enabled: bool,
    /// Submitters rating fewer distinct agents are not profiled. Default: 2.
    pub min_agents_reviewed: usize,
    /// Pairs must exceed this on both raw and combined similarity. Default: 0.7.
    pub similarity_threshold: f64,
    /// Smallest connected component treated as a cluster. Default: 3.
    pub min_cluster_size: usize,
    /// Default: 0.15.
    pub discount_factor: f64,
}

impl JaccardConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        min_agents_reviewed: defaults::DEFAULT_JACCARD_MIN_AGENTS_REVIEWED,
        similarity_threshold: defaults::DEFAULT_JACCARD_SIMILARITY_THRESHOLD,
        min_cluster_size: defaults::DEFAULT_JACCARD_MIN_CLUSTER_SIZE,
        discount_factor: defaults::DEFAULT_JACCARD_DISCOUNT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_at_least("jaccard.min_agents_reviewed", self.min_agents_reviewed, 1)?;
        ensure_unit("jaccard.similarity_threshold", self.similarity_threshold)?;
        ensure_at_least("jaccard.min_cluster_size", self.min_cluster_size, 2)?;
        ensure_unit("jaccard.discount_factor", self.discount_factor)
    }
}

impl Default for JaccardConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
