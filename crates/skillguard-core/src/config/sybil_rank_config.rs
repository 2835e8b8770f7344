use serde::{Deserialize, Serialize};

use super::{defaults, ensure_at_least, ensure_unit};
use crate::errors::ConfigError;

/// How the initial trust budget is split among seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedInitialization {
    /// Every seed gets an equal share.
    Uniform,
    /// A seed's share is its degree over the sum of seed degrees.
    DegreeWeighted,
}

/// Seed-trust power iteration over the feedback graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SybilRankConfig {
    pub enabled: bool,
    /// Upper bound on rounds; the effective count is
    /// `min(max_iterations, ceil(log2(node_count + 1)))`. Default: 20.
    pub max_iterations: usize,
    /// Normalized trust below this is flagged. Default: 0.2.
    pub trust_threshold: f64,
    /// Floor of the graduated weight. Default: 0.3.
    pub discount_factor: f64,
    /// Fraction of submitters (by seed score) used as seeds. Default: 0.25.
    pub seed_fraction: f64,
    pub seed_initialization: SeedInitialization,
}

impl SybilRankConfig {
    pub const RECOMMENDED: Self = Self {
        enabled: true,
        max_iterations: defaults::DEFAULT_SYBIL_RANK_MAX_ITERATIONS,
        trust_threshold: defaults::DEFAULT_SYBIL_RANK_TRUST_THRESHOLD,
        discount_factor: defaults::DEFAULT_SYBIL_RANK_DISCOUNT,
        seed_fraction: defaults::DEFAULT_SYBIL_RANK_SEED_FRACTION,
        seed_initialization: SeedInitialization::DegreeWeighted,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_at_least("sybil_rank.max_iterations", self.max_iterations, 1)?;
        ensure_unit("sybil_rank.trust_threshold", self.trust_threshold)?;
        if self.trust_threshold <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "sybil_rank.trust_threshold",
                value: self.trust_threshold,
                expected: "(0, 1]",
            });
        }
        ensure_unit("sybil_rank.discount_factor", self.discount_factor)?;
        ensure_unit("sybil_rank.seed_fraction", self.seed_fraction)
    }
}

impl Default for SybilRankConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
