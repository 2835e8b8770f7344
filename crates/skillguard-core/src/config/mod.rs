//! Mitigation configuration.
//!
//! One section per detector, each with an `enabled` flag plus its own
//! parameters. Sections default individually, so a partial TOML document
//! fills the rest from [`MitigationConfig::RECOMMENDED`].
//!
//! # Examples
//!
//! ```
//! use skillguard_core::config::MitigationConfig;
//!
//! let naive = MitigationConfig::NAIVE_BASELINE;
//! assert!(naive.is_naive());
//!
//! let config = MitigationConfig::from_toml("[velocity]\nmax_in_window = 4\n").unwrap();
//! assert_eq!(config.velocity.max_in_window, 4);
//! assert!(config.graph.enabled);
//! ```

pub mod defaults;
mod decay_config;
mod graph_config;
mod jaccard_config;
mod sybil_rank_config;
mod temporal_config;
mod velocity_config;

pub use decay_config::{SubmitterRecencyConfig, TemporalDecayConfig};
pub use graph_config::GraphConfig;
pub use jaccard_config::JaccardConfig;
pub use sybil_rank_config::{SeedInitialization, SybilRankConfig};
pub use temporal_config::TemporalCorrelationConfig;
pub use velocity_config::{AnomalyConfig, VelocityConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SkillguardResult};
use crate::models::MitigationKind;

/// Full mitigation configuration for the hardened engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MitigationConfig {
    pub graph: GraphConfig,
    pub velocity: VelocityConfig,
    pub anomaly: AnomalyConfig,
    pub temporal_decay: TemporalDecayConfig,
    pub submitter_recency: SubmitterRecencyConfig,
    pub sybil_rank: SybilRankConfig,
    pub jaccard: JaccardConfig,
    pub temporal_correlation: TemporalCorrelationConfig,
}

impl MitigationConfig {
    /// Every mitigation disabled. Scoring with this is the naive mean.
    pub const NAIVE_BASELINE: Self = Self {
        graph: GraphConfig {
            enabled: false,
            ..GraphConfig::RECOMMENDED
        },
        velocity: VelocityConfig {
            enabled: false,
            ..VelocityConfig::RECOMMENDED
        },
        anomaly: AnomalyConfig {
            enabled: false,
            ..AnomalyConfig::RECOMMENDED
        },
        temporal_decay: TemporalDecayConfig {
            enabled: false,
            ..TemporalDecayConfig::RECOMMENDED
        },
        submitter_recency: SubmitterRecencyConfig {
            enabled: false,
            ..SubmitterRecencyConfig::RECOMMENDED
        },
        sybil_rank: SybilRankConfig {
            enabled: false,
            ..SybilRankConfig::RECOMMENDED
        },
        jaccard: JaccardConfig {
            enabled: false,
            ..JaccardConfig::RECOMMENDED
        },
        temporal_correlation: TemporalCorrelationConfig {
            enabled: false,
            ..TemporalCorrelationConfig::RECOMMENDED
        },
    };

    /// Recommended production defaults.
    pub const RECOMMENDED: Self = Self {
        graph: GraphConfig::RECOMMENDED,
        velocity: VelocityConfig::RECOMMENDED,
        anomaly: AnomalyConfig::RECOMMENDED,
        temporal_decay: TemporalDecayConfig::RECOMMENDED,
        submitter_recency: SubmitterRecencyConfig::RECOMMENDED,
        sybil_rank: SybilRankConfig::RECOMMENDED,
        jaccard: JaccardConfig::RECOMMENDED,
        temporal_correlation: TemporalCorrelationConfig::RECOMMENDED,
    };

    /// Parse and validate a TOML document. Missing keys keep recommended values.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> SkillguardResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check every section's parameters, including disabled ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graph.validate()?;
        self.velocity.validate()?;
        self.anomaly.validate()?;
        self.temporal_decay.validate()?;
        self.submitter_recency.validate()?;
        self.sybil_rank.validate()?;
        self.jaccard.validate()?;
        self.temporal_correlation.validate()
    }

    /// Whether a given mitigation is switched on.
    pub fn is_enabled(&self, kind: MitigationKind) -> bool {
        match kind {
            MitigationKind::GraphAnalysis => self.graph.enabled,
            MitigationKind::Velocity => self.velocity.enabled,
            MitigationKind::Anomaly => self.anomaly.enabled,
            MitigationKind::TemporalDecay => self.temporal_decay.enabled,
            MitigationKind::SubmitterRecency => self.submitter_recency.enabled,
            MitigationKind::SybilRank => self.sybil_rank.enabled,
            MitigationKind::Jaccard => self.jaccard.enabled,
            MitigationKind::TemporalCorrelation => self.temporal_correlation.enabled,
        }
    }

    /// Enabled mitigations in evaluation order.
    pub fn enabled_kinds(&self) -> Vec<MitigationKind> {
        MitigationKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// True when no mitigation is enabled.
    pub fn is_naive(&self) -> bool {
        !MitigationKind::ALL.iter().any(|kind| self.is_enabled(*kind))
    }

    /// Copy of this config with exactly one mitigation enabled.
    pub fn only(kind: MitigationKind) -> Self {
        let mut config = Self::NAIVE_BASELINE;
        config.set_enabled(kind, true);
        config
    }

    /// Toggle one mitigation.
    pub fn set_enabled(&mut self, kind: MitigationKind, enabled: bool) {
        match kind {
            MitigationKind::GraphAnalysis => self.graph.enabled = enabled,
            MitigationKind::Velocity => self.velocity.enabled = enabled,
            MitigationKind::Anomaly => self.anomaly.enabled = enabled,
            MitigationKind::TemporalDecay => self.temporal_decay.enabled = enabled,
            MitigationKind::SubmitterRecency => self.submitter_recency.enabled = enabled,
            MitigationKind::SybilRank => self.sybil_rank.enabled = enabled,
            MitigationKind::Jaccard => self.jaccard.enabled = enabled,
            MitigationKind::TemporalCorrelation => self.temporal_correlation.enabled = enabled,
        }
    }
}

impl Default for MitigationConfig {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

pub(crate) fn ensure_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "[0, 1]",
        })
    }
}

pub(crate) fn ensure_positive_ms(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value as f64,
            expected: "> 0 ms",
        })
    }
}

pub(crate) fn ensure_at_least(
    field: &'static str,
    value: usize,
    min: usize,
) -> Result<(), ConfigError> {
    if value >= min {
        Ok(())
    } else {
        Err(ConfigError::BelowMinimum { field, value, min })
    }
}
