//! The universal output contract shared by every detection algorithm.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::NEUTRAL_WEIGHT;

/// Which detector produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MitigationKind {
    GraphAnalysis,
    Velocity,
    Anomaly,
    TemporalDecay,
    SubmitterRecency,
    SybilRank,
    Jaccard,
    TemporalCorrelation,
}

impl MitigationKind {
    /// Evaluation order used by the hardened engine.
    pub const ALL: [MitigationKind; 8] = [
        MitigationKind::GraphAnalysis,
        MitigationKind::Velocity,
        MitigationKind::Anomaly,
        MitigationKind::TemporalDecay,
        MitigationKind::SubmitterRecency,
        MitigationKind::SybilRank,
        MitigationKind::Jaccard,
        MitigationKind::TemporalCorrelation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MitigationKind::GraphAnalysis => "graph_analysis",
            MitigationKind::Velocity => "velocity",
            MitigationKind::Anomaly => "anomaly",
            MitigationKind::TemporalDecay => "temporal_decay",
            MitigationKind::SubmitterRecency => "submitter_recency",
            MitigationKind::SybilRank => "sybil_rank",
            MitigationKind::Jaccard => "jaccard",
            MitigationKind::TemporalCorrelation => "temporal_correlation",
        }
    }
}

impl fmt::Display for MitigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason code attached to a discounted feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MitigationFlag {
    /// Submitter and agent rated each other (or the submitter rated itself).
    MutualFeedback,
    /// Submitter or agent belongs to a mutual-rating cluster.
    SybilCluster,
    /// Entry sits inside a too-dense rating window.
    VelocityBurst,
    /// Entry sits inside a wave of first-time submitters.
    NewSubmitterBurst,
    /// Submitter is in the most recently joined cohort.
    NewSubmitter,
    /// Submitter or agent fell below the SybilRank trust threshold.
    LowTrustRank,
    /// Submitter belongs to a behavioral-overlap cluster.
    BehavioralCluster,
    /// Submitter acts in lockstep with another submitter.
    LockstepTiming,
    /// Submitter posts at mechanically regular intervals.
    RegularInterval,
}

impl MitigationFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            MitigationFlag::MutualFeedback => "mutual_feedback",
            MitigationFlag::SybilCluster => "sybil_cluster",
            MitigationFlag::VelocityBurst => "velocity_burst",
            MitigationFlag::NewSubmitterBurst => "new_submitter_burst",
            MitigationFlag::NewSubmitter => "new_submitter",
            MitigationFlag::LowTrustRank => "low_trust_rank",
            MitigationFlag::BehavioralCluster => "behavioral_cluster",
            MitigationFlag::LockstepTiming => "lockstep_timing",
            MitigationFlag::RegularInterval => "regular_interval",
        }
    }

    /// Flags raised by mutual-feedback graph analysis. Only these drive the
    /// Sybil-fraction penalty.
    pub const fn is_graph_sybil(self) -> bool {
        matches!(self, MitigationFlag::MutualFeedback | MitigationFlag::SybilCluster)
    }
}

impl fmt::Display for MitigationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detector's verdict on one feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MitigationResult {
    pub feedback_id: String,
    /// Multiplier applied to the entry. 1.0 means no penalty.
    pub weight: f64,
    pub flags: BTreeSet<MitigationFlag>,
}

impl MitigationResult {
    /// An untouched entry.
    pub fn neutral(feedback_id: impl Into<String>) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            weight: NEUTRAL_WEIGHT,
            flags: BTreeSet::new(),
        }
    }

    /// A flagged entry with the given multiplier.
    pub fn flagged(feedback_id: impl Into<String>, weight: f64, flags: &[MitigationFlag]) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            weight,
            flags: flags.iter().copied().collect(),
        }
    }

    /// An unflagged entry carrying a non-neutral weight (e.g. decay).
    pub fn weighted(feedback_id: impl Into<String>, weight: f64) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            weight,
            flags: BTreeSet::new(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }
}
