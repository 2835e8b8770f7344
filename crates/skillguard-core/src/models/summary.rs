use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SUMMARY_DECIMALS;

use super::tier::{AccessDecision, TrustTier};

/// Per-agent score derived from its feedback. Recomputed on demand, never
/// the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub agent_id: String,
    /// Number of non-revoked entries considered.
    pub feedback_count: usize,
    /// Score in 0–100, rounded to two decimal places.
    pub summary_value: f64,
    pub tier: TrustTier,
    pub access_decision: AccessDecision,
}

impl FeedbackSummary {
    /// Build a summary from a raw score. The score is clamped to [0, 100]
    /// and rounded; non-finite scores collapse to 0.
    pub fn from_score(agent_id: impl Into<String>, feedback_count: usize, score: f64) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let summary_value = round_to(score, SUMMARY_DECIMALS);
        let tier = TrustTier::from_score(summary_value);
        Self {
            agent_id: agent_id.into(),
            feedback_count,
            summary_value,
            tier,
            access_decision: tier.access_decision(),
        }
    }

    /// Canonical summary for an agent with no usable feedback.
    pub fn empty(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            feedback_count: 0,
            summary_value: 0.0,
            tier: TrustTier::C,
            access_decision: AccessDecision::Denied,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.feedback_count == 0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
