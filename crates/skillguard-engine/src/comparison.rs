//! Naive vs hardened side by side, for measuring mitigation effectiveness.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skillguard_core::models::{Feedback, FeedbackSummary, Timestamp};
use skillguard_core::MitigationConfig;
use ts_rs::TS;

use crate::batch::compute_all_summaries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComparison {
    pub naive: FeedbackSummary,
    pub hardened: FeedbackSummary,
    /// `naive - hardened`; positive when mitigations lowered the score.
    pub delta: f64,
}

impl ScoreComparison {
    pub fn new(naive: FeedbackSummary, hardened: FeedbackSummary) -> Self {
        let delta = naive.summary_value - hardened.summary_value;
        Self {
            naive,
            hardened,
            delta,
        }
    }

    pub fn tier_changed(&self) -> bool {
        self.naive.tier != self.hardened.tier
    }

    /// Whether mitigations lowered the score by more than `min_drop` points.
    pub fn is_suppressed(&self, min_drop: f64) -> bool {
        self.delta > min_drop
    }
}

/// Score `corpus` with both the naive baseline and `config`, per agent.
pub fn compare_engines(
    corpus: &[Feedback],
    config: &MitigationConfig,
    now: Timestamp,
) -> BTreeMap<String, ScoreComparison> {
    let naive = compute_all_summaries(corpus, &MitigationConfig::NAIVE_BASELINE, now);
    let mut hardened = compute_all_summaries(corpus, config, now);
    naive
        .into_iter()
        .filter_map(|(agent_id, naive)| {
            let hardened = hardened.remove(&agent_id)?;
            Some((agent_id, ScoreComparison::new(naive, hardened)))
        })
        .collect()
}
