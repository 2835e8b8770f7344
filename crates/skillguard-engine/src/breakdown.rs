//! Explainable scoring output.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use skillguard_core::models::{FeedbackSummary, MitigationFlag, MitigationKind};
use ts_rs::TS;

use crate::hardened::Assessment;

/// One entry's contribution to a hardened score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EntryBreakdown {
    pub feedback_id: String,
    pub submitter_address: String,
    pub value: f64,
    pub weight: f64,
    pub flags: BTreeSet<MitigationFlag>,
}

/// Every intermediate behind one agent's summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub summary: FeedbackSummary,
    /// Mitigations that ran, in evaluation order.
    pub mitigations: Vec<MitigationKind>,
    pub naive_mean: f64,
    pub weighted_mean: f64,
    pub graph_sybil_fraction: f64,
    pub penalty: f64,
    pub flag_counts: BTreeMap<MitigationFlag, usize>,
    pub entries: Vec<EntryBreakdown>,
}

impl ScoreBreakdown {
    pub(crate) fn from_assessment(
        agent_id: &str,
        assessment: &Assessment<'_>,
        mitigations: Vec<MitigationKind>,
    ) -> Self {
        let entries = assessment
            .entries
            .iter()
            .map(|fb| {
                let (weight, flags) = assessment
                    .weights
                    .get(&fb.id)
                    .map(|e| (e.weight, e.flags.clone()))
                    .unwrap_or((1.0, BTreeSet::new()));
                EntryBreakdown {
                    feedback_id: fb.id.clone(),
                    submitter_address: fb.submitter_address.clone(),
                    value: fb.clamped_value(),
                    weight,
                    flags,
                }
            })
            .collect();

        Self {
            summary: assessment.summary(agent_id),
            mitigations,
            naive_mean: assessment.naive_mean,
            weighted_mean: assessment.weighted_mean,
            graph_sybil_fraction: assessment.graph_sybil_fraction,
            penalty: assessment.penalty,
            flag_counts: assessment.weights.flag_counts(&assessment.entries),
            entries,
        }
    }

    pub fn final_value(&self) -> f64 {
        self.summary.summary_value
    }

    /// Entries that carry at least one flag.
    pub fn flagged_entries(&self) -> impl Iterator<Item = &EntryBreakdown> {
        self.entries.iter().filter(|e| !e.flags.is_empty())
    }

    pub fn flag_count(&self, flag: MitigationFlag) -> usize {
        self.flag_counts.get(&flag).copied().unwrap_or(0)
    }
}
