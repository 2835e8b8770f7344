//! Hardened composition.
//!
//! Each enabled mitigation is folded into a [`Weights`] accumulator in
//! evaluation order, then the weighted mean is taken. A uniform discount
//! across all of an agent's entries cancels out of that mean, so a fully
//! Sybil agent would keep its raw average. To close that gap the mean is
//! scaled by `1 - f * (1 - graph.discount_factor)`, where `f` is the fraction
//! of entries carrying a graph-analysis Sybil flag.

use skillguard_core::models::{Feedback, FeedbackSummary, MitigationFlag};
use skillguard_mitigation::MitigationSuite;

use crate::naive::naive_mean;
use crate::weights::Weights;

/// Every intermediate of one agent's hardened score.
#[derive(Debug, Clone)]
pub struct Assessment<'a> {
    pub entries: Vec<&'a Feedback>,
    pub weights: Weights,
    pub naive_mean: f64,
    pub weighted_mean: f64,
    /// Fraction of entries flagged by graph analysis.
    pub graph_sybil_fraction: f64,
    pub penalty: f64,
    pub score: f64,
}

impl Assessment<'_> {
    pub fn summary(&self, agent_id: &str) -> FeedbackSummary {
        if self.entries.is_empty() {
            return FeedbackSummary::empty(agent_id);
        }
        FeedbackSummary::from_score(agent_id, self.entries.len(), self.score)
    }
}

/// `1 - f * (1 - discount)`: 1.0 at `f = 0`, `discount` at `f = 1`.
pub fn sybil_penalty(graph_sybil_fraction: f64, discount_factor: f64) -> f64 {
    let f = graph_sybil_fraction.clamp(0.0, 1.0);
    1.0 - f * (1.0 - discount_factor)
}

/// Score active `entries` with every detector of `suite`.
///
/// With no entries the detectors are skipped and the score is 0.
pub fn assess<'a>(entries: Vec<&'a Feedback>, suite: &MitigationSuite) -> Assessment<'a> {
    let mut weights = Weights::for_entries(&entries);
    let Some(naive) = naive_mean(&entries) else {
        return Assessment {
            entries,
            weights,
            naive_mean: 0.0,
            weighted_mean: 0.0,
            graph_sybil_fraction: 0.0,
            penalty: 1.0,
            score: 0.0,
        };
    };

    for mitigation in suite.iter() {
        weights.fold(&mitigation.evaluate(&entries));
    }

    let weighted_mean = weights.weighted_mean(&entries);
    let graph_sybil_fraction = weights.flagged_fraction(&entries, MitigationFlag::is_graph_sybil);
    let penalty = sybil_penalty(graph_sybil_fraction, suite.config().graph.discount_factor);

    Assessment {
        entries,
        weights,
        naive_mean: naive,
        weighted_mean,
        graph_sybil_fraction,
        penalty,
        score: weighted_mean * penalty,
    }
}

/// Hardened summary of active `entries` for `agent_id`.
pub fn hardened_summary(agent_id: &str, entries: Vec<&Feedback>, suite: &MitigationSuite) -> FeedbackSummary {
    assess(entries, suite).summary(agent_id)
}
