//! # skillguard-engine
//!
//! Turns a feedback snapshot into per-agent [`FeedbackSummary`] values.
//!
//! Two modes share one surface: the naive engine (plain mean, used as the
//! ungamed baseline) and the hardened engine, which folds every enabled
//! mitigation's weights into a weighted mean and applies the graph Sybil
//! penalty. All functions are pure: the same snapshot, config, and `now`
//! always give the same result.

pub mod batch;
pub mod breakdown;
pub mod comparison;
pub mod engine;
pub mod hardened;
pub mod naive;
pub mod spans;
pub mod weights;

use std::collections::BTreeMap;

use skillguard_core::models::{Feedback, FeedbackSummary, Timestamp};
use skillguard_core::MitigationConfig;

pub use breakdown::{EntryBreakdown, ScoreBreakdown};
pub use comparison::{compare_engines, ScoreComparison};
pub use engine::ScoringEngine;
pub use weights::{EntryWeight, Weights};

/// Score one agent's feedback, which also serves as the corpus.
///
/// `None` or a config with nothing enabled selects the naive engine.
pub fn compute_summary(
    feedback: &[Feedback],
    config: Option<&MitigationConfig>,
    now: Timestamp,
) -> FeedbackSummary {
    engine_for(config).compute_summary(feedback, now)
}

/// Score `agent_id` against the full `corpus`.
pub fn compute_agent_summary(
    agent_id: &str,
    corpus: &[Feedback],
    config: Option<&MitigationConfig>,
    now: Timestamp,
) -> FeedbackSummary {
    engine_for(config).compute_agent_summary(agent_id, corpus, now)
}

/// Summaries for every agent of `corpus`. An empty corpus gives an empty map.
pub fn compute_all_summaries(
    corpus: &[Feedback],
    config: &MitigationConfig,
    now: Timestamp,
) -> BTreeMap<String, FeedbackSummary> {
    batch::compute_all_summaries(corpus, config, now)
}

fn engine_for(config: Option<&MitigationConfig>) -> ScoringEngine {
    match config {
        Some(config) => ScoringEngine::new(*config),
        None => ScoringEngine::naive(),
    }
}
