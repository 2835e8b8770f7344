//! ScoringEngine: one config, every host-facing scoring operation.

use std::collections::BTreeMap;

use skillguard_core::errors::SkillguardResult;
use skillguard_core::models::{Feedback, FeedbackSummary, Timestamp};
use skillguard_core::MitigationConfig;
use skillguard_mitigation::{Corpus, MitigationSuite};
use tracing::debug;

use crate::batch;
use crate::breakdown::ScoreBreakdown;
use crate::comparison::{self, ScoreComparison};
use crate::hardened::{assess, hardened_summary};
use crate::naive::naive_summary;

/// Scores agents under a fixed [`MitigationConfig`].
///
/// A config with every mitigation disabled behaves exactly like the naive
/// engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    config: MitigationConfig,
}

impl ScoringEngine {
    pub fn new(config: MitigationConfig) -> Self {
        Self { config }
    }

    /// The unguarded baseline.
    pub fn naive() -> Self {
        Self::new(MitigationConfig::NAIVE_BASELINE)
    }

    pub fn recommended() -> Self {
        Self::new(MitigationConfig::RECOMMENDED)
    }

    /// Build from a TOML config document (validated).
    pub fn from_toml(toml_str: &str) -> SkillguardResult<Self> {
        Ok(Self::new(MitigationConfig::from_toml(toml_str)?))
    }

    pub fn config(&self) -> &MitigationConfig {
        &self.config
    }

    pub fn is_naive(&self) -> bool {
        self.config.is_naive()
    }

    /// Score one agent's entries, using them as their own corpus.
    ///
    /// The agent ID is taken from the first entry; empty input yields the
    /// empty summary for an empty ID.
    pub fn compute_summary(&self, feedback: &[Feedback], now: Timestamp) -> FeedbackSummary {
        let agent_id = feedback.first().map_or("", |f| f.agent_id.as_str());
        let snapshot = Corpus::new(feedback);
        let span = crate::scoring_span!(agent_id, snapshot.len());
        let _guard = span.enter();

        let entries = snapshot.entries().to_vec();
        let summary = if self.is_naive() {
            naive_summary(agent_id, &entries)
        } else {
            let suite = MitigationSuite::prepare(&snapshot, &self.config, now);
            hardened_summary(agent_id, entries, &suite)
        };
        debug!(agent_id, value = summary.summary_value, tier = %summary.tier, "scored");
        summary
    }

    /// Score `agent_id` against the full `corpus`.
    pub fn compute_agent_summary(&self, agent_id: &str, corpus: &[Feedback], now: Timestamp) -> FeedbackSummary {
        let snapshot = Corpus::new(corpus);
        let entries = snapshot.for_agent(agent_id);
        let span = crate::scoring_span!(agent_id, entries.len());
        let _guard = span.enter();

        let summary = if self.is_naive() {
            naive_summary(agent_id, &entries)
        } else {
            let suite = MitigationSuite::prepare(&snapshot, &self.config, now);
            hardened_summary(agent_id, entries, &suite)
        };
        debug!(agent_id, value = summary.summary_value, tier = %summary.tier, "scored");
        summary
    }

    pub fn compute_all_summaries(&self, corpus: &[Feedback], now: Timestamp) -> BTreeMap<String, FeedbackSummary> {
        batch::compute_all_summaries(corpus, &self.config, now)
    }

    /// Score `agent_id` against `corpus` and keep every intermediate.
    pub fn explain(&self, agent_id: &str, corpus: &[Feedback], now: Timestamp) -> ScoreBreakdown {
        let snapshot = Corpus::new(corpus);
        let entries = snapshot.for_agent(agent_id);
        let span = crate::scoring_span!(agent_id, entries.len());
        let _guard = span.enter();

        let suite = MitigationSuite::prepare(&snapshot, &self.config, now);
        let assessment = assess(entries, &suite);
        ScoreBreakdown::from_assessment(agent_id, &assessment, suite.kinds())
    }

    /// This engine against the naive baseline, per agent.
    pub fn compare(&self, corpus: &[Feedback], now: Timestamp) -> BTreeMap<String, ScoreComparison> {
        comparison::compare_engines(corpus, &self.config, now)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::recommended()
    }
}
