//! Corpus-wide scoring.
//!
//! Cross-agent analysis is prepared once for the whole snapshot; agents are
//! then scored in parallel against it. Each agent's weight fold stays
//! sequential.

use std::collections::BTreeMap;

use rayon::prelude::*;
use skillguard_core::models::{Feedback, FeedbackSummary, Timestamp};
use skillguard_core::MitigationConfig;
use skillguard_mitigation::{Corpus, MitigationSuite};
use tracing::debug;

use crate::hardened::hardened_summary;
use crate::naive::naive_summary;

/// Every agent named in `corpus`, revoked-only agents included.
fn agent_ids(corpus: &[Feedback]) -> Vec<&str> {
    let mut ids: Vec<&str> = corpus.iter().map(|f| f.agent_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Summaries for every agent in `corpus`, keyed by agent ID.
///
/// Agents whose entries are all revoked get the canonical empty summary.
pub fn compute_all_summaries(
    corpus: &[Feedback],
    config: &MitigationConfig,
    now: Timestamp,
) -> BTreeMap<String, FeedbackSummary> {
    let mode = if config.is_naive() { "naive" } else { "hardened" };
    let span = crate::batch_span!(corpus.len(), mode);
    let _guard = span.enter();

    let snapshot = Corpus::new(corpus);
    let agents = agent_ids(corpus);
    let suite = (!config.is_naive()).then(|| MitigationSuite::prepare(&snapshot, config, now));

    let summaries: BTreeMap<String, FeedbackSummary> = agents
        .par_iter()
        .map(|agent_id| {
            let entries = snapshot.for_agent(agent_id);
            let summary = match &suite {
                Some(suite) => hardened_summary(agent_id, entries, suite),
                None => naive_summary(agent_id, &entries),
            };
            (agent_id.to_string(), summary)
        })
        .collect();

    debug!(agents = summaries.len(), mode, "batch scored");
    summaries
}
