//! Temporal correlation: lockstep pairs and metronome-regular submitters.
//!
//! Both detectors read each submitter's full timeline across the corpus.
//! Addresses flagged by either one have all their feedback weighted by
//! `discount_factor`.

pub mod lockstep;
pub mod regularity;

use std::collections::BTreeSet;

use skillguard_core::config::TemporalCorrelationConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;
use lockstep::LockstepRule;

#[derive(Debug, Clone)]
pub struct TemporalCorrelationMitigation {
    config: TemporalCorrelationConfig,
    lockstep: BTreeSet<String>,
    regular: BTreeSet<String>,
}

impl TemporalCorrelationMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &TemporalCorrelationConfig) -> Self {
        let timelines: Vec<(&str, &[Timestamp])> = corpus
            .timelines()
            .iter()
            .map(|(addr, ts)| (*addr, ts.as_slice()))
            .collect();

        let rule = LockstepRule {
            min_events: config.min_lockstep_events,
            window_ms: config.lockstep_window_ms,
            min_rate: config.min_coincidence_rate,
        };
        let pairs = lockstep::lockstep_pairs(&timelines, &rule);
        let lockstep: BTreeSet<String> = pairs
            .iter()
            .flat_map(|(i, j)| [timelines[*i].0, timelines[*j].0])
            .map(str::to_string)
            .collect();

        let regular: BTreeSet<String> = timelines
            .iter()
            .filter(|(_, ts)| {
                regularity::is_regular(ts, config.min_feedback_for_regularity, config.regularity_threshold)
            })
            .map(|(addr, _)| addr.to_string())
            .collect();

        debug!(
            submitters = timelines.len(),
            lockstep_pairs = pairs.len(),
            lockstep_addresses = lockstep.len(),
            regular_addresses = regular.len(),
            "temporal correlation prepared"
        );

        Self {
            config: *config,
            lockstep,
            regular,
        }
    }

    pub fn lockstep_addresses(&self) -> &BTreeSet<String> {
        &self.lockstep
    }

    pub fn regular_addresses(&self) -> &BTreeSet<String> {
        &self.regular
    }

    fn flags_for(&self, address: &str) -> Vec<MitigationFlag> {
        let mut flags = Vec::new();
        if self.lockstep.contains(address) {
            flags.push(MitigationFlag::LockstepTiming);
        }
        if self.regular.contains(address) {
            flags.push(MitigationFlag::RegularInterval);
        }
        flags
    }
}

impl IMitigation for TemporalCorrelationMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::TemporalCorrelation
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        target
            .iter()
            .map(|fb| {
                let flags = self.flags_for(&fb.submitter_address);
                if flags.is_empty() {
                    MitigationResult::neutral(&fb.id)
                } else {
                    MitigationResult::flagged(&fb.id, self.config.discount_factor, &flags)
                }
            })
            .collect()
    }
}

/// One-off temporal correlation check of `target` against `corpus`.
pub fn evaluate(
    target: &[Feedback],
    corpus: &[Feedback],
    config: &TemporalCorrelationConfig,
) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    TemporalCorrelationMitigation::prepare(&corpus, config).evaluate(&target)
}
