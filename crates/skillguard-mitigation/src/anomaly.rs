//! New-submitter burst detection.
//!
//! Uses corpus-wide first-seen times. For the target agent, the first-seen
//! times of its distinct submitters are scanned with a sliding window; a
//! window in which more than `max_new_in_window` of them first appeared is a
//! sign-up wave. Entries timestamped inside a wave are flagged
//! [`MitigationFlag::NewSubmitterBurst`].

use std::collections::{BTreeMap, BTreeSet};

use skillguard_core::config::AnomalyConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;
use crate::window::{dense_intervals, within_any};

#[derive(Debug, Clone)]
pub struct AnomalyMitigation {
    config: AnomalyConfig,
    first_seen: BTreeMap<String, Timestamp>,
}

impl AnomalyMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &AnomalyConfig) -> Self {
        let first_seen = corpus
            .first_seen()
            .iter()
            .map(|(addr, ts)| (addr.to_string(), *ts))
            .collect();
        Self {
            config: *config,
            first_seen,
        }
    }

    /// Merged time spans in which the target's new-submitter density exceeded
    /// the limit.
    pub fn waves(&self, target: &[&Feedback]) -> Vec<(Timestamp, Timestamp)> {
        let submitters: BTreeSet<&str> = target.iter().map(|f| f.submitter_address.as_str()).collect();
        let mut arrivals: Vec<Timestamp> = submitters
            .iter()
            .filter_map(|s| self.first_seen.get(*s).copied())
            .collect();
        arrivals.sort_unstable();
        dense_intervals(&arrivals, self.config.window_ms, self.config.max_new_in_window)
    }
}

impl IMitigation for AnomalyMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::Anomaly
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        let waves = self.waves(target);
        if !waves.is_empty() {
            debug!(waves = waves.len(), "new-submitter wave detected");
        }

        target
            .iter()
            .map(|fb| {
                if within_any(&waves, fb.timestamp) {
                    MitigationResult::flagged(
                        &fb.id,
                        self.config.discount_factor,
                        &[MitigationFlag::NewSubmitterBurst],
                    )
                } else {
                    MitigationResult::neutral(&fb.id)
                }
            })
            .collect()
    }
}

/// One-off new-submitter burst check of `target` against `corpus`.
pub fn evaluate(target: &[Feedback], corpus: &[Feedback], config: &AnomalyConfig) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    AnomalyMitigation::prepare(&corpus, config).evaluate(&target)
}
