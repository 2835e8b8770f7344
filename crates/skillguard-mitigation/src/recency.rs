//! Discount for the most recently joined submitter cohort.
//!
//! All distinct submitters of the corpus are ranked by first-seen time; the
//! newest `floor(n * recent_threshold)` are new and their feedback is weighted
//! by `discount_factor`. Ties at the cohort boundary are broken by address.

use std::collections::HashSet;

use skillguard_core::config::SubmitterRecencyConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;

#[derive(Debug, Clone)]
pub struct SubmitterRecencyMitigation {
    config: SubmitterRecencyConfig,
    newcomers: HashSet<String>,
}

impl SubmitterRecencyMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &SubmitterRecencyConfig) -> Self {
        let mut ranked: Vec<(Timestamp, &str)> = corpus
            .first_seen()
            .iter()
            .map(|(addr, ts)| (*ts, *addr))
            .collect();
        ranked.sort_unstable();

        let cohort = (ranked.len() as f64 * config.recent_threshold).floor() as usize;
        let newcomers: HashSet<String> = ranked
            .iter()
            .rev()
            .take(cohort)
            .map(|(_, addr)| addr.to_string())
            .collect();

        debug!(submitters = ranked.len(), newcomers = newcomers.len(), "recency cohort prepared");

        Self {
            config: *config,
            newcomers,
        }
    }

    pub fn is_newcomer(&self, address: &str) -> bool {
        self.newcomers.contains(address)
    }
}

impl IMitigation for SubmitterRecencyMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::SubmitterRecency
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        target
            .iter()
            .map(|fb| {
                if self.is_newcomer(&fb.submitter_address) {
                    MitigationResult::flagged(
                        &fb.id,
                        self.config.discount_factor,
                        &[MitigationFlag::NewSubmitter],
                    )
                } else {
                    MitigationResult::neutral(&fb.id)
                }
            })
            .collect()
    }
}

/// One-off recency check of `target` against `corpus`.
pub fn evaluate(
    target: &[Feedback],
    corpus: &[Feedback],
    config: &SubmitterRecencyConfig,
) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    SubmitterRecencyMitigation::prepare(&corpus, config).evaluate(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_of(n: i64) -> Vec<Feedback> {
        (0..n)
            .map(|i| Feedback::with_id(format!("fb-{i}"), "agent", format!("s{i:02}"), 80.0, i * 1_000))
            .collect()
    }

    #[test]
    fn newest_fifth_is_discounted() {
        let corpus = corpus_of(10);
        let results = evaluate(&corpus, &corpus, &SubmitterRecencyConfig::RECOMMENDED);
        let flagged: Vec<&str> = results
            .iter()
            .filter(|r| r.is_flagged())
            .map(|r| r.feedback_id.as_str())
            .collect();
        assert_eq!(flagged, vec!["fb-8", "fb-9"]);
        assert!(results.iter().filter(|r| r.is_flagged()).all(|r| r.weight == 0.2));
    }

    #[test]
    fn first_seen_uses_earliest_activity() {
        // s00 rates again at the very end but joined first.
        let mut corpus = corpus_of(10);
        corpus.push(Feedback::with_id("late", "agent", "s00", 80.0, 1_000_000));
        let results = evaluate(&corpus[10..], &corpus, &SubmitterRecencyConfig::RECOMMENDED);
        assert!(!results[0].is_flagged());
    }

    #[test]
    fn small_corpus_has_no_newcomers() {
        let corpus = corpus_of(4);
        let results = evaluate(&corpus, &corpus, &SubmitterRecencyConfig::RECOMMENDED);
        assert!(results.iter().all(|r| !r.is_flagged()));
    }
}
