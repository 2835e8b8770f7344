//! Trust seed selection.
//!
//! Each submitter scores `unique_agents_rated × ln(1 + span_hours) × ln(1 + feedback_count)`.
//! Broad, long-lived, active raters score highest; a burst account rating
//! one agent once scores zero.

use std::collections::{BTreeMap, BTreeSet};

use skillguard_core::constants::MS_PER_HOUR;

use crate::corpus::Corpus;

/// A submitter's seed score.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedScore {
    pub address: String,
    pub score: f64,
}

/// Seed score of every submitter, best first; ties broken by address.
pub fn score_submitters(corpus: &Corpus<'_>) -> Vec<SeedScore> {
    let mut rated: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for fb in corpus.entries() {
        rated
            .entry(fb.submitter_address.as_str())
            .or_default()
            .insert(fb.agent_id.as_str());
    }

    let mut scores: Vec<SeedScore> = corpus
        .timelines()
        .iter()
        .map(|(addr, timeline)| {
            let unique_agents = rated.get(addr).map_or(0, BTreeSet::len) as f64;
            let span_ms = match (timeline.first(), timeline.last()) {
                (Some(first), Some(last)) => last.saturating_sub(*first).max(0),
                _ => 0,
            };
            let span_hours = span_ms as f64 / MS_PER_HOUR as f64;
            let count = timeline.len() as f64;
            SeedScore {
                address: addr.to_string(),
                score: unique_agents * span_hours.ln_1p() * count.ln_1p(),
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.address.cmp(&b.address))
    });
    scores
}

/// Top `ceil(n × seed_fraction)` submitters (at least one when any exist).
pub fn select_seeds(corpus: &Corpus<'_>, seed_fraction: f64) -> Vec<String> {
    let scores = score_submitters(corpus);
    if scores.is_empty() {
        return Vec::new();
    }
    let take = ((scores.len() as f64 * seed_fraction).ceil() as usize).clamp(1, scores.len());
    scores.into_iter().take(take).map(|s| s.address).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillguard_core::models::Feedback;

    const HOUR: i64 = 3_600_000;

    #[test]
    fn broad_long_lived_rater_outranks_one_shot_rater() {
        let feedback = vec![
            Feedback::with_id("1", "a", "veteran", 80.0, 0),
            Feedback::with_id("2", "b", "veteran", 80.0, 48 * HOUR),
            Feedback::with_id("3", "c", "veteran", 80.0, 96 * HOUR),
            Feedback::with_id("4", "a", "drive-by", 99.0, 10 * HOUR),
        ];
        let corpus = Corpus::new(&feedback);
        let scores = score_submitters(&corpus);
        assert_eq!(scores[0].address, "veteran");
        assert!(scores[0].score > 0.0);
        assert_eq!(scores[1].score, 0.0);
    }

    #[test]
    fn at_least_one_seed_is_chosen() {
        let feedback = vec![Feedback::with_id("1", "a", "only", 80.0, 0)];
        let corpus = Corpus::new(&feedback);
        assert_eq!(select_seeds(&corpus, 0.25), vec!["only".to_string()]);
    }

    #[test]
    fn quarter_of_submitters_become_seeds() {
        let feedback: Vec<Feedback> = (0..8)
            .map(|i| Feedback::with_id(format!("{i}"), "a", format!("s{i}"), 80.0, i * HOUR))
            .collect();
        let corpus = Corpus::new(&feedback);
        assert_eq!(select_seeds(&corpus, 0.25).len(), 2);
    }

    #[test]
    fn no_submitters_no_seeds() {
        let corpus = Corpus::new(&[]);
        assert!(select_seeds(&corpus, 0.25).is_empty());
    }
}
