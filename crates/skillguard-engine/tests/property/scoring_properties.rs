use proptest::prelude::*;

use skillguard_core::models::{Feedback, FeedbackSummary, MitigationKind};
use skillguard_core::MitigationConfig;
use skillguard_engine::{compute_all_summaries, compute_summary, ScoringEngine};

const HOUR: i64 = 3_600_000;

fn corpus_strategy() -> impl Strategy<Value = Vec<Feedback>> {
    prop::collection::vec((0..5usize, 0..8usize, 0.0..=100.0f64, 0..72 * HOUR), 0..50).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (agent, submitter, value, ts))| {
                Feedback::with_id(format!("p{i}"), format!("addr-{agent}"), format!("addr-{submitter}"), value, ts)
            })
            .collect()
    })
}

fn assert_well_formed(summary: &FeedbackSummary) -> Result<(), TestCaseError> {
    prop_assert!(summary.summary_value.is_finite());
    prop_assert!((0.0..=100.0).contains(&summary.summary_value));
    let scaled = summary.summary_value * 100.0;
    prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    prop_assert_eq!(summary.access_decision, summary.tier.access_decision());
    Ok(())
}

proptest! {
    #[test]
    fn hardened_summaries_are_well_formed(corpus in corpus_strategy()) {
        let summaries = compute_all_summaries(&corpus, &MitigationConfig::RECOMMENDED, 72 * HOUR);
        for summary in summaries.values() {
            assert_well_formed(summary)?;
        }
    }

    #[test]
    fn naive_config_matches_no_config(corpus in corpus_strategy()) {
        let agent: Vec<Feedback> = corpus.iter().filter(|f| f.agent_id == "addr-0").cloned().collect();
        let explicit = compute_summary(&agent, Some(&MitigationConfig::NAIVE_BASELINE), 0);
        let implicit = compute_summary(&agent, None, 0);
        prop_assert_eq!(explicit, implicit);
    }

    #[test]
    fn scoring_is_reproducible(corpus in corpus_strategy()) {
        let mut config = MitigationConfig::RECOMMENDED;
        config.set_enabled(MitigationKind::TemporalDecay, true);
        let first = compute_all_summaries(&corpus, &config, 72 * HOUR);
        let second = compute_all_summaries(&corpus, &config, 72 * HOUR);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hardened_never_exceeds_highest_value(corpus in corpus_strategy()) {
        let engine = ScoringEngine::recommended();
        for (agent_id, summary) in engine.compute_all_summaries(&corpus, 72 * HOUR) {
            let max = corpus
                .iter()
                .filter(|f| f.agent_id == agent_id)
                .map(|f| f.value)
                .fold(0.0f64, f64::max);
            prop_assert!(summary.summary_value <= max + 0.005);
        }
    }

    #[test]
    fn revoking_everything_empties_the_summary(corpus in corpus_strategy()) {
        let mut revoked = corpus.clone();
        revoked.iter_mut().for_each(Feedback::revoke);
        let summaries = compute_all_summaries(&revoked, &MitigationConfig::RECOMMENDED, 0);
        for (agent_id, summary) in summaries {
            prop_assert_eq!(summary, FeedbackSummary::empty(agent_id));
        }
    }
}
