use proptest::prelude::*;

use skillguard_core::models::{Feedback, MitigationKind};
use skillguard_core::{IMitigation, MitigationConfig};
use skillguard_mitigation::{Corpus, MitigationSuite, SybilRankMitigation};

const HOUR: i64 = 3_600_000;

/// Small address space so agents and submitters collide into pairs and rings.
fn corpus_strategy() -> impl Strategy<Value = Vec<Feedback>> {
    prop::collection::vec((0..6usize, 0..9usize, 0.0..=100.0f64, 0..48 * HOUR, any::<bool>()), 0..60).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (agent, submitter, value, ts, revoked))| {
                    let mut fb = Feedback::with_id(
                        format!("p{i}"),
                        format!("addr-{agent}"),
                        format!("addr-{submitter}"),
                        value,
                        ts,
                    );
                    if revoked && i % 5 == 0 {
                        fb.revoke();
                    }
                    fb
                })
                .collect()
        },
    )
}

fn all_enabled() -> MitigationConfig {
    let mut config = MitigationConfig::RECOMMENDED;
    config.set_enabled(MitigationKind::TemporalDecay, true);
    config
}

proptest! {
    #[test]
    fn results_align_with_target_and_stay_in_unit_range(corpus in corpus_strategy()) {
        let snapshot = Corpus::new(&corpus);
        let suite = MitigationSuite::prepare(&snapshot, &all_enabled(), 48 * HOUR);
        for agent in snapshot.agent_ids() {
            let target = snapshot.for_agent(agent);
            for (_, results) in suite.evaluate(&target) {
                prop_assert_eq!(results.len(), target.len());
                for (result, fb) in results.iter().zip(&target) {
                    prop_assert_eq!(&result.feedback_id, &fb.id);
                    prop_assert!(result.weight.is_finite());
                    prop_assert!(result.weight > 0.0 && result.weight <= 1.0);
                }
            }
        }
    }

    #[test]
    fn preparation_is_deterministic(corpus in corpus_strategy()) {
        let snapshot = Corpus::new(&corpus);
        let first = MitigationSuite::prepare(&snapshot, &all_enabled(), 48 * HOUR);
        let second = MitigationSuite::prepare(&snapshot, &all_enabled(), 48 * HOUR);
        for agent in snapshot.agent_ids() {
            let target = snapshot.for_agent(agent);
            prop_assert_eq!(first.evaluate(&target), second.evaluate(&target));
        }
    }

    #[test]
    fn sybil_rank_weight_never_drops_below_discount(corpus in corpus_strategy()) {
        let snapshot = Corpus::new(&corpus);
        let config = MitigationConfig::RECOMMENDED.sybil_rank;
        let rank = SybilRankMitigation::prepare(&snapshot, &config);
        let results = rank.evaluate(snapshot.entries());
        for result in results {
            prop_assert!(result.weight >= config.discount_factor - 1e-12);
        }
    }

    #[test]
    fn revoked_entries_never_reach_the_corpus(corpus in corpus_strategy()) {
        let snapshot = Corpus::new(&corpus);
        prop_assert!(snapshot.entries().iter().all(|f| f.is_active()));
        prop_assert_eq!(snapshot.len(), corpus.iter().filter(|f| !f.revoked).count());
    }
}
