//! Property tests for tier mapping and summary construction.

use proptest::prelude::*;

use skillguard_core::models::{AccessDecision, FeedbackSummary, TrustTier};

proptest! {
    #[test]
    fn tier_is_monotonic_in_score(a in -50.0f64..150.0, b in -50.0f64..150.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(TrustTier::from_score(low) <= TrustTier::from_score(high));
    }
}

proptest! {
    #[test]
    fn access_decision_bands_follow_score(score in 0.0f64..=100.0) {
        let decision = TrustTier::from_score(score).access_decision();
        let expected = if score >= 70.0 {
            AccessDecision::FullAccess
        } else if score >= 40.0 {
            AccessDecision::Throttled
        } else {
            AccessDecision::Denied
        };
        prop_assert_eq!(decision, expected);
    }
}

proptest! {
    #[test]
    fn summary_value_is_bounded_and_rounded(score in -1000.0f64..1000.0, count in 0usize..500) {
        let summary = FeedbackSummary::from_score("agent", count, score);
        prop_assert!((0.0..=100.0).contains(&summary.summary_value));
        let scaled = summary.summary_value * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        prop_assert_eq!(summary.tier, TrustTier::from_score(summary.summary_value));
    }
}
