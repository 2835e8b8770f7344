//! The unguarded baseline: arithmetic mean of active values.
//!
//! Kept deliberately gameable. It is the yardstick every mitigation is
//! measured against.

use skillguard_core::models::{Feedback, FeedbackSummary};

/// Mean of the entries' clamped values; `None` for no entries.
pub fn naive_mean(entries: &[&Feedback]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|f| f.clamped_value()).sum();
    Some(total / entries.len() as f64)
}

/// Naive summary over already-filtered active entries.
pub fn naive_summary(agent_id: &str, entries: &[&Feedback]) -> FeedbackSummary {
    match naive_mean(entries) {
        Some(mean) => FeedbackSummary::from_score(agent_id, entries.len(), mean),
        None => FeedbackSummary::empty(agent_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillguard_core::models::TrustTier;

    #[test]
    fn mean_of_values() {
        let a = Feedback::with_id("1", "agent", "x", 90.0, 0);
        let b = Feedback::with_id("2", "agent", "y", 70.0, 0);
        let summary = naive_summary("agent", &[&a, &b]);
        assert_eq!(summary.summary_value, 80.0);
        assert_eq!(summary.tier, TrustTier::AA);
        assert_eq!(summary.feedback_count, 2);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let a = Feedback::with_id("1", "agent", "x", 250.0, 0);
        let b = Feedback::with_id("2", "agent", "y", 50.0, 0);
        assert_eq!(naive_mean(&[&a, &b]), Some(75.0));
    }

    #[test]
    fn no_entries_is_the_empty_summary() {
        assert_eq!(naive_summary("agent", &[]), FeedbackSummary::empty("agent"));
    }
}
