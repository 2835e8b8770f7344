//! Per-agent rating burst detection.
//!
//! The agent's entries are sorted by timestamp; any entry inside a window of
//! `window_ms` holding more than `max_in_window` entries is flagged
//! [`MitigationFlag::VelocityBurst`] and weighted by `discount_factor`.

use skillguard_core::config::VelocityConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::window::dense_members;

/// Velocity needs no corpus context; it only looks at the target's own timing.
#[derive(Debug, Clone, Copy)]
pub struct VelocityMitigation {
    config: VelocityConfig,
}

impl VelocityMitigation {
    pub fn new(config: &VelocityConfig) -> Self {
        Self { config: *config }
    }
}

impl IMitigation for VelocityMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::Velocity
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        let mut order: Vec<usize> = (0..target.len()).collect();
        order.sort_by(|&a, &b| {
            target[a]
                .timestamp
                .cmp(&target[b].timestamp)
                .then_with(|| target[a].id.cmp(&target[b].id))
        });
        let sorted: Vec<Timestamp> = order.iter().map(|&i| target[i].timestamp).collect();
        let dense = dense_members(&sorted, self.config.window_ms, self.config.max_in_window);

        let mut in_burst = vec![false; target.len()];
        for (pos, &idx) in order.iter().enumerate() {
            in_burst[idx] = dense[pos];
        }

        let flagged = in_burst.iter().filter(|b| **b).count();
        if flagged > 0 {
            debug!(flagged, total = target.len(), "velocity burst detected");
        }

        target
            .iter()
            .zip(in_burst)
            .map(|(fb, burst)| {
                if burst {
                    MitigationResult::flagged(
                        &fb.id,
                        self.config.discount_factor,
                        &[MitigationFlag::VelocityBurst],
                    )
                } else {
                    MitigationResult::neutral(&fb.id)
                }
            })
            .collect()
    }
}

/// One-off velocity check of `target`.
pub fn evaluate(target: &[Feedback], config: &VelocityConfig) -> Vec<MitigationResult> {
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    VelocityMitigation::new(config).evaluate(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(timestamps: &[i64]) -> Vec<Feedback> {
        timestamps
            .iter()
            .enumerate()
            .map(|(i, ts)| Feedback::with_id(format!("fb-{i}"), "agent", format!("s{i}"), 90.0, *ts))
            .collect()
    }

    #[test]
    fn burst_of_eleven_in_a_minute_is_flagged() {
        let mut ts: Vec<i64> = (0..11).map(|i| 1_000_000 + i * 3_000).collect();
        ts.push(10_000_000);
        let results = evaluate(&entries(&ts), &VelocityConfig::RECOMMENDED);
        assert!(results[..11].iter().all(|r| r.weight == 0.5));
        assert!(results[..11]
            .iter()
            .all(|r| r.flags.contains(&MitigationFlag::VelocityBurst)));
        assert_eq!(results[11].weight, 1.0);
    }

    #[test]
    fn ten_in_a_minute_is_tolerated() {
        let ts: Vec<i64> = (0..10).map(|i| i * 1_000).collect();
        let results = evaluate(&entries(&ts), &VelocityConfig::RECOMMENDED);
        assert!(results.iter().all(|r| !r.is_flagged()));
    }

    #[test]
    fn unsorted_input_keeps_result_order() {
        let mut ts: Vec<i64> = (0..12).map(|i| i * 1_000).collect();
        ts.reverse();
        ts.push(99_000_000);
        ts.swap(0, 12);
        let feedback = entries(&ts);
        let results = evaluate(&feedback, &VelocityConfig::RECOMMENDED);
        for (fb, result) in feedback.iter().zip(&results) {
            assert_eq!(fb.id, result.feedback_id);
            assert_eq!(result.is_flagged(), fb.timestamp < 99_000_000);
        }
    }

    #[test]
    fn negative_window_is_total() {
        let config = VelocityConfig {
            window_ms: -1,
            max_in_window: 1,
            ..VelocityConfig::RECOMMENDED
        };
        let results = evaluate(&entries(&[5_000, 1_000, 5_000]), &config);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_flagged());
        assert!(!results[1].is_flagged());
        assert!(results[2].is_flagged());
    }

    #[test]
    fn extreme_timestamps_are_total() {
        let results = evaluate(&entries(&[i64::MAX, i64::MIN, 0]), &VelocityConfig::RECOMMENDED);
        assert!(results.iter().all(|r| !r.is_flagged()));
    }

    #[test]
    fn empty_target_is_empty() {
        assert!(evaluate(&[], &VelocityConfig::RECOMMENDED).is_empty());
    }
}
