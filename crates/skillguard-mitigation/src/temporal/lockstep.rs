//! Lockstep timing between submitter pairs.

use rayon::prelude::*;
use skillguard_core::models::Timestamp;

/// Thresholds for flagging a pair as lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockstepRule {
    pub min_events: usize,
    pub window_ms: i64,
    pub min_rate: f64,
}

/// Count one-to-one event matches within `window_ms` by merging two sorted timelines.
///
/// Each event participates in at most one match, so the count never exceeds
/// the shorter timeline.
pub fn count_coincidences(a: &[Timestamp], b: &[Timestamp], window_ms: i64) -> usize {
    let width = window_ms.max(0).unsigned_abs();
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i].abs_diff(b[j]) <= width {
            count += 1;
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    count
}

/// Whether two timelines move in lockstep under `rule`.
pub fn is_lockstep(a: &[Timestamp], b: &[Timestamp], rule: &LockstepRule) -> bool {
    if a.len() < rule.min_events || b.len() < rule.min_events {
        return false;
    }
    let count = count_coincidences(a, b, rule.window_ms);
    let shorter = a.len().min(b.len());
    count >= rule.min_events && count as f64 / shorter as f64 > rule.min_rate
}

/// Every lockstep pair among `timelines`, as `(earlier, later)` positions in the slice.
pub fn lockstep_pairs(timelines: &[(&str, &[Timestamp])], rule: &LockstepRule) -> Vec<(usize, usize)> {
    let eligible: Vec<usize> = (0..timelines.len())
        .filter(|i| timelines[*i].1.len() >= rule.min_events)
        .collect();
    let eligible = eligible.as_slice();

    (0..eligible.len())
        .into_par_iter()
        .flat_map_iter(move |x| {
            let i = eligible[x];
            eligible[x + 1..]
                .iter()
                .filter(move |j| is_lockstep(timelines[i].1, timelines[**j].1, rule))
                .map(move |j| (i, *j))
        })
        .collect()
}
