//! Sliding-window density scans over sorted timestamps.

use skillguard_core::models::Timestamp;

/// Mark every position that falls inside some window of width `window_ms`
/// holding more than `max_in_window` timestamps.
///
/// `sorted` must be ascending. Two-pointer scan, O(n). A negative
/// `window_ms` is treated as zero.
pub(crate) fn dense_members(sorted: &[Timestamp], window_ms: i64, max_in_window: usize) -> Vec<bool> {
    let width = window_width(window_ms);
    let mut flagged = vec![false; sorted.len()];
    let mut left = 0;
    let mut next_unmarked = 0;

    for right in 0..sorted.len() {
        while left < right && sorted[right].abs_diff(sorted[left]) > width {
            left += 1;
        }
        if right - left + 1 > max_in_window {
            for slot in flagged.iter_mut().take(right + 1).skip(left.max(next_unmarked)) {
                *slot = true;
            }
            next_unmarked = right + 1;
        }
    }

    flagged
}

/// Time spans `[start, end]` covered by over-dense windows, merged so the
/// result is sorted and non-overlapping.
pub(crate) fn dense_intervals(
    sorted: &[Timestamp],
    window_ms: i64,
    max_in_window: usize,
) -> Vec<(Timestamp, Timestamp)> {
    let width = window_width(window_ms);
    let mut intervals: Vec<(Timestamp, Timestamp)> = Vec::new();
    let mut left = 0;

    for right in 0..sorted.len() {
        while left < right && sorted[right].abs_diff(sorted[left]) > width {
            left += 1;
        }
        if right - left + 1 > max_in_window {
            let (start, end) = (sorted[left], sorted[right]);
            match intervals.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => intervals.push((start, end)),
            }
        }
    }

    intervals
}

/// Window width as an unsigned span; negative widths collapse to zero.
pub(crate) fn window_width(window_ms: i64) -> u64 {
    window_ms.max(0).unsigned_abs()
}

/// Whether `ts` lies in one of the sorted, disjoint `intervals`.
pub(crate) fn within_any(intervals: &[(Timestamp, Timestamp)], ts: Timestamp) -> bool {
    let idx = intervals.partition_point(|(start, _)| *start <= ts);
    idx > 0 && ts <= intervals[idx - 1].1
}
