//! Mechanically regular submission intervals.

use skillguard_core::models::Timestamp;

/// Population coefficient of variation of the gaps between consecutive events.
///
/// `None` with fewer than two gaps or a non-positive mean gap.
pub fn coefficient_of_variation(sorted: &[Timestamp]) -> Option<f64> {
    if sorted.len() < 3 {
        return None;
    }
    let gaps: Vec<f64> = sorted.windows(2).map(|w| w[1].abs_diff(w[0]) as f64).collect();
    let n = gaps.len() as f64;
    let mean = gaps.iter().sum::<f64>() / n;
    if mean <= 0.0 {
        return None;
    }
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt() / mean)
}

/// Whether a timeline with at least `min_events` events has CV below `threshold`.
pub fn is_regular(sorted: &[Timestamp], min_events: usize, threshold: f64) -> bool {
    if sorted.len() < min_events {
        return false;
    }
    coefficient_of_variation(sorted).is_some_and(|cv| cv < threshold)
}
