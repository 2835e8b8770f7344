//! Exponential recency weighting: `weight = 0.5^(age / half_life)`.
//!
//! Age is measured against a caller-supplied `now`, never the wall clock, so
//! the same snapshot always scores the same. Future-dated entries count as
//! age zero. The weight is floored at the smallest positive `f64` so an
//! ancient entry never drops out entirely.

use skillguard_core::config::TemporalDecayConfig;
use skillguard_core::models::{Feedback, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;

#[derive(Debug, Clone, Copy)]
pub struct TemporalDecayMitigation {
    half_life_ms: i64,
    now: Timestamp,
}

impl TemporalDecayMitigation {
    pub fn new(config: &TemporalDecayConfig, now: Timestamp) -> Self {
        Self {
            half_life_ms: config.half_life_ms,
            now,
        }
    }

    /// Decay weight of an event at `timestamp`.
    pub fn weight_at(&self, timestamp: Timestamp) -> f64 {
        decay_weight(self.now, timestamp, self.half_life_ms)
    }
}

/// `0.5^(max(0, now - timestamp) / half_life_ms)`, floored above zero.
pub fn decay_weight(now: Timestamp, timestamp: Timestamp, half_life_ms: i64) -> f64 {
    if half_life_ms <= 0 {
        return 1.0;
    }
    let age = now.saturating_sub(timestamp).max(0) as f64;
    0.5f64
        .powf(age / half_life_ms as f64)
        .max(f64::MIN_POSITIVE)
}

impl IMitigation for TemporalDecayMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::TemporalDecay
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        target
            .iter()
            .map(|fb| MitigationResult::weighted(&fb.id, self.weight_at(fb.timestamp)))
            .collect()
    }
}

/// One-off decay weighting of `target` as of `now`.
pub fn evaluate(target: &[Feedback], config: &TemporalDecayConfig, now: Timestamp) -> Vec<MitigationResult> {
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    TemporalDecayMitigation::new(config, now).evaluate(&target)
}
