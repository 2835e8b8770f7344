//! Per-entry weight accumulator.
//!
//! Every entry starts at weight 1.0 with no flags. Each mitigation's results
//! are folded in by feedback ID: weights multiply, flags union. Results for
//! unknown IDs are ignored.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use skillguard_core::constants::NEUTRAL_WEIGHT;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationResult};

/// Accumulated weight and flags of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryWeight {
    pub weight: f64,
    pub flags: BTreeSet<MitigationFlag>,
}

impl Default for EntryWeight {
    fn default() -> Self {
        Self {
            weight: NEUTRAL_WEIGHT,
            flags: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Weights {
    slots: Vec<EntryWeight>,
    index: HashMap<String, usize>,
}

impl Weights {
    /// Neutral weights for `entries`. Entries sharing an ID share a slot.
    pub fn for_entries(entries: &[&Feedback]) -> Self {
        let mut weights = Self::default();
        for fb in entries {
            if !weights.index.contains_key(&fb.id) {
                weights.index.insert(fb.id.clone(), weights.slots.len());
                weights.slots.push(EntryWeight::default());
            }
        }
        weights
    }

    /// Multiply in one mitigation's results.
    pub fn fold(&mut self, results: &[MitigationResult]) {
        for result in results {
            if let Some(&slot) = self.index.get(&result.feedback_id) {
                let entry = &mut self.slots[slot];
                entry.weight *= result.weight;
                entry.flags.extend(result.flags.iter().copied());
            }
        }
    }

    pub fn get(&self, feedback_id: &str) -> Option<&EntryWeight> {
        self.index.get(feedback_id).map(|&slot| &self.slots[slot])
    }

    /// Current weight of an entry; unknown IDs are neutral.
    pub fn weight_of(&self, feedback_id: &str) -> f64 {
        self.get(feedback_id).map_or(NEUTRAL_WEIGHT, |e| e.weight)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `Σ(value · weight) / Σ(weight)` over `entries`, or 0 when the total
    /// weight is not positive.
    pub fn weighted_mean(&self, entries: &[&Feedback]) -> f64 {
        let (weighted, total) = entries.iter().fold((0.0, 0.0), |(sum, total), fb| {
            let w = self.weight_of(&fb.id);
            (sum + fb.clamped_value() * w, total + w)
        });
        if total > 0.0 && weighted.is_finite() {
            weighted / total
        } else {
            0.0
        }
    }

    /// Fraction of `entries` carrying at least one flag matching `pred`.
    pub fn flagged_fraction(&self, entries: &[&Feedback], pred: impl Fn(MitigationFlag) -> bool) -> f64 {
        if entries.is_empty() {
            return 0.0;
        }
        let flagged = entries
            .iter()
            .filter(|fb| {
                self.get(&fb.id)
                    .is_some_and(|e| e.flags.iter().any(|f| pred(*f)))
            })
            .count();
        flagged as f64 / entries.len() as f64
    }

    /// How many of `entries` carry each flag.
    pub fn flag_counts(&self, entries: &[&Feedback]) -> BTreeMap<MitigationFlag, usize> {
        let mut counts = BTreeMap::new();
        for fb in entries {
            if let Some(entry) = self.get(&fb.id) {
                for flag in &entry.flags {
                    *counts.entry(*flag).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Feedback> {
        vec![
            Feedback::with_id("a", "agent", "x", 100.0, 0),
            Feedback::with_id("b", "agent", "y", 0.0, 0),
        ]
    }

    #[test]
    fn folds_multiply_and_flags_union() {
        let feedback = entries();
        let refs: Vec<&Feedback> = feedback.iter().collect();
        let mut weights = Weights::for_entries(&refs);
        weights.fold(&[MitigationResult::flagged("a", 0.5, &[MitigationFlag::VelocityBurst])]);
        weights.fold(&[MitigationResult::flagged("a", 0.2, &[MitigationFlag::NewSubmitter])]);
        weights.fold(&[MitigationResult::neutral("b")]);

        let a = weights.get("a").unwrap();
        assert!((a.weight - 0.1).abs() < 1e-12);
        assert_eq!(a.flags.len(), 2);
        assert_eq!(weights.weight_of("b"), 1.0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let feedback = entries();
        let refs: Vec<&Feedback> = feedback.iter().collect();
        let mut weights = Weights::for_entries(&refs);
        weights.fold(&[MitigationResult::flagged("zzz", 0.0, &[MitigationFlag::SybilCluster])]);
        assert_eq!(weights.len(), 2);
        assert!(weights.get("zzz").is_none());
        assert!(weights.flag_counts(&refs).is_empty());
    }

    #[test]
    fn weighted_mean_and_zero_weight_guard() {
        let feedback = entries();
        let refs: Vec<&Feedback> = feedback.iter().collect();
        let mut weights = Weights::for_entries(&refs);
        assert_eq!(weights.weighted_mean(&refs), 50.0);

        weights.fold(&[MitigationResult::weighted("b", 0.25)]);
        assert_eq!(weights.weighted_mean(&refs), 80.0);

        weights.fold(&[MitigationResult::weighted("a", 0.0), MitigationResult::weighted("b", 0.0)]);
        assert_eq!(weights.weighted_mean(&refs), 0.0);
    }

    #[test]
    fn uniform_discount_cancels_out() {
        let feedback = entries();
        let refs: Vec<&Feedback> = feedback.iter().collect();
        let mut weights = Weights::for_entries(&refs);
        weights.fold(&[MitigationResult::weighted("a", 0.5), MitigationResult::weighted("b", 0.5)]);
        assert_eq!(weights.weighted_mean(&refs), 50.0);
    }

    #[test]
    fn fraction_counts_matching_entries() {
        let feedback = entries();
        let refs: Vec<&Feedback> = feedback.iter().collect();
        let mut weights = Weights::for_entries(&refs);
        weights.fold(&[MitigationResult::flagged("a", 0.1, &[MitigationFlag::MutualFeedback])]);
        assert_eq!(weights.flagged_fraction(&refs, MitigationFlag::is_graph_sybil), 0.5);
        assert_eq!(weights.flagged_fraction(&refs, |f| f == MitigationFlag::LowTrustRank), 0.0);
        assert_eq!(weights.flagged_fraction(&[], MitigationFlag::is_graph_sybil), 0.0);
    }
}
