//! Nine-level trust tier scale and the access decision derived from it.
//!
//! Both mappings are pure functions of their input.
//!
//! # Examples
//!
//! ```
//! use skillguard_core::models::{AccessDecision, TrustTier};
//!
//! let tier = TrustTier::from_score(84.2);
//! assert_eq!(tier, TrustTier::AA);
//! assert_eq!(tier.access_decision(), AccessDecision::FullAccess);
//! assert_eq!(TrustTier::from_score(-5.0), TrustTier::C);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_FEEDBACK_VALUE, MIN_FEEDBACK_VALUE};

/// Ordinal trust tier. Variants are declared lowest first so the derived
/// `Ord` ranks higher tiers as greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TrustTier {
    C,
    CC,
    CCC,
    B,
    BB,
    BBB,
    A,
    AA,
    AAA,
}

impl TrustTier {
    /// Descending lower bounds; the first bound a score reaches wins.
    pub const THRESHOLDS: [(f64, TrustTier); 9] = [
        (90.0, TrustTier::AAA),
        (80.0, TrustTier::AA),
        (70.0, TrustTier::A),
        (60.0, TrustTier::BBB),
        (50.0, TrustTier::BB),
        (40.0, TrustTier::B),
        (30.0, TrustTier::CCC),
        (20.0, TrustTier::CC),
        (0.0, TrustTier::C),
    ];

    /// All tiers, highest first.
    pub const ALL: [TrustTier; 9] = [
        TrustTier::AAA,
        TrustTier::AA,
        TrustTier::A,
        TrustTier::BBB,
        TrustTier::BB,
        TrustTier::B,
        TrustTier::CCC,
        TrustTier::CC,
        TrustTier::C,
    ];

    /// Map a 0–100 score to its tier. Input is clamped first; NaN maps to `C`.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return TrustTier::C;
        }
        let clamped = score.clamp(MIN_FEEDBACK_VALUE, MAX_FEEDBACK_VALUE);
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| clamped >= *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(TrustTier::C)
    }

    /// Access decision granted at this tier.
    pub fn access_decision(self) -> AccessDecision {
        match self {
            TrustTier::AAA | TrustTier::AA | TrustTier::A => AccessDecision::FullAccess,
            TrustTier::BBB | TrustTier::BB | TrustTier::B => AccessDecision::Throttled,
            TrustTier::CCC | TrustTier::CC | TrustTier::C => AccessDecision::Denied,
        }
    }

    /// Canonical string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            TrustTier::AAA => "AAA",
            TrustTier::AA => "AA",
            TrustTier::A => "A",
            TrustTier::BBB => "BBB",
            TrustTier::BB => "BB",
            TrustTier::B => "B",
            TrustTier::CCC => "CCC",
            TrustTier::CC => "CC",
            TrustTier::C => "C",
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a consumer of the score is allowed to do with the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    FullAccess,
    Throttled,
    Denied,
}

impl AccessDecision {
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessDecision::FullAccess => "full_access",
            AccessDecision::Throttled => "throttled",
            AccessDecision::Denied => "denied",
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrustTier> for AccessDecision {
    fn from(tier: TrustTier) -> Self {
        tier.access_decision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_map_to_expected_tiers() {
        assert_eq!(TrustTier::from_score(100.0), TrustTier::AAA);
        assert_eq!(TrustTier::from_score(90.0), TrustTier::AAA);
        assert_eq!(TrustTier::from_score(89.99), TrustTier::AA);
        assert_eq!(TrustTier::from_score(70.0), TrustTier::A);
        assert_eq!(TrustTier::from_score(60.0), TrustTier::BBB);
        assert_eq!(TrustTier::from_score(50.0), TrustTier::BB);
        assert_eq!(TrustTier::from_score(40.0), TrustTier::B);
        assert_eq!(TrustTier::from_score(30.0), TrustTier::CCC);
        assert_eq!(TrustTier::from_score(20.0), TrustTier::CC);
        assert_eq!(TrustTier::from_score(19.99), TrustTier::C);
        assert_eq!(TrustTier::from_score(0.0), TrustTier::C);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(TrustTier::from_score(250.0), TrustTier::AAA);
        assert_eq!(TrustTier::from_score(-1.0), TrustTier::C);
        assert_eq!(TrustTier::from_score(f64::NAN), TrustTier::C);
    }

    #[test]
    fn access_decision_bands() {
        for tier in [TrustTier::AAA, TrustTier::AA, TrustTier::A] {
            assert_eq!(tier.access_decision(), AccessDecision::FullAccess);
        }
        for tier in [TrustTier::BBB, TrustTier::BB, TrustTier::B] {
            assert_eq!(tier.access_decision(), AccessDecision::Throttled);
        }
        for tier in [TrustTier::CCC, TrustTier::CC, TrustTier::C] {
            assert_eq!(tier.access_decision(), AccessDecision::Denied);
        }
    }

    #[test]
    fn higher_tiers_compare_greater() {
        assert!(TrustTier::AAA > TrustTier::AA);
        assert!(TrustTier::BBB > TrustTier::BB);
        assert!(TrustTier::CCC > TrustTier::CC);
        assert!(TrustTier::B > TrustTier::CCC);
    }

    #[test]
    fn serde_forms() {
        assert_eq!(serde_json::to_string(&TrustTier::BBB).unwrap(), "\"BBB\"");
        assert_eq!(
            serde_json::to_string(&AccessDecision::FullAccess).unwrap(),
            "\"full_access\""
        );
    }
}
