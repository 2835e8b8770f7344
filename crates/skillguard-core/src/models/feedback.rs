//! A single rating event from the registry's feedback log.
//!
//! # Examples
//!
//! ```
//! use skillguard_core::models::Feedback;
//!
//! let fb = Feedback::new("gmail-integration", "0xalice", 92.0, 1_700_000_000_000);
//! assert!(fb.is_active());
//! assert_eq!(fb.agent_id, "gmail-integration");
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_FEEDBACK_VALUE, MIN_FEEDBACK_VALUE};

/// Event time in epoch milliseconds.
pub type Timestamp = i64;

/// Current wall-clock time in epoch milliseconds.
///
/// Scoring never calls this itself; hosts pass the result in explicitly.
pub fn now_ms() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// One rating of an agent by a submitter address.
///
/// Immutable once created except for the `revoked` flip. Revoked entries are
/// excluded from every computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Unique feedback identifier.
    pub id: String,
    /// The rated subject. Doubles as the owning address' proxy identity.
    pub agent_id: String,
    /// Rater identity. Not necessarily cryptographically verified.
    pub submitter_address: String,
    /// Rating in 0–100.
    pub value: f64,
    /// Event time in epoch milliseconds.
    #[ts(type = "number")]
    pub timestamp: Timestamp,
    /// Revoked feedback is ignored by both engines.
    #[serde(default)]
    pub revoked: bool,
}

impl Feedback {
    /// Create an active feedback entry with a fresh v4 UUID.
    pub fn new(
        agent_id: impl Into<String>,
        submitter_address: impl Into<String>,
        value: f64,
        timestamp: Timestamp,
    ) -> Self {
        Self::with_id(
            uuid::Uuid::new_v4().to_string(),
            agent_id,
            submitter_address,
            value,
            timestamp,
        )
    }

    /// Create an active feedback entry with a caller-chosen ID.
    pub fn with_id(
        id: impl Into<String>,
        agent_id: impl Into<String>,
        submitter_address: impl Into<String>,
        value: f64,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            agent_id: agent_id.into(),
            submitter_address: submitter_address.into(),
            value,
            timestamp,
            revoked: false,
        }
    }

    /// Whether this entry participates in scoring.
    pub fn is_active(&self) -> bool {
        !self.revoked
    }

    /// Whether the submitter rated its own agent.
    pub fn is_self_rating(&self) -> bool {
        self.agent_id == self.submitter_address
    }

    /// Rating clamped into [0, 100].
    pub fn clamped_value(&self) -> f64 {
        self.value.clamp(MIN_FEEDBACK_VALUE, MAX_FEEDBACK_VALUE)
    }

    /// Event time as a UTC datetime, if the timestamp is representable.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// Mark this entry revoked.
    pub fn revoke(&mut self) {
        self.revoked = true;
    }

    /// Undo a revocation.
    pub fn reinstate(&mut self) {
        self.revoked = false;
    }
}
