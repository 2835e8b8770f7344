//! Recommended parameter values for every mitigation.

use crate::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_SECOND};

// Graph analysis
pub const DEFAULT_GRAPH_DISCOUNT: f64 = 0.1;

// Velocity
pub const DEFAULT_VELOCITY_WINDOW_MS: i64 = 60 * MS_PER_SECOND;
pub const DEFAULT_VELOCITY_MAX_IN_WINDOW: usize = 10;
pub const DEFAULT_VELOCITY_DISCOUNT: f64 = 0.5;

// New-submitter burst
pub const DEFAULT_ANOMALY_WINDOW_MS: i64 = MS_PER_HOUR;
pub const DEFAULT_ANOMALY_MAX_NEW_IN_WINDOW: usize = 5;
pub const DEFAULT_ANOMALY_DISCOUNT: f64 = 0.1;

// Temporal decay
pub const DEFAULT_DECAY_HALF_LIFE_MS: i64 = MS_PER_DAY;

// Submitter recency
pub const DEFAULT_RECENT_THRESHOLD: f64 = 0.2;
pub const DEFAULT_RECENCY_DISCOUNT: f64 = 0.2;

// SybilRank
pub const DEFAULT_SYBIL_RANK_MAX_ITERATIONS: usize = 20;
pub const DEFAULT_SYBIL_RANK_TRUST_THRESHOLD: f64 = 0.2;
pub const DEFAULT_SYBIL_RANK_DISCOUNT: f64 = 0.3;
pub const DEFAULT_SYBIL_RANK_SEED_FRACTION: f64 = 0.25;

// Jaccard behavioral clustering
pub const DEFAULT_JACCARD_MIN_AGENTS_REVIEWED: usize = 2;
pub const DEFAULT_JACCARD_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_JACCARD_MIN_CLUSTER_SIZE: usize = 3;
pub const DEFAULT_JACCARD_DISCOUNT: f64 = 0.15;

// Temporal correlation
pub const DEFAULT_MIN_LOCKSTEP_EVENTS: usize = 3;
pub const DEFAULT_LOCKSTEP_WINDOW_MS: i64 = 5 * MS_PER_SECOND;
pub const DEFAULT_MIN_COINCIDENCE_RATE: f64 = 0.5;
pub const DEFAULT_MIN_FEEDBACK_FOR_REGULARITY: usize = 5;
pub const DEFAULT_REGULARITY_THRESHOLD: f64 = 0.15;
pub const DEFAULT_TEMPORAL_CORRELATION_DISCOUNT: f64 = 0.2;
