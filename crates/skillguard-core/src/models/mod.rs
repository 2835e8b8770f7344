pub mod feedback;
pub mod mitigation;
pub mod summary;
pub mod tier;

pub use feedback::{now_ms, Feedback, Timestamp};
pub use mitigation::{MitigationFlag, MitigationKind, MitigationResult};
pub use summary::FeedbackSummary;
pub use tier::{AccessDecision, TrustTier};
