//! # skillguard-core
//!
//! Foundation crate for the Skillguard trust scoring engine.
//! Defines the feedback data model, tier mapping, mitigation config,
//! errors, constants, and the mitigation trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MitigationConfig;
pub use errors::{SkillguardError, SkillguardResult};
pub use models::{
    now_ms, AccessDecision, Feedback, FeedbackSummary, MitigationFlag, MitigationKind,
    MitigationResult, Timestamp, TrustTier,
};
pub use traits::IMitigation;
