//! # skillguard-mitigation
//!
//! Detection algorithms over an immutable feedback snapshot:
//! mutual-feedback graph analysis, velocity and new-submitter bursts,
//! temporal decay, submitter recency, SybilRank, Jaccard behavioral
//! clustering, and temporal correlation.
//!
//! Each detector implements [`IMitigation`](skillguard_core::IMitigation):
//! cross-agent analysis happens once in `prepare`, after which the detector
//! scores any agent of the snapshot. Every module also exposes a free
//! `evaluate` function for one-off use.

pub mod anomaly;
pub mod corpus;
pub mod decay;
pub mod graph;
pub mod graph_analysis;
pub mod jaccard;
pub mod recency;
pub mod suite;
pub mod sybil_rank;
pub mod temporal;
pub mod velocity;
mod window;

pub use anomaly::AnomalyMitigation;
pub use corpus::Corpus;
pub use decay::TemporalDecayMitigation;
pub use graph::AddressGraph;
pub use graph_analysis::GraphMitigation;
pub use jaccard::JaccardMitigation;
pub use recency::SubmitterRecencyMitigation;
pub use suite::MitigationSuite;
pub use sybil_rank::SybilRankMitigation;
pub use temporal::TemporalCorrelationMitigation;
pub use velocity::VelocityMitigation;
