use crate::models::{Feedback, MitigationKind, MitigationResult};

/// A detection algorithm prepared against one corpus snapshot.
///
/// Implementations do their cross-agent analysis when they are constructed
/// and are read-only afterwards, so one prepared mitigation can score every
/// agent of the snapshot, from any thread.
pub trait IMitigation: Send + Sync {
    /// Which detector this is.
    fn kind(&self) -> MitigationKind;

    /// Produce one result per entry of `target` (an agent's active feedback).
    /// Must be total: no data means neutral results, never a panic.
    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult>;
}
