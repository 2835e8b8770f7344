//! Span definitions for scoring passes.

/// Create a span for scoring one agent.
#[macro_export]
macro_rules! scoring_span {
    ($agent_id:expr, $feedback_count:expr) => {
        tracing::info_span!(
            "skillguard.score",
            agent_id = %$agent_id,
            feedback_count = $feedback_count
        )
    };
}

/// Create a span for a batch pass over a corpus.
#[macro_export]
macro_rules! batch_span {
    ($corpus_size:expr, $mode:expr) => {
        tracing::info_span!("skillguard.batch", corpus_size = $corpus_size, mode = %$mode)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "skillguard.score";
    pub const BATCH: &str = "skillguard.batch";
}

#[cfg(test)]
mod tests {
    use super::names;

    #[test]
    fn span_names_match_metadata() {
        let score = crate::scoring_span!("weather", 3usize);
        let batch = crate::batch_span!(10usize, "hardened");
        if let Some(meta) = score.metadata() {
            assert_eq!(meta.name(), names::SCORE);
        }
        if let Some(meta) = batch.metadata() {
            assert_eq!(meta.name(), names::BATCH);
        }
    }
}
