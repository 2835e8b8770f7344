//! Read-only view over one feedback snapshot.
//!
//! Revoked entries are dropped on construction; nothing downstream ever sees
//! them. Per-submitter indexes are built once and shared by every detector.

use std::collections::{BTreeMap, BTreeSet};

use skillguard_core::models::{Feedback, Timestamp};

/// Active feedback of a snapshot plus per-submitter indexes.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    entries: Vec<&'a Feedback>,
    /// Submitter → earliest active timestamp.
    first_seen: BTreeMap<&'a str, Timestamp>,
    /// Submitter → sorted active timestamps across all agents.
    timelines: BTreeMap<&'a str, Vec<Timestamp>>,
}

impl<'a> Corpus<'a> {
    pub fn new(feedback: &'a [Feedback]) -> Self {
        Self::from_entries(feedback.iter())
    }

    pub fn from_entries(feedback: impl IntoIterator<Item = &'a Feedback>) -> Self {
        let entries: Vec<&'a Feedback> = feedback.into_iter().filter(|f| f.is_active()).collect();

        let mut timelines: BTreeMap<&'a str, Vec<Timestamp>> = BTreeMap::new();
        for fb in &entries {
            timelines
                .entry(fb.submitter_address.as_str())
                .or_default()
                .push(fb.timestamp);
        }
        for timeline in timelines.values_mut() {
            timeline.sort_unstable();
        }

        let first_seen = timelines
            .iter()
            .filter_map(|(addr, ts)| ts.first().map(|first| (*addr, *first)))
            .collect();

        Self {
            entries,
            first_seen,
            timelines,
        }
    }

    /// Active entries in input order.
    pub fn entries(&self) -> &[&'a Feedback] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active entries rating `agent_id`, in input order.
    pub fn for_agent(&self, agent_id: &str) -> Vec<&'a Feedback> {
        self.entries
            .iter()
            .copied()
            .filter(|f| f.agent_id == agent_id)
            .collect()
    }

    /// Distinct rated agents, sorted.
    pub fn agent_ids(&self) -> BTreeSet<&'a str> {
        self.entries.iter().map(|f| f.agent_id.as_str()).collect()
    }

    /// Earliest active timestamp per submitter.
    pub fn first_seen(&self) -> &BTreeMap<&'a str, Timestamp> {
        &self.first_seen
    }

    /// Sorted active timestamps per submitter.
    pub fn timelines(&self) -> &BTreeMap<&'a str, Vec<Timestamp>> {
        &self.timelines
    }

    pub fn submitter_count(&self) -> usize {
        self.timelines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(id: &str, agent: &str, submitter: &str, ts: Timestamp) -> Feedback {
        Feedback::with_id(id, agent, submitter, 80.0, ts)
    }

    #[test]
    fn revoked_entries_are_dropped() {
        let mut revoked = fb("2", "a", "s2", 20);
        revoked.revoke();
        let feedback = vec![fb("1", "a", "s1", 10), revoked];
        let corpus = Corpus::new(&feedback);
        assert_eq!(corpus.len(), 1);
        assert!(!corpus.first_seen().contains_key("s2"));
    }

    #[test]
    fn timelines_are_sorted_and_first_seen_is_minimum() {
        let feedback = vec![
            fb("1", "a", "s1", 300),
            fb("2", "b", "s1", 100),
            fb("3", "c", "s1", 200),
        ];
        let corpus = Corpus::new(&feedback);
        assert_eq!(corpus.timelines()["s1"], vec![100, 200, 300]);
        assert_eq!(corpus.first_seen()["s1"], 100);
    }

    #[test]
    fn for_agent_filters_by_agent() {
        let feedback = vec![fb("1", "a", "s1", 1), fb("2", "b", "s1", 2), fb("3", "a", "s2", 3)];
        let corpus = Corpus::new(&feedback);
        let ids: Vec<&str> = corpus.for_agent("a").iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(corpus.agent_ids().len(), 2);
    }

    #[test]
    fn empty_corpus_is_empty() {
        let corpus = Corpus::new(&[]);
        assert!(corpus.is_empty());
        assert_eq!(corpus.submitter_count(), 0);
    }
}
