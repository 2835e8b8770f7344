//! Mutual-feedback pair and Sybil cluster detection.
//!
//! An undirected edge `(A, B)` exists when A rated the agent keyed by B and
//! B rated the agent keyed by A. Detection runs at two levels:
//!
//! - pair: an entry whose submitter/agent pair is mutual is flagged
//!   [`MitigationFlag::MutualFeedback`]. A self-rating satisfies the mutual
//!   condition trivially and is flagged the same way.
//! - cluster: BFS components of the mutual graph with at least two members
//!   are Sybil clusters. Every entry whose agent or submitter belongs to one
//!   is flagged [`MitigationFlag::SybilCluster`], which catches alt addresses
//!   that rate a clustered agent without forming a mutual edge themselves.
//!
//! Flagged entries weigh `discount_factor`; everything else weighs 1.0.

use std::collections::HashSet;

use skillguard_core::config::GraphConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;
use crate::graph::{connected_components, AddressGraph};

/// Minimum members for a mutual-graph component to count as a Sybil cluster.
const MIN_SYBIL_CLUSTER_SIZE: usize = 2;

/// Graph analysis prepared against one corpus.
#[derive(Debug, Clone)]
pub struct GraphMitigation {
    config: GraphConfig,
    /// Normalized `(min, max)` address pairs with a mutual edge.
    mutual_pairs: HashSet<(String, String)>,
    clusters: Vec<Vec<String>>,
    clustered: HashSet<String>,
}

impl GraphMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &GraphConfig) -> Self {
        let directed: HashSet<(&str, &str)> = corpus
            .entries()
            .iter()
            .filter(|f| !f.is_self_rating())
            .map(|f| (f.submitter_address.as_str(), f.agent_id.as_str()))
            .collect();

        let mut mutual_graph = AddressGraph::new();
        let mut mutual_pairs = HashSet::new();
        for &(submitter, agent) in &directed {
            if submitter < agent && directed.contains(&(agent, submitter)) {
                mutual_graph.connect(submitter, agent);
                mutual_pairs.insert((submitter.to_string(), agent.to_string()));
            }
        }

        let clusters = connected_components(&mutual_graph, MIN_SYBIL_CLUSTER_SIZE);
        let clustered: HashSet<String> = clusters.iter().flatten().cloned().collect();

        debug!(
            mutual_pairs = mutual_pairs.len(),
            clusters = clusters.len(),
            clustered_addresses = clustered.len(),
            "graph analysis prepared"
        );

        Self {
            config: *config,
            mutual_pairs,
            clusters,
            clustered,
        }
    }

    /// Sybil clusters, each a sorted address list.
    pub fn clusters(&self) -> &[Vec<String>] {
        &self.clusters
    }

    /// Number of distinct mutual pairs (self-ratings excluded).
    pub fn mutual_pair_count(&self) -> usize {
        self.mutual_pairs.len()
    }

    pub fn is_clustered(&self, address: &str) -> bool {
        self.clustered.contains(address)
    }

    /// Whether `a` and `b` rated each other. A self-pair is always mutual.
    pub fn is_mutual(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        let key = if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        self.mutual_pairs.contains(&key)
    }

    fn flags_for(&self, fb: &Feedback) -> Vec<MitigationFlag> {
        let mut flags = Vec::new();
        if self.is_mutual(&fb.submitter_address, &fb.agent_id) {
            flags.push(MitigationFlag::MutualFeedback);
        }
        if self.is_clustered(&fb.agent_id) || self.is_clustered(&fb.submitter_address) {
            flags.push(MitigationFlag::SybilCluster);
        }
        flags
    }
}

impl IMitigation for GraphMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::GraphAnalysis
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        target
            .iter()
            .map(|fb| {
                let flags = self.flags_for(fb);
                if flags.is_empty() {
                    MitigationResult::neutral(&fb.id)
                } else {
                    MitigationResult::flagged(&fb.id, self.config.discount_factor, &flags)
                }
            })
            .collect()
    }
}

/// One-off graph analysis of `target` against `corpus`.
pub fn evaluate(target: &[Feedback], corpus: &[Feedback], config: &GraphConfig) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    GraphMitigation::prepare(&corpus, config).evaluate(&target)
}
