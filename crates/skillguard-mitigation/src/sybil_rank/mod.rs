//! SybilRank: seed-trust propagation over the feedback graph.
//!
//! Every address seen as submitter or agent is a node; edge weight is the
//! number of active feedback events between the pair. Trust starts on the
//! best-scored submitters ([`seeds`]) and spreads for a logarithmic number of
//! rounds ([`propagation`]). Sybil regions joined to the honest region by few
//! attack edges collect little of it.
//!
//! An entry is flagged [`MitigationFlag::LowTrustRank`] when its submitter or
//! its agent sits below `trust_threshold`. The weight is graduated on the
//! submitter's trust: `d + (1 - d) * min(trust / threshold, 1)`.

pub mod propagation;
pub mod seeds;

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use skillguard_core::config::SybilRankConfig;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;
use crate::graph::AddressGraph;

#[derive(Debug, Clone)]
pub struct SybilRankMitigation {
    config: SybilRankConfig,
    /// Address → trust normalized to [0, 1].
    trust: HashMap<String, f64>,
    seeds: Vec<String>,
    iterations: usize,
}

impl SybilRankMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &SybilRankConfig) -> Self {
        let mut graph = AddressGraph::new();
        for fb in corpus.entries() {
            graph.add_interaction(&fb.submitter_address, &fb.agent_id);
        }

        let seeds = seeds::select_seeds(corpus, config.seed_fraction);
        let seed_nodes: Vec<NodeIndex> = seeds.iter().filter_map(|s| graph.get_node(s)).collect();

        let iterations = propagation::effective_iterations(graph.node_count(), config.max_iterations);
        let initial = propagation::initial_trust(&graph, &seed_nodes, config.seed_initialization);
        let mut trust_vec = propagation::propagate(&graph, initial, iterations);
        propagation::normalize_by_max(&mut trust_vec);

        let trust: HashMap<String, f64> = graph
            .node_indices()
            .map(|n| (graph.address(n).to_string(), trust_vec[n.index()]))
            .collect();

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            seeds = seeds.len(),
            iterations,
            below_threshold = trust.values().filter(|t| **t < config.trust_threshold).count(),
            "sybil rank prepared"
        );

        Self {
            config: *config,
            trust,
            seeds,
            iterations,
        }
    }

    /// Normalized trust of `address`; unknown addresses have none.
    pub fn trust_of(&self, address: &str) -> f64 {
        self.trust.get(address).copied().unwrap_or(0.0)
    }

    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Graduated weight for a submitter with the given trust.
    pub fn graduated_weight(&self, submitter_trust: f64) -> f64 {
        let d = self.config.discount_factor;
        let ratio = (submitter_trust / self.config.trust_threshold).clamp(0.0, 1.0);
        d + (1.0 - d) * ratio
    }
}

impl IMitigation for SybilRankMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::SybilRank
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        let threshold = self.config.trust_threshold;
        target
            .iter()
            .map(|fb| {
                let submitter_trust = self.trust_of(&fb.submitter_address);
                let agent_trust = self.trust_of(&fb.agent_id);
                if submitter_trust < threshold || agent_trust < threshold {
                    MitigationResult::flagged(
                        &fb.id,
                        self.graduated_weight(submitter_trust),
                        &[MitigationFlag::LowTrustRank],
                    )
                } else {
                    MitigationResult::neutral(&fb.id)
                }
            })
            .collect()
    }
}

/// One-off SybilRank scoring of `target` against `corpus`.
pub fn evaluate(target: &[Feedback], corpus: &[Feedback], config: &SybilRankConfig) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    SybilRankMitigation::prepare(&corpus, config).evaluate(&target)
}
