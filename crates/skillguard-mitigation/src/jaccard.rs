//! Behavioral-overlap clustering of reviewers.
//!
//! Submitters that rated at least `min_agents_reviewed` distinct agents get a
//! profile: the set of agents they rated plus their average value per agent.
//! A pair of profiles becomes an edge when both their raw Jaccard similarity
//! and the blended score `0.6 * jaccard + 0.4 * value_alignment` exceed
//! `similarity_threshold`. Components of at least `min_cluster_size` members
//! are behavioral clusters. This catches review rings that target the same
//! skills with similar scores without ever rating each other.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use skillguard_core::config::JaccardConfig;
use skillguard_core::constants::MAX_FEEDBACK_VALUE;
use skillguard_core::models::{Feedback, MitigationFlag, MitigationKind, MitigationResult};
use skillguard_core::traits::IMitigation;
use tracing::debug;

use crate::corpus::Corpus;
use crate::graph::{connected_components, AddressGraph};

const JACCARD_WEIGHT: f64 = 0.6;
const ALIGNMENT_WEIGHT: f64 = 0.4;

/// Agents a submitter rated, with the mean value given to each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewProfile {
    averages: BTreeMap<String, f64>,
}

impl ReviewProfile {
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.averages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    pub fn average_for(&self, agent_id: &str) -> Option<f64> {
        self.averages.get(agent_id).copied()
    }
}

/// Profiles for every submitter with at least `min_agents` distinct targets.
pub fn build_profiles(corpus: &Corpus<'_>, min_agents: usize) -> BTreeMap<String, ReviewProfile> {
    let mut sums: BTreeMap<&str, BTreeMap<&str, (f64, usize)>> = BTreeMap::new();
    for fb in corpus.entries() {
        let slot = sums
            .entry(fb.submitter_address.as_str())
            .or_default()
            .entry(fb.agent_id.as_str())
            .or_insert((0.0, 0));
        slot.0 += fb.clamped_value();
        slot.1 += 1;
    }

    sums.into_iter()
        .filter(|(_, targets)| targets.len() >= min_agents)
        .map(|(submitter, targets)| {
            let averages = targets
                .into_iter()
                .map(|(agent, (sum, count))| (agent.to_string(), sum / count as f64))
                .collect();
            (submitter.to_string(), ReviewProfile { averages })
        })
        .collect()
}

/// `|A ∩ B| / |A ∪ B|` over target sets; 0 when both are empty.
pub fn jaccard_similarity(a: &ReviewProfile, b: &ReviewProfile) -> f64 {
    let intersection = a.averages.keys().filter(|k| b.averages.contains_key(*k)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// `1 - mean(|avg_a - avg_b| / 100)` over commonly rated agents; 0 with none in common.
pub fn value_alignment(a: &ReviewProfile, b: &ReviewProfile) -> f64 {
    let diffs: Vec<f64> = a
        .averages
        .iter()
        .filter_map(|(agent, va)| {
            b.average_for(agent)
                .map(|vb| (va - vb).abs() / MAX_FEEDBACK_VALUE)
        })
        .collect();
    if diffs.is_empty() {
        return 0.0;
    }
    1.0 - diffs.iter().sum::<f64>() / diffs.len() as f64
}

/// Blended similarity, or `None` when the raw Jaccard index does not clear the threshold.
pub fn combined_similarity(a: &ReviewProfile, b: &ReviewProfile, threshold: f64) -> Option<f64> {
    let jaccard = jaccard_similarity(a, b);
    if jaccard <= threshold {
        return None;
    }
    Some(JACCARD_WEIGHT * jaccard + ALIGNMENT_WEIGHT * value_alignment(a, b))
}

#[derive(Debug, Clone)]
pub struct JaccardMitigation {
    config: JaccardConfig,
    clusters: Vec<Vec<String>>,
    clustered: HashSet<String>,
}

impl JaccardMitigation {
    pub fn prepare(corpus: &Corpus<'_>, config: &JaccardConfig) -> Self {
        let profiles = build_profiles(corpus, config.min_agents_reviewed);
        let profiled: Vec<(&String, &ReviewProfile)> = profiles.iter().collect();
        let pool = profiled.as_slice();
        let threshold = config.similarity_threshold;

        let edges: Vec<(&str, &str)> = (0..pool.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                let (addr_a, profile_a) = pool[i];
                pool[i + 1..].iter().filter_map(move |(addr_b, profile_b)| {
                    combined_similarity(profile_a, profile_b, threshold)
                        .filter(|score| *score > threshold)
                        .map(|_| (addr_a.as_str(), addr_b.as_str()))
                })
            })
            .collect();

        let mut graph = AddressGraph::new();
        for (a, b) in &edges {
            graph.connect(a, b);
        }
        let clusters = connected_components(&graph, config.min_cluster_size);
        let clustered: HashSet<String> = clusters.iter().flatten().cloned().collect();

        debug!(
            profiles = profiles.len(),
            edges = edges.len(),
            clusters = clusters.len(),
            "jaccard clustering prepared"
        );

        Self {
            config: *config,
            clusters,
            clustered,
        }
    }

    pub fn clusters(&self) -> &[Vec<String>] {
        &self.clusters
    }

    pub fn is_clustered(&self, address: &str) -> bool {
        self.clustered.contains(address)
    }
}

impl IMitigation for JaccardMitigation {
    fn kind(&self) -> MitigationKind {
        MitigationKind::Jaccard
    }

    fn evaluate(&self, target: &[&Feedback]) -> Vec<MitigationResult> {
        target
            .iter()
            .map(|fb| {
                if self.is_clustered(&fb.submitter_address) {
                    MitigationResult::flagged(
                        &fb.id,
                        self.config.discount_factor,
                        &[MitigationFlag::BehavioralCluster],
                    )
                } else {
                    MitigationResult::neutral(&fb.id)
                }
            })
            .collect()
    }
}

/// One-off behavioral clustering of `target` against `corpus`.
pub fn evaluate(target: &[Feedback], corpus: &[Feedback], config: &JaccardConfig) -> Vec<MitigationResult> {
    let corpus = Corpus::new(corpus);
    let target: Vec<&Feedback> = target.iter().filter(|f| f.is_active()).collect();
    JaccardMitigation::prepare(&corpus, config).evaluate(&target)
}
