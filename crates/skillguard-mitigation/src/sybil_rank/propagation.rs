//! Bounded power iteration of seed trust.
//!
//! Each round every node hands all of its trust to its neighbors in
//! proportion to edge weight. Nothing is retained or returned, so trust that
//! cannot travel further within the round budget is gone. After the last
//! round values are scaled so the most trusted node holds 1.0.

use petgraph::graph::NodeIndex;
use skillguard_core::config::SeedInitialization;

use crate::graph::AddressGraph;

/// Number of rounds actually run: `min(max_iterations, ceil(log2(n + 1)))`.
pub fn effective_iterations(node_count: usize, max_iterations: usize) -> usize {
    if node_count == 0 {
        return 0;
    }
    let bound = ((node_count + 1) as f64).log2().ceil() as usize;
    bound.min(max_iterations)
}

/// Initial trust vector (indexed by node index) with total mass 1.0 on the seeds.
pub fn initial_trust(graph: &AddressGraph, seeds: &[NodeIndex], init: SeedInitialization) -> Vec<f64> {
    let mut trust = vec![0.0; graph.node_count()];
    if seeds.is_empty() {
        return trust;
    }

    let degrees: Vec<f64> = seeds.iter().map(|s| graph.weighted_degree(*s) as f64).collect();
    let degree_sum: f64 = degrees.iter().sum();

    match init {
        SeedInitialization::DegreeWeighted if degree_sum > 0.0 => {
            for (seed, degree) in seeds.iter().zip(&degrees) {
                trust[seed.index()] += degree / degree_sum;
            }
        }
        _ => {
            let share = 1.0 / seeds.len() as f64;
            for seed in seeds {
                trust[seed.index()] += share;
            }
        }
    }
    trust
}

/// Run `rounds` of propagation starting from `trust`.
pub fn propagate(graph: &AddressGraph, mut trust: Vec<f64>, rounds: usize) -> Vec<f64> {
    let degrees: Vec<u64> = graph.node_indices().map(|n| graph.weighted_degree(n)).collect();

    for _ in 0..rounds {
        let mut next = vec![0.0; trust.len()];
        for node in graph.node_indices() {
            let held = trust[node.index()];
            let degree = degrees[node.index()];
            if held <= 0.0 || degree == 0 {
                continue;
            }
            for (neighbor, weight) in graph.weighted_neighbors(node) {
                next[neighbor.index()] += held * f64::from(weight) / degree as f64;
            }
        }
        trust = next;
    }
    trust
}

/// Scale so the maximum is 1.0. An all-zero vector stays all zero.
pub fn normalize_by_max(trust: &mut [f64]) {
    let max = trust.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return;
    }
    for value in trust.iter_mut() {
        *value /= max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_count_is_logarithmic() {
        assert_eq!(effective_iterations(0, 20), 0);
        assert_eq!(effective_iterations(1, 20), 1);
        assert_eq!(effective_iterations(3, 20), 2);
        assert_eq!(effective_iterations(4, 20), 3);
        assert_eq!(effective_iterations(67, 20), 7);
        assert_eq!(effective_iterations(1_000_000, 5), 5);
    }

    #[test]
    fn degree_weighted_init_splits_by_degree() {
        let mut g = AddressGraph::new();
        g.add_interaction("a", "x");
        g.add_interaction("a", "y");
        g.add_interaction("a", "z");
        g.add_interaction("b", "x");
        let seeds = vec![g.get_node("a").unwrap(), g.get_node("b").unwrap()];
        let trust = initial_trust(&g, &seeds, SeedInitialization::DegreeWeighted);
        assert!((trust[seeds[0].index()] - 0.75).abs() < 1e-12);
        assert!((trust[seeds[1].index()] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn uniform_init_splits_evenly() {
        let mut g = AddressGraph::new();
        g.add_interaction("a", "x");
        g.add_interaction("b", "x");
        let seeds = vec![g.get_node("a").unwrap(), g.get_node("b").unwrap()];
        let trust = initial_trust(&g, &seeds, SeedInitialization::Uniform);
        assert_eq!(trust[seeds[0].index()], 0.5);
        assert_eq!(trust[seeds[1].index()], 0.5);
    }

    #[test]
    fn propagation_moves_trust_along_weighted_edges() {
        let mut g = AddressGraph::new();
        g.add_interaction("seed", "a");
        g.add_interaction("seed", "a");
        g.add_interaction("seed", "b");
        let seed = g.get_node("seed").unwrap();
        let mut trust = vec![0.0; g.node_count()];
        trust[seed.index()] = 1.0;
        let after = propagate(&g, trust, 1);
        let a = g.get_node("a").unwrap().index();
        let b = g.get_node("b").unwrap().index();
        assert!((after[a] - 2.0 / 3.0).abs() < 1e-12);
        assert!((after[b] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(after[seed.index()], 0.0);
    }

    #[test]
    fn isolated_nodes_lose_their_trust() {
        let mut g = AddressGraph::new();
        g.ensure_node("island");
        let trust = propagate(&g, vec![1.0], 1);
        assert_eq!(trust, vec![0.0]);
    }

    #[test]
    fn normalization_tops_out_at_one() {
        let mut trust = vec![0.2, 0.4, 0.1];
        normalize_by_max(&mut trust);
        assert_eq!(trust, vec![0.5, 1.0, 0.25]);
        let mut zeros = vec![0.0, 0.0];
        normalize_by_max(&mut zeros);
        assert_eq!(zeros, vec![0.0, 0.0]);
    }
}
