use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected weighted graph keyed by address.
#[derive(Debug, Clone, Default)]
pub struct AddressGraph {
    pub graph: UnGraph<String, u32>,
    index: HashMap<String, NodeIndex>,
}

impl AddressGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the node for `address`, inserting it if absent.
    pub fn ensure_node(&mut self, address: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(address) {
            return idx;
        }
        let idx = self.graph.add_node(address.to_string());
        self.index.insert(address.to_string(), idx);
        idx
    }

    pub fn get_node(&self, address: &str) -> Option<NodeIndex> {
        self.index.get(address).copied()
    }

    /// Address stored at `idx`.
    pub fn address(&self, idx: NodeIndex) -> &str {
        self.graph
            .node_weight(idx)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Record one interaction between `a` and `b`, bumping the edge weight.
    /// Self-interactions register the node but add no edge.
    pub fn add_interaction(&mut self, a: &str, b: &str) {
        let ia = self.ensure_node(a);
        let ib = self.ensure_node(b);
        if ia == ib {
            return;
        }
        match self.graph.find_edge(ia, ib) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    *weight += 1;
                }
            }
            None => {
                self.graph.add_edge(ia, ib, 1);
            }
        }
    }

    /// Connect `a` and `b` with a unit edge unless they are already connected.
    pub fn connect(&mut self, a: &str, b: &str) {
        let ia = self.ensure_node(a);
        let ib = self.ensure_node(b);
        if ia != ib && self.graph.find_edge(ia, ib).is_none() {
            self.graph.add_edge(ia, ib, 1);
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Weight of the edge between `a` and `b`, 0 when unconnected.
    pub fn edge_weight(&self, a: &str, b: &str) -> u32 {
        match (self.get_node(a), self.get_node(b)) {
            (Some(ia), Some(ib)) => self
                .graph
                .find_edge(ia, ib)
                .and_then(|e| self.graph.edge_weight(e))
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Neighbors of `idx` with the connecting edge weight.
    pub fn weighted_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, u32)> + '_ {
        self.graph.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }

    /// Sum of incident edge weights.
    pub fn weighted_degree(&self, idx: NodeIndex) -> u64 {
        self.graph.edges(idx).map(|e| u64::from(*e.weight())).sum()
    }

    /// All node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactions_accumulate_weight() {
        let mut g = AddressGraph::new();
        g.add_interaction("a", "b");
        g.add_interaction("b", "a");
        g.add_interaction("a", "c");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_weight("a", "b"), 2);
        assert_eq!(g.edge_weight("b", "a"), 2);
        let a = g.get_node("a").unwrap();
        assert_eq!(g.weighted_degree(a), 3);
    }

    #[test]
    fn self_interaction_adds_node_without_edge() {
        let mut g = AddressGraph::new();
        g.add_interaction("a", "a");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn same_address_in_both_roles_is_one_node() {
        let mut g = AddressGraph::new();
        g.add_interaction("alice", "bob");
        g.add_interaction("bob", "carol");
        assert_eq!(g.node_count(), 3);
        let bob = g.get_node("bob").unwrap();
        let mut neighbors: Vec<&str> = g.weighted_neighbors(bob).map(|(n, _)| g.address(n)).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["alice", "carol"]);
    }

    #[test]
    fn connect_is_idempotent() {
        let mut g = AddressGraph::new();
        g.connect("a", "b");
        g.connect("b", "a");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight("a", "b"), 1);
    }

    #[test]
    fn missing_edge_weight_is_zero() {
        let g = AddressGraph::new();
        assert_eq!(g.edge_weight("x", "y"), 0);
    }
}
