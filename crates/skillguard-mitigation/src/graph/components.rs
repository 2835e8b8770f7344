use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;

use super::AddressGraph;

/// Connected components (BFS) with at least `min_size` members.
///
/// Each component is returned as a sorted list of addresses; components are
/// ordered by their first address.
pub fn connected_components(graph: &AddressGraph, min_size: usize) -> Vec<Vec<String>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();

    for start in graph.node_indices() {
        if visited[start.index()] {
            continue;
        }
        let mut members: Vec<NodeIndex> = Vec::new();
        let mut bfs = Bfs::new(&graph.graph, start);
        while let Some(node) = bfs.next(&graph.graph) {
            visited[node.index()] = true;
            members.push(node);
        }
        if members.len() >= min_size {
            let mut addresses: Vec<String> = members
                .into_iter()
                .map(|idx| graph.address(idx).to_string())
                .collect();
            addresses.sort_unstable();
            components.push(addresses);
        }
    }

    components.sort();
    components
}
