//! Index-based undirected address graph.
//!
//! Nodes are addresses (submitters and agents share one namespace), edges
//! carry interaction counts. Backed by a `petgraph` arena so every address
//! has a stable integer index regardless of the role it plays.

mod address_graph;
mod components;

pub use address_graph::AddressGraph;
pub use components::connected_components;
