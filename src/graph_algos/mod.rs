
pub mod dijkstra;
mod shortest_path;

use std::hash::Hash;

use crate::collections::FxIndexMap;

/// Adjacency-list graph consumed by the shortest-path engine
/// N: Node identifier - any hashable, equality-comparable value
/// C: Edge weight - must be non-negative for Dijkstra to be correct
///   (a documented precondition, not a runtime check)
/// A node absent from the map has no outgoing edges; it may still appear
/// as a destination of other nodes' edges
pub type Graph<N, C> = FxIndexMap<N, FxIndexMap<N, C>>;

/// Result of a Dijkstra run over a [`Graph`]
/// Maps each reached node to (predecessor indices, cost) where:
/// - the indices point back into this same map and identify every retained
///   predecessor on a minimum-cost path to the node (empty for the start)
/// - cost is the minimum accumulated cost from the start node
/// A node absent from the map is unreachable
pub type GraphNodeMap<N, C> = FxIndexMap<N, (Vec<usize>, C)>;

/// Insert or overwrite the `from -> to` edge with the given weight
/// Creates the adjacency entry for `from` if it does not exist yet
pub fn add_edge<N, C>(graph: &mut Graph<N, C>, from: N, to: N, weight: C)
where
    N: Eq + Hash,
{
    graph.entry(from).or_default().insert(to, weight);
}
