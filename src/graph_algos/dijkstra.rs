use crate::graph_algos::{Graph, GraphNodeMap};
use super::shortest_path::collect_paths;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Find the minimum-cost path(s) from `start` to `destination` using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Returns the list of paths (each ordered start to destination, inclusive) and the
/// minimum cost. An unreachable or unknown destination is not an error: the result
/// is an empty path list and a cost of `None`.
///
/// With `return_all_paths` set, every path tied at the minimum cost is reconstructed;
/// the number of tied optima can grow exponentially in pathological graphs, so enabling
/// it trades performance for completeness. Without it, exactly one path is returned
/// (the one through each node's first-discovered best predecessor).
pub fn shortest_paths<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    destination: &N,
    return_all_paths: bool,
) -> (Vec<Vec<N>>, Option<C>)
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    shortest_paths_matching(graph, start, |node| node == destination, return_all_paths)
}


/// Same as [`shortest_paths`], with the destination given as a predicate
/// Useful when several graph nodes qualify as the destination, e.g. a target
/// grid location that can be entered in different states
/// Of all matching nodes, only those at the global minimum cost contribute paths
pub fn shortest_paths_matching<N, C, G>(
    graph: &Graph<N, C>,
    start: &N,
    goal: G,
    return_all_paths: bool,
) -> (Vec<Vec<N>>, Option<C>)
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
{
    let node_map = dijkstra_nodes(graph, start, return_all_paths);

    // Every reached node matching the goal, with its index in the node map
    let candidates: Vec<(usize, C)> = node_map
        .iter()
        .enumerate()
        .filter(|&(_, (node, _))| goal(node))
        .map(|(index, (_, &(_, cost)))| (index, cost))
        .collect();

    // No reached node matches - the designed "no path" signal, not an error
    let Some(lowest_cost) = candidates.iter().map(|&(_, cost)| cost).min() else {
        return (Vec::new(), None);
    };

    // Keep only the end nodes that achieve the minimum cost
    let end_indices: Vec<usize> = candidates
        .into_iter()
        .filter(|&(_, cost)| cost == lowest_cost)
        .map(|(index, _)| index)
        .collect();

    // The start node is always the first entry in the node map
    let paths = collect_paths(&node_map, 0, &end_indices);

    (paths, Some(lowest_cost))
}


/// Single-source Dijkstra over the whole graph
/// Returns the map of all reachable nodes with their minimum costs and the
/// predecessors that achieve them (see [`GraphNodeMap`])
///
/// The run is not cut short at any goal: equal-cost predecessors of a node can
/// still be discovered after the node itself has been expanded, and a partial
/// run would miss them.
///
/// When `return_all_paths` is false each node keeps only its first-discovered
/// best predecessor; when true, every predecessor reaching the node at the same
/// minimum cost is kept. The pop order of equal-cost queue entries follows
/// `BinaryHeap` internals and is unspecified, so *which* single predecessor is
/// first-discovered among ties is not guaranteed.
pub fn dijkstra_nodes<N, C>(graph: &Graph<N, C>, start: &N, return_all_paths: bool) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    // Nodes to visit - binary heap sorts Biggest to Smallest
    // Dijkstra's algorithm uses a priority queue to always expand the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // Visited nodes - cost is known, no longer need to visit
    // The start node has no predecessors; every other reached node records the
    // map indices of the nodes a minimum-cost path arrives from
    let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    let start_index = node_map.insert_full(start.clone(), (Vec::new(), Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let (node, entry) = node_map.get_index(index).unwrap();

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > entry.1 {
            continue;
        }

        // A node with no outgoing edges is a dead end - never expanded,
        // but still a valid destination if reached
        let Some(edges) = graph.get(node) else {
            continue;
        };

        // loop over neighbors
        for (neighbor, &weight) in edges {

            // new cost to reach this node = edge cost + node cost
            let tentative = weight + cost;

            match node_map.entry(neighbor.clone()) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert((vec![index], tentative));
                    nodes_to_visit.push(NodeId {
                        index: neighbor_index,
                        cost: tentative,
                    });
                }
                Occupied(mut e) => {
                    let best = e.get().1;
                    if tentative < best {
                        // We've found a better path to this neighbor
                        let neighbor_index = e.index();
                        e.insert((vec![index], tentative));
                        nodes_to_visit.push(NodeId {
                            index: neighbor_index,
                            cost: tentative,
                        });
                    } else if return_all_paths && tentative == best {
                        // An equally cheap route - record the extra predecessor
                        // The cost is unchanged, so there is nothing to relax further
                        e.get_mut().0.push(index);
                    }
                }
            }
        }
    }

    node_map
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
/// - Nodes can contain additional data, but we only need to identify them
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T,
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}
