use super::GraphNodeMap;

/// Reconstruct every recorded minimum-cost path from the end nodes back to the start
/// Returns the paths ordered from start to end, one per predecessor branch
/// node_map: GraphNodeMap<N, C> - map of nodes with their predecessor indices and costs
/// start_index: usize - index of the start node in the node_map
/// end_indices: &[usize] - indices of the minimum-cost end nodes
///
/// The walk is iterative over an explicit stack so long paths are not limited by
/// recursion depth; predecessor chains are acyclic under non-negative weights,
/// so no cycle guard is needed. A non-start node without recorded predecessors
/// ends its branch without emitting a path.
pub(crate) fn collect_paths<N, C>(
    node_map: &GraphNodeMap<N, C>,
    start_index: usize,
    end_indices: &[usize],
) -> Vec<Vec<N>>
where
    N: Clone,
{
    let mut all_paths = Vec::new();

    // Partial paths stored end-first; the last element is the node closest to
    // the start reached so far
    let mut stack: Vec<Vec<usize>> = end_indices.iter().map(|&index| vec![index]).collect();

    while let Some(partial) = stack.pop() {
        let &backmost = partial.last().unwrap(); // partial paths are never empty

        if backmost == start_index {
            // Reached the start - reverse into start-to-end order and emit
            let path = partial
                .iter()
                .rev()
                .map(|&index| node_map.get_index(index).unwrap().0.clone())
                .collect();
            all_paths.push(path);
            continue;
        }

        let Some((_, (predecessors, _))) = node_map.get_index(backmost) else {
            continue;
        };

        // Extend the partial path along every predecessor branch
        // An empty predecessor list on a non-start node drops the branch
        for &predecessor in predecessors {
            let mut extended = partial.clone();
            extended.push(predecessor);
            stack.push(extended);
        }
    }

    all_paths
}
