//! Greedy farthest-first path extraction
//!
//! Walks the distance-labeled graph from a starting vertex, always stepping
//! to the unvisited neighbor with the largest label. The walk is a
//! heuristic: it tends to produce long simple paths, not provably longest
//! ones.

use crate::graph::Graph;

use super::TraversalState;

/// Build one simple path starting at `start`, greedily following unvisited
/// neighbors with strictly larger labeled distances.
///
/// Owns its visited reset; the labeler's visited pass is never shared.
/// Expects `state.distance` populated by a labeling pass whose component
/// contains `start`. Among unvisited neighbors the first one reaching the
/// maximum distance is taken.
pub(crate) fn build_path(graph: &Graph, start: u32, state: &mut TraversalState) -> Vec<u32> {
    state.clear_visited();

    let mut stack = vec![start];
    let mut path = Vec::new();

    while let Some(vertex) = stack.pop() {
        // A popped vertex may already have been consumed since it was
        // pushed; skipping it here is the backtracking step.
        if state.visited[vertex as usize] {
            continue;
        }
        state.visited[vertex as usize] = true;
        path.push(vertex);

        let mut next: Option<(u32, u32)> = None;
        for &neighbor in graph.neighbors(vertex) {
            if state.visited[neighbor as usize] {
                continue;
            }
            let distance = state.distance[neighbor as usize];
            if next.map_or(true, |(_, best)| distance > best) {
                next = Some((neighbor, distance));
            }
        }
        if let Some((neighbor, _)) = next {
            stack.push(neighbor);
        }
    }

    path
}
