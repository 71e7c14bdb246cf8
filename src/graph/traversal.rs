//! Level-synchronous breadth-first traversal

use crate::graph::{NodeId, SocialGraph};

/// Hop count between two nodes
pub type Hops = u32;

/// Distance reported for pairs with no connecting path. Orders after every
/// real hop count.
pub const UNREACHABLE: Hops = Hops::MAX;

/// Whether a hop count denotes a real path
pub fn is_reachable(hops: Hops) -> bool {
    hops != UNREACHABLE
}

/// Visited flags indexed by node id
struct Visited(Vec<bool>);

impl Visited {
    /// Flags for `graph`, with `start` marked when it is a real node
    fn seeded(graph: &SocialGraph, start: NodeId) -> Self {
        let mut visited = Self(vec![false; graph.node_count()]);
        if graph.contains(start) {
            visited.insert(start);
        }
        visited
    }

    /// Mark an in-range node, returning true if it was not seen before
    fn insert(&mut self, node: NodeId) -> bool {
        !std::mem::replace(&mut self.0[node as usize], true)
    }
}

/// Expand a frontier by one hop, returning unvisited neighbors in
/// discovery order
fn expand(graph: &SocialGraph, frontier: &[NodeId], visited: &mut Visited) -> Vec<NodeId> {
    let mut next = Vec::new();
    for &node in frontier {
        for &neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                next.push(neighbor);
            }
        }
    }
    next
}

/// Minimal number of edges between `start` and `goal`, or [`UNREACHABLE`].
///
/// Each round drains the whole frontier before advancing, so the round in
/// which `goal` appears is its hop distance.
pub fn shortest_path_length(graph: &SocialGraph, start: NodeId, goal: NodeId) -> Hops {
    let mut visited = Visited::seeded(graph, start);

    let mut frontier = vec![start];
    let mut distance: Hops = 0;

    while !frontier.is_empty() {
        if frontier.contains(&goal) {
            return distance;
        }
        frontier = expand(graph, &frontier, &mut visited);
        distance += 1;
    }

    UNREACHABLE
}

/// Nodes reachable from `start`, in discovery order with `start` first.
///
/// Performs `max_hops - 1` expansion rounds, so the result covers nodes
/// within `max_hops - 1` edges. `max_hops <= 1` yields only `start`.
pub fn bounded_reachability(graph: &SocialGraph, start: NodeId, max_hops: u32) -> Vec<NodeId> {
    let mut visited = Visited::seeded(graph, start);

    let mut reached = vec![start];
    let mut frontier = vec![start];
    let mut current = 1;

    while !frontier.is_empty() && current < max_hops {
        frontier = expand(graph, &frontier, &mut visited);
        reached.extend_from_slice(&frontier);
        current += 1;
    }

    reached
}
