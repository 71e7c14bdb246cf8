//! Memory-efficient undirected social graph

use std::mem;
use serde::{Serialize, Deserialize};

use crate::graph::NodeId;

/// Compressed sparse representation of an undirected social graph.
///
/// Every loaded edge appears in both endpoints' adjacency lists. Slot 0 is
/// the "no destination" sentinel and never has neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialGraph {
    /// Number of slots, including the sentinel slot 0
    pub(crate) node_count: usize,

    /// Offset array: index where each node's edges begin
    /// offsets[i] to offsets[i+1] defines the edge range for node i
    pub(crate) offsets: Vec<u32>,

    /// Edge array: concatenated neighbor lists in insertion order
    pub(crate) edges: Vec<NodeId>,

    /// Scaled edge weights, parallel to `edges`; unused by traversal
    pub(crate) weights: Vec<i32>,
}

impl SocialGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            offsets: Vec::with_capacity(node_count + 1),
            edges: Vec::with_capacity(edge_count),
            weights: Vec::with_capacity(edge_count),
        }
    }

    /// Number of slots, including the sentinel
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of directed adjacency entries (twice the loaded edge count)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `node` names a real vertex slot
    pub fn contains(&self, node: NodeId) -> bool {
        node != 0 && (node as usize) < self.node_count
    }

    /// Neighbors of a node, in load order. Empty for the sentinel and
    /// out-of-range ids.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.edge_range(node) {
            Some((start, end)) => &self.edges[start..end],
            None => &[],
        }
    }

    /// Degree of a node (parallel edges and self-loops counted per entry)
    pub fn degree(&self, node: NodeId) -> usize {
        self.edge_range(node).map_or(0, |(start, end)| end - start)
    }

    /// Count nodes with at least one neighbor, excluding the sentinel
    pub fn live_node_count(&self) -> usize {
        (1..self.node_count)
            .filter(|&node| self.degree(node as NodeId) > 0)
            .count()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<NodeId>();
        let weights = self.weights.capacity() * mem::size_of::<i32>();

        base + offsets + edges + weights
    }

    fn edge_range(&self, node: NodeId) -> Option<(usize, usize)> {
        if !self.contains(node) {
            return None;
        }
        let idx = node as usize;
        Some((self.offsets[idx] as usize, self.offsets[idx + 1] as usize))
    }
}
