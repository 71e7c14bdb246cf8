//! Graph construction module

use crate::config::Config;
use crate::error::GraphError;
use crate::graph::{NodeId, SocialGraph};

/// Builder for incrementally constructing a SocialGraph
pub struct GraphBuilder {
    /// Number of real nodes; slots run 0..=node_count
    node_count: usize,

    /// Adjacency lists for each slot
    adjacency_lists: Vec<Vec<(NodeId, i32)>>,

    /// Multiplier applied to raw weights before truncation
    weight_scale: f64,

    /// Edges skipped because they touch the sentinel
    skipped: usize,
}

impl GraphBuilder {
    /// Create a builder for nodes `1..=node_count`
    pub fn new(node_count: usize) -> Self {
        Self::with_config(node_count, &Config::default())
    }

    /// Create a builder using the weight scaling from `config`
    pub fn with_config(node_count: usize, config: &Config) -> Self {
        Self {
            node_count,
            adjacency_lists: vec![Vec::new(); node_count + 1],
            weight_scale: config.weight_scale,
            skipped: 0,
        }
    }

    /// Add an undirected edge. Edges touching node 0 are dropped.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
        for node in [from, to] {
            if node as usize > self.node_count {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }

        if from == 0 || to == 0 {
            self.skipped += 1;
            return Ok(());
        }

        let scaled = (weight * self.weight_scale) as i32;
        self.adjacency_lists[from as usize].push((to, scaled));
        self.adjacency_lists[to as usize].push((from, scaled));

        Ok(())
    }

    /// Number of edges dropped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Build the compressed graph. Neighbor order follows insertion order.
    pub fn build(self) -> SocialGraph {
        let edge_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        let mut graph = SocialGraph::with_capacity(self.adjacency_lists.len(), edge_count);

        graph.offsets.push(0);
        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            graph.offsets.push(offset);
            for &(target, weight) in list {
                graph.edges.push(target);
                graph.weights.push(weight);
            }
        }

        log::debug!(
            "Built graph with {} slots and {} adjacency entries ({} edges skipped)",
            graph.node_count, graph.edges.len(), self.skipped
        );

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_to_sentinel_are_skipped() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(1, 0, 1.0).unwrap();
        builder.add_edge(0, 2, 1.0).unwrap();
        builder.add_edge(1, 3, 1.0).unwrap();
        assert_eq!(builder.skipped(), 2);

        let graph = builder.build();
        assert!(graph.neighbors(0).is_empty());
        assert_eq!(graph.neighbors(1), &[3]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_out_of_range_endpoint_is_rejected() {
        let mut builder = GraphBuilder::new(2);
        let err = builder.add_edge(1, 3, 1.0).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange { node: 3, node_count: 2 }));
    }

    #[test]
    fn test_weights_are_scaled_and_truncated() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(1, 2, 0.257).unwrap();
        let graph = builder.build();

        assert_eq!(graph.weights, vec![25, 25]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut builder = GraphBuilder::new(4);
        builder.add_edge(1, 4, 1.0).unwrap();
        builder.add_edge(1, 2, 1.0).unwrap();
        builder.add_edge(3, 1, 1.0).unwrap();
        let graph = builder.build();

        assert_eq!(graph.neighbors(1), &[4, 2, 3]);
    }
}
