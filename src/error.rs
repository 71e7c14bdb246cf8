//! Error types for graph construction, loading and recommendation

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;
use crate::cluster::InterestId;

/// Errors raised while assembling a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// Edge endpoint outside `1..=node_count`
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}

/// Errors raised by the text loaders
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line; `line` is 1-based
    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// Edge rejected by the graph builder
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

impl LoadError {
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        LoadError::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

/// Precondition violations reported by the recommenders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// Interest id has no cluster
    #[error("unknown interest {0}")]
    UnknownInterest(InterestId),
}
