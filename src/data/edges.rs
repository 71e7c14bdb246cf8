//! Edge-list loading
//!
//! Format: a `nodeCount edgeCount` header followed by `edgeCount` lines of
//! `from to weight`. Lines starting with `%` are comments.

use std::path::Path;

use crate::config::Config;
use crate::data::{numbered_lines, parse_number, read_source};
use crate::error::LoadError;
use crate::graph::{GraphBuilder, NodeId, SocialGraph};

/// Load an undirected graph from an edge-list file
pub fn load_graph(path: impl AsRef<Path>, config: &Config) -> Result<SocialGraph, LoadError> {
    let text = read_source(path.as_ref())?;
    let graph = parse_graph(&text, config)?;

    log::info!(
        "Loaded graph with {} live nodes and {} adjacency entries",
        graph.live_node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse edge-list text into a graph
pub fn parse_graph(text: &str, config: &Config) -> Result<SocialGraph, LoadError> {
    let mut lines = numbered_lines(text).filter(|(_, line)| !line.starts_with('%'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| LoadError::parse(1, "", "missing header"))?;
    let (node_count, edge_count) = parse_header(header_line, header)?;

    log::debug!("Header declares {} nodes and {} edges", node_count, edge_count);

    let mut builder = GraphBuilder::with_config(node_count, config);
    let mut last_line = header_line;

    for _ in 0..edge_count {
        let (line, content) = lines.next().ok_or_else(|| {
            LoadError::parse(
                last_line + 1,
                "",
                format!("expected {} edges, file ended early", edge_count),
            )
        })?;
        last_line = line;

        let (from, to, weight) = parse_edge(line, content)?;
        builder
            .add_edge(from, to, weight)
            .map_err(|source| LoadError::Graph { line, source })?;
    }

    let trailing = lines.count();
    if trailing > 0 {
        log::warn!("Ignoring {} lines after the declared {} edges", trailing, edge_count);
    }
    if builder.skipped() > 0 {
        log::debug!("Skipped {} edges touching node 0", builder.skipped());
    }

    Ok(builder.build())
}

fn parse_header(line: usize, content: &str) -> Result<(usize, usize), LoadError> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(LoadError::parse(line, content, "expected `nodeCount edgeCount`"));
    }
    let node_count: usize = parse_number(tokens[0], "node count", line, content)?;
    // Slot 0 is reserved, so every real node id must fit below NodeId::MAX
    if node_count > NodeId::MAX as usize - 1 {
        return Err(LoadError::parse(line, content, "node count out of range"));
    }
    Ok((node_count, parse_number(tokens[1], "edge count", line, content)?))
}

fn parse_edge(line: usize, content: &str) -> Result<(NodeId, NodeId, f64), LoadError> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(LoadError::parse(line, content, "expected `from to weight`"));
    }
    Ok((
        parse_number(tokens[0], "source node", line, content)?,
        parse_number(tokens[1], "target node", line, content)?,
        parse_number(tokens[2], "weight", line, content)?,
    ))
}
