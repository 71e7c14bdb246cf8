//! Results persistence module

use anyhow::{Context, Result};
use crate::graph::SocialGraph;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::{json, to_string_pretty, Value};

/// Write `value` as pretty JSON to `<output_dir>/<name>.json`
pub fn save_json<T: Serialize + ?Sized>(output_dir: &str, name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir))?;

    let path = Path::new(output_dir).join(format!("{}.json", name));
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;

    log::info!("Saved {}", path.display());

    Ok(path)
}

/// Summary statistics for a loaded graph
pub fn graph_summary(graph: &SocialGraph) -> Value {
    // Degree distribution in 0-100+ buckets
    let mut degree_dist = vec![0usize; 101];
    let mut max_degree = 0;

    for node in 1..graph.node_count() {
        let degree = graph.degree(node as u32);
        degree_dist[degree.min(100)] += 1;
        max_degree = max_degree.max(degree);
    }

    let live = graph.live_node_count();

    json!({
        "node_count": graph.node_count().saturating_sub(1),
        "live_node_count": live,
        "edge_count": graph.edge_count() / 2,
        "max_degree": max_degree,
        "avg_degree": if live == 0 { 0.0 } else { graph.edge_count() as f64 / live as f64 },
        "degree_distribution": degree_dist,
        "memory_bytes": graph.memory_usage(),
    })
}
