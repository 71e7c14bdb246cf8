//! Loaders for the text datasets: edge lists, user interests and post likes

pub mod edges;
pub mod interests;
pub mod posts;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;

pub use edges::{load_graph, parse_graph};
pub use interests::{load_user_interests, parse_user_interests};
pub use posts::{load_post_likes, parse_post_likes};

/// Read a whole dataset file
fn read_source(path: &Path) -> Result<String, LoadError> {
    log::info!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank lines with their 1-based line numbers
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse one token as a number, naming it in the error
fn parse_number<T: FromStr>(token: &str, what: &str, line: usize, content: &str) -> Result<T, LoadError> {
    token
        .trim()
        .parse()
        .map_err(|_| LoadError::parse(line, content, format!("invalid {what} {:?}", token.trim())))
}

/// Split a `key=[a, b, ...]` line into its key and list items.
///
/// An empty bracket list yields no items.
fn split_keyed_list<'a>(content: &'a str, line: usize) -> Result<(&'a str, Vec<&'a str>), LoadError> {
    let (key, list) = content
        .split_once('=')
        .ok_or_else(|| LoadError::parse(line, content, "missing '='"))?;

    let inner = list
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| LoadError::parse(line, content, "mismatched brackets"))?
        .trim();

    if inner.contains(['[', ']']) {
        return Err(LoadError::parse(line, content, "mismatched brackets"));
    }

    let items = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };

    Ok((key.trim(), items))
}
