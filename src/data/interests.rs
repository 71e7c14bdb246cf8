//! User interest loading
//!
//! Format: one `userId=[i1, i2, ...]` line per user.

use std::path::Path;

use crate::cluster::UserInterests;
use crate::data::{numbered_lines, parse_number, read_source, split_keyed_list};
use crate::error::LoadError;
use crate::graph::NodeId;

/// Load the interests declared by each user
pub fn load_user_interests(path: impl AsRef<Path>) -> Result<UserInterests, LoadError> {
    let text = read_source(path.as_ref())?;
    let user_interests = parse_user_interests(&text)?;

    log::info!("Loaded interests for {} users", user_interests.len());

    Ok(user_interests)
}

/// Parse interest text. A user listed twice keeps the later entry.
pub fn parse_user_interests(text: &str) -> Result<UserInterests, LoadError> {
    let mut user_interests = UserInterests::new();

    for (line, content) in numbered_lines(text) {
        let (key, items) = split_keyed_list(content, line)?;
        let user: NodeId = parse_number(key, "user id", line, content)?;
        let interests = items
            .into_iter()
            .map(|item| parse_number(item, "interest id", line, content))
            .collect::<Result<Vec<_>, _>>()?;

        if user_interests.insert(user, interests).is_some() {
            log::debug!("User {} listed more than once, keeping line {}", user, line);
        }
    }

    Ok(user_interests)
}
