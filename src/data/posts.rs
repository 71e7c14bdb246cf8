//! Post like loading
//!
//! Format: one `postId=[userId & timestamp, ...]` line per post, with
//! RFC 3339 timestamps.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::activity::{LikedPost, PostId, PostLikes};
use crate::data::{numbered_lines, parse_number, read_source, split_keyed_list};
use crate::error::LoadError;

/// Load the likes recorded for each post
pub fn load_post_likes(path: impl AsRef<Path>) -> Result<PostLikes, LoadError> {
    let text = read_source(path.as_ref())?;
    let post_likes = parse_post_likes(&text)?;

    log::info!(
        "Loaded {} posts with {} likes",
        post_likes.len(),
        post_likes.values().map(Vec::len).sum::<usize>()
    );

    Ok(post_likes)
}

/// Parse post-like text. Likes keep their file order.
pub fn parse_post_likes(text: &str) -> Result<PostLikes, LoadError> {
    let mut post_likes = PostLikes::new();

    for (line, content) in numbered_lines(text) {
        let (key, items) = split_keyed_list(content, line)?;
        let post_id: PostId = parse_number(key, "post id", line, content)?;

        let likes = items
            .into_iter()
            .map(|item| -> Result<LikedPost, LoadError> {
                let (user, timestamp) = item
                    .split_once('&')
                    .ok_or_else(|| LoadError::parse(line, content, format!("expected `user & timestamp`, got {item:?}")))?;
                let user_id = parse_number(user, "user id", line, content)?;
                let timestamp = DateTime::parse_from_rfc3339(timestamp.trim())
                    .map_err(|err| LoadError::parse(line, content, format!("invalid timestamp: {err}")))?
                    .with_timezone(&Utc);
                Ok(LikedPost::new(post_id, user_id, timestamp))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        post_likes.insert(post_id, likes);
    }

    Ok(post_likes)
}
