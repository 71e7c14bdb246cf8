//! Liked-post records and friend activity recommendations

pub mod recommend;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::graph::NodeId;

/// Identifier of a post
pub type PostId = u32;

/// One user liking one post at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedPost {
    pub post_id: PostId,
    pub user_id: NodeId,
    pub timestamp: DateTime<Utc>,
}

impl LikedPost {
    pub fn new(post_id: PostId, user_id: NodeId, timestamp: DateTime<Utc>) -> Self {
        Self { post_id, user_id, timestamp }
    }
}

/// Likes of each post, in loader order
pub type PostLikes = BTreeMap<PostId, Vec<LikedPost>>;

/// Likes made by each user, most recent first
pub type UserLikes = HashMap<NodeId, Vec<LikedPost>>;

/// Reverse-chronological ordering: later likes sort first.
///
/// Use with a stable sort so equal timestamps keep their relative order.
pub fn by_recency(a: &LikedPost, b: &LikedPost) -> Ordering {
    b.timestamp.cmp(&a.timestamp)
}

/// Regroup likes by the user who made them, each list sorted by [`by_recency`]
pub fn likes_by_user(post_likes: &PostLikes) -> UserLikes {
    let mut user_likes = UserLikes::new();

    for likes in post_likes.values() {
        for like in likes {
            user_likes.entry(like.user_id).or_default().push(like.clone());
        }
    }

    for likes in user_likes.values_mut() {
        likes.sort_by(by_recency);
    }

    log::debug!(
        "Indexed likes from {} posts across {} users",
        post_likes.len(),
        user_likes.len()
    );

    user_likes
}

pub use recommend::{recommend_activity, ActivityRecommendation, RecommendedPost};
