//! Recommending posts that a user's friends liked recently

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activity::{by_recency, LikedPost, PostId, UserLikes};
use crate::graph::{NodeId, SocialGraph};

/// A post liked by friends, with the friends in most-recent-first order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedPost {
    pub post_id: PostId,
    pub liked_by: Vec<NodeId>,
}

/// Posts recently liked by a user's friends.
///
/// Keyed by post id; iteration follows the time of each post's most recent
/// qualifying like.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityRecommendation {
    posts: Vec<RecommendedPost>,
    #[serde(skip)]
    index: HashMap<PostId, usize>,
}

impl ActivityRecommendation {
    /// Friends who liked `post_id`, most recent first
    pub fn get(&self, post_id: PostId) -> Option<&[NodeId]> {
        self.index
            .get(&post_id)
            .map(|&pos| self.posts[pos].liked_by.as_slice())
    }

    pub fn contains(&self, post_id: PostId) -> bool {
        self.index.contains_key(&post_id)
    }

    /// Number of distinct posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecommendedPost> {
        self.posts.iter()
    }

    pub fn post_ids(&self) -> impl Iterator<Item = PostId> + '_ {
        self.posts.iter().map(|post| post.post_id)
    }

    fn push(&mut self, like: &LikedPost) {
        let pos = *self.index.entry(like.post_id).or_insert_with(|| {
            self.posts.push(RecommendedPost {
                post_id: like.post_id,
                liked_by: Vec::new(),
            });
            self.posts.len() - 1
        });
        self.posts[pos].liked_by.push(like.user_id);
    }
}

/// Collect the likes each direct neighbor of `user` made after `cutoff`,
/// grouped by post.
///
/// Each neighbor's history must be sorted most recent first; scanning stops
/// at the first like at or before `cutoff`.
pub fn recommend_activity(
    graph: &SocialGraph,
    user: NodeId,
    cutoff: DateTime<Utc>,
    user_likes: &UserLikes,
) -> ActivityRecommendation {
    let mut recent: Vec<&LikedPost> = Vec::new();

    for friend in graph.neighbors(user) {
        let Some(likes) = user_likes.get(friend) else {
            continue;
        };
        recent.extend(likes.iter().take_while(|like| like.timestamp > cutoff));
    }

    recent.sort_by(|a, b| by_recency(a, b));

    let mut recommendation = ActivityRecommendation::default();
    for like in recent {
        recommendation.push(like);
    }

    log::debug!(
        "Recommended {} posts to user {} from {} friends",
        recommendation.len(),
        user,
        graph.degree(user)
    );

    recommendation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::tests::at;
    use crate::activity::{likes_by_user, PostLikes};
    use crate::graph::GraphBuilder;

    fn friends_graph() -> SocialGraph {
        // user 2 is friends with 5 and 7; 9 is a friend of a friend
        let mut builder = GraphBuilder::new(9);
        builder.add_edge(2, 5, 1.0).unwrap();
        builder.add_edge(2, 7, 1.0).unwrap();
        builder.add_edge(5, 9, 1.0).unwrap();
        builder.build()
    }

    fn sample_likes() -> UserLikes {
        let mut post_likes = PostLikes::new();
        post_likes.insert(100, vec![
            LikedPost::new(100, 5, at(10)),
            LikedPost::new(100, 7, at(12)),
            LikedPost::new(100, 9, at(20)),
        ]);
        post_likes.insert(200, vec![
            LikedPost::new(200, 7, at(15)),
            LikedPost::new(200, 5, at(1)),
        ]);
        post_likes.insert(300, vec![
            LikedPost::new(300, 5, at(2)),
        ]);
        likes_by_user(&post_likes)
    }

    #[test]
    fn test_recent_friend_likes_are_recommended() {
        let graph = friends_graph();
        let result = recommend_activity(&graph, 2, at(1), &sample_likes());

        assert_eq!(result.len(), 3);
        assert_eq!(result.get(100), Some(&[7, 5][..]));
        assert_eq!(result.get(200), Some(&[7][..]));
        assert_eq!(result.get(300), Some(&[5][..]));
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        let graph = friends_graph();
        let result = recommend_activity(&graph, 2, at(10), &sample_likes());

        assert_eq!(result.get(100), Some(&[7][..]));
        assert!(!result.contains(300));
        assert_eq!(result.post_ids().collect::<Vec<_>>(), vec![200, 100]);
    }

    #[test]
    fn test_posts_ordered_by_most_recent_like() {
        let graph = friends_graph();
        let result = recommend_activity(&graph, 2, at(1), &sample_likes());

        let order: Vec<PostId> = result.iter().map(|post| post.post_id).collect();
        assert_eq!(order, vec![200, 100, 300]);
    }

    #[test]
    fn test_friends_of_friends_are_ignored() {
        let graph = friends_graph();
        let result = recommend_activity(&graph, 2, at(1), &sample_likes());

        assert!(!result.get(100).unwrap().contains(&9));
    }

    #[test]
    fn test_missing_history_and_no_friends_are_empty() {
        let graph = friends_graph();
        let likes = UserLikes::new();

        assert!(recommend_activity(&graph, 2, at(1), &likes).is_empty());
        assert!(recommend_activity(&graph, 8, at(1), &sample_likes()).is_empty());
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(1, 2, 1.0).unwrap();
        builder.add_edge(2, 1, 1.0).unwrap();
        builder.add_edge(1, 1, 1.0).unwrap();
        let graph = builder.build();

        let mut likes = UserLikes::new();
        likes.insert(2, vec![LikedPost::new(7, 2, at(20))]);
        likes.insert(1, vec![LikedPost::new(8, 1, at(10))]);

        let result = recommend_activity(&graph, 1, at(1), &likes);
        let posts: Vec<RecommendedPost> = result.iter().cloned().collect();
        assert_eq!(posts, vec![
            RecommendedPost { post_id: 7, liked_by: vec![2, 2] },
            RecommendedPost { post_id: 8, liked_by: vec![1, 1] },
        ]);
    }

    #[test]
    fn test_scan_relies_on_recency_order() {
        let graph = friends_graph();
        let mut likes = UserLikes::new();
        // Deliberately unsorted: the old like stops the scan before the new one
        likes.insert(5, vec![
            LikedPost::new(1, 5, at(1)),
            LikedPost::new(2, 5, at(20)),
        ]);

        let result = recommend_activity(&graph, 2, at(5), &likes);
        assert!(result.is_empty());
    }
}
