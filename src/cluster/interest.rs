//! Grouping users by shared interest

use crate::cluster::{InterestClusters, InterestId, UserInterests};
use crate::graph::NodeId;

/// Invert a user → interests mapping into interest → users.
///
/// Members of each cluster appear in the iteration order of `user_interests`.
pub fn invert(user_interests: &UserInterests) -> InterestClusters {
    let mut clusters = InterestClusters::new();

    for (&user, interests) in user_interests {
        for &interest in interests {
            clusters.entry(interest).or_default().push(user);
        }
    }

    log::debug!(
        "Grouped {} users into {} interest clusters",
        user_interests.len(),
        clusters.len()
    );

    clusters
}

/// Members of an interest cluster, or an empty slice if the interest is unknown
pub fn lookup(interest: InterestId, clusters: &InterestClusters) -> &[NodeId] {
    clusters.get(&interest).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_groups_users_by_interest() {
        let mut user_interests = UserInterests::new();
        user_interests.insert(10, vec![5, 6]);
        user_interests.insert(11, vec![5]);

        let clusters = invert(&user_interests);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[&5], vec![10, 11]);
        assert_eq!(clusters[&6], vec![10]);
    }

    #[test]
    fn test_users_without_interests_are_absent() {
        let mut user_interests = UserInterests::new();
        user_interests.insert(1, vec![]);
        user_interests.insert(2, vec![7]);

        let clusters = invert(&user_interests);

        assert_eq!(clusters.len(), 1);
        assert_eq!(lookup(7, &clusters), &[2]);
    }

    #[test]
    fn test_lookup_unknown_interest_is_empty() {
        let clusters = InterestClusters::new();
        assert!(lookup(42, &clusters).is_empty());
    }

    #[test]
    fn test_repeated_interest_lists_user_twice() {
        let mut user_interests = UserInterests::new();
        user_interests.insert(3, vec![1, 1]);

        let clusters = invert(&user_interests);
        assert_eq!(lookup(1, &clusters), &[3, 3]);
    }
}
