//! Ranking interest clusters by network distance

use rayon::prelude::*;

use crate::cluster::{InterestClusters, InterestId};
use crate::config::Config;
use crate::error::RecommendError;
use crate::graph::{shortest_path_length, Hops, NodeId, SocialGraph};

/// Members of `interest`'s cluster ordered by hop distance from `target`.
///
/// The sort is stable: members at equal distance keep their cluster order,
/// and unreachable members come last. Fails if the interest has no cluster.
pub fn rank_by_distance(
    graph: &SocialGraph,
    interest: InterestId,
    target: NodeId,
    clusters: &InterestClusters,
) -> Result<Vec<NodeId>, RecommendError> {
    rank_by_distance_with_config(graph, interest, target, clusters, &Config::default())
}

/// [`rank_by_distance`] with an explicit parallelism threshold
pub fn rank_by_distance_with_config(
    graph: &SocialGraph,
    interest: InterestId,
    target: NodeId,
    clusters: &InterestClusters,
    config: &Config,
) -> Result<Vec<NodeId>, RecommendError> {
    let members = clusters
        .get(&interest)
        .ok_or(RecommendError::UnknownInterest(interest))?;

    let mut ranked = member_distances(graph, target, members, config.parallel_threshold);
    ranked.sort_by_key(|&(_, distance)| distance);

    log::debug!(
        "Ranked {} members of interest {} for user {}",
        ranked.len(), interest, target
    );

    Ok(ranked.into_iter().map(|(member, _)| member).collect())
}

/// Hop distance from `target` to every member, in member order
fn member_distances(
    graph: &SocialGraph,
    target: NodeId,
    members: &[NodeId],
    parallel_threshold: usize,
) -> Vec<(NodeId, Hops)> {
    // For small clusters, use sequential processing
    if members.len() < parallel_threshold {
        return members.iter()
            .map(|&member| (member, shortest_path_length(graph, target, member)))
            .collect();
    }

    // Indexed parallel collect keeps member order
    members.par_iter()
        .map(|&member| (member, shortest_path_length(graph, target, member)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn star_graph() -> SocialGraph {
        // 1 - 2 - 3 - 4, plus 1 - 5; node 6 isolated
        let mut builder = GraphBuilder::new(6);
        builder.add_edge(1, 2, 1.0).unwrap();
        builder.add_edge(2, 3, 1.0).unwrap();
        builder.add_edge(3, 4, 1.0).unwrap();
        builder.add_edge(1, 5, 1.0).unwrap();
        builder.build()
    }

    fn clusters_with(members: Vec<NodeId>) -> InterestClusters {
        let mut clusters = InterestClusters::new();
        clusters.insert(9, members);
        clusters
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let graph = star_graph();
        let clusters = clusters_with(vec![4, 6, 3, 2]);

        let ranked = rank_by_distance(&graph, 9, 1, &clusters).unwrap();
        assert_eq!(ranked, vec![2, 3, 4, 6]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let graph = star_graph();
        let clusters = clusters_with(vec![5, 3, 2, 1]);

        let ranked = rank_by_distance(&graph, 9, 1, &clusters).unwrap();
        // 5 and 2 are both one hop away and keep their cluster order
        assert_eq!(ranked, vec![1, 5, 2, 3]);
    }

    #[test]
    fn test_rank_unknown_interest_is_error() {
        let graph = star_graph();
        let clusters = clusters_with(vec![2]);

        let err = rank_by_distance(&graph, 10, 1, &clusters).unwrap_err();
        assert_eq!(err, RecommendError::UnknownInterest(10));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let graph = star_graph();
        let clusters = clusters_with(vec![6, 4, 5, 3, 2, 1, 6, 5]);

        let sequential = rank_by_distance(&graph, 9, 4, &clusters).unwrap();
        let config = Config { parallel_threshold: 0, ..Config::default() };
        let parallel = rank_by_distance_with_config(&graph, 9, 4, &clusters, &config).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential, vec![4, 3, 2, 1, 5, 5, 6, 6]);
    }

    #[test]
    fn test_rank_does_not_modify_clusters() {
        let graph = star_graph();
        let clusters = clusters_with(vec![4, 2]);

        rank_by_distance(&graph, 9, 1, &clusters).unwrap();
        assert_eq!(clusters[&9], vec![4, 2]);
    }
}
