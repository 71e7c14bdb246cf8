//! Interest cluster module

pub mod interest;
pub mod ranking;

use std::collections::BTreeMap;

use crate::graph::NodeId;

/// Identifier of an interest
pub type InterestId = u32;

/// Interests declared by each user
pub type UserInterests = BTreeMap<NodeId, Vec<InterestId>>;

/// Users sharing each interest, derived from [`UserInterests`]
pub type InterestClusters = BTreeMap<InterestId, Vec<NodeId>>;

pub use interest::{invert, lookup};
pub use ranking::{rank_by_distance, rank_by_distance_with_config};
