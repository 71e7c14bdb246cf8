//! Graph representation and traversal module

pub mod compressed;
pub mod builder;
pub mod traversal;

pub use compressed::SocialGraph;
pub use builder::GraphBuilder;
pub use traversal::{bounded_reachability, shortest_path_length, is_reachable, Hops, UNREACHABLE};

/// Identifier of a user / graph vertex. `0` is reserved.
pub type NodeId = u32;
