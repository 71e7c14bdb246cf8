//! Social graph proximity and recommendation engine
//!
//! The graph, cluster and activity modules hold the in-memory algorithms and
//! never touch the filesystem; `data` and `storage` sit around them.

pub mod config;
pub mod error;
pub mod graph;
pub mod cluster;
pub mod activity;
pub mod data;
pub mod storage;

pub use config::Config;
pub use error::{GraphError, LoadError, RecommendError};
