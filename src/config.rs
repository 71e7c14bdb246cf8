//! Configuration management for the social graph recommender

/// Tunables shared by the loaders, recommenders and CLI
#[derive(Debug, Clone)]
pub struct Config {
    /// Multiplier applied to edge weights before truncating to an integer
    pub weight_scale: f64,

    /// Cluster size at which distance ranking switches to parallel BFS
    pub parallel_threshold: usize,

    /// Hop bound used by reachability queries when none is given
    pub default_max_hops: u32,

    /// Look-back window for friend activity when no cutoff is given
    pub activity_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight_scale: 100.0,
            parallel_threshold: 1000,
            default_max_hops: 3,
            activity_window_days: 180,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        weight_scale: f64,
        parallel_threshold: usize,
        default_max_hops: u32,
        activity_window_days: i64,
    ) -> Self {
        Self {
            weight_scale,
            parallel_threshold,
            default_max_hops,
            activity_window_days,
        }
    }
}
