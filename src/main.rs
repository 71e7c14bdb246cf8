use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use serde_json::json;

use social_graph_recommender::activity::{likes_by_user, recommend_activity};
use social_graph_recommender::cluster::{self, UserInterests};
use social_graph_recommender::config::Config;
use social_graph_recommender::data;
use social_graph_recommender::graph::{self, is_reachable};
use social_graph_recommender::storage;

#[derive(Parser, Debug)]
#[clap(
    name = "social-graph-recommender",
    about = "Network-distance, interest and friend-activity recommendations over a social graph"
)]
struct Cli {
    /// Path to the edge-list file
    #[clap(long)]
    graph: String,

    /// Path to the user interests file
    #[clap(long)]
    interests: Option<String>,

    /// Path to the post likes file
    #[clap(long)]
    posts: Option<String>,

    /// Directory to save JSON results to
    #[clap(long)]
    output_dir: Option<String>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print graph statistics
    Stats,

    /// Unweighted shortest path length between two users
    Path { from: u32, to: u32 },

    /// Users reachable from a user within a hop bound
    Reach {
        user: u32,

        /// Hop bound (defaults to the configured value)
        #[clap(long)]
        hops: Option<u32>,
    },

    /// Members of an interest cluster
    Cluster { interest: u32 },

    /// Members of an interest cluster ranked by distance from a user
    Interest { interest: u32, user: u32 },

    /// Posts recently liked by a user's friends
    Activity {
        user: u32,

        /// Only consider likes after this RFC 3339 time
        #[clap(long)]
        since: Option<String>,

        /// Only consider likes from the last N days (ignored with --since)
        #[clap(long)]
        days: Option<i64>,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::debug!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::default();
    let graph = data::load_graph(&args.graph, &config)
        .with_context(|| format!("loading graph from {}", args.graph))?;

    let (name, result) = match &args.command {
        Command::Stats => ("stats", storage::graph_summary(&graph)),

        Command::Path { from, to } => {
            let hops = graph::shortest_path_length(&graph, *from, *to);
            if is_reachable(hops) {
                println!("{} -> {}: {} hops", from, to, hops);
            } else {
                println!("{} -> {}: unreachable", from, to);
            }
            let hops = is_reachable(hops).then_some(hops);
            ("path", json!({ "from": from, "to": to, "hops": hops }))
        }

        Command::Reach { user, hops } => {
            let hops = hops.unwrap_or(config.default_max_hops);
            let reached = graph::bounded_reachability(&graph, *user, hops);
            println!("{} users within bound {} of {}: {}", reached.len(), hops, user, reached.iter().join(", "));
            ("reach", json!({ "user": user, "max_hops": hops, "users": reached }))
        }

        Command::Cluster { interest } => {
            let clusters = cluster::invert(&load_interests(&args)?);
            let members = cluster::lookup(*interest, &clusters);
            println!("Interest {}: {}", interest, members.iter().join(", "));
            ("cluster", json!({ "interest": interest, "users": members }))
        }

        Command::Interest { interest, user } => {
            let clusters = cluster::invert(&load_interests(&args)?);
            let ranked = cluster::rank_by_distance_with_config(&graph, *interest, *user, &clusters, &config)?;
            println!("Interest {} ranked for {}: {}", interest, user, ranked.iter().join(", "));
            ("interest", json!({ "interest": interest, "user": user, "ranked": ranked }))
        }

        Command::Activity { user, since, days } => {
            let cutoff = activity_cutoff(since.as_deref(), *days, &config)?;
            let posts_path = args.posts.as_deref().context("--posts is required for activity")?;
            let user_likes = likes_by_user(&data::load_post_likes(posts_path)?);
            let recommendation = recommend_activity(&graph, *user, cutoff, &user_likes);

            println!("{} posts liked by friends of {} since {}", recommendation.len(), user, cutoff);
            for post in recommendation.iter() {
                println!("  {}: {}", post.post_id, post.liked_by.iter().join(", "));
            }
            ("activity", json!({ "user": user, "cutoff": cutoff, "posts": recommendation }))
        }
    };

    if let Some(output_dir) = &args.output_dir {
        storage::save_json(output_dir, name, &result)?;
    } else if matches!(args.command, Command::Stats) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn load_interests(args: &Cli) -> Result<UserInterests> {
    let path = args.interests.as_deref().context("--interests is required")?;
    Ok(data::load_user_interests(path)?)
}

/// Resolve the activity cutoff from `--since`, `--days` or the configured window
fn activity_cutoff(since: Option<&str>, days: Option<i64>, config: &Config) -> Result<DateTime<Utc>> {
    if let Some(since) = since {
        let parsed = DateTime::parse_from_rfc3339(since)
            .with_context(|| format!("invalid --since timestamp {:?}", since))?;
        return Ok(parsed.with_timezone(&Utc));
    }

    let days = days.unwrap_or(config.activity_window_days);
    Duration::try_days(days)
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| anyhow!("activity window of {} days is out of range", days))
}
