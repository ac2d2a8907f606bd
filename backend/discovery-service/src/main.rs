use anyhow::Context;
use clap::{Parser, ValueEnum};
use discovery_service::{config::LogFormat, Config, DiscoveryRanker, DiscoverySnapshot, EntityKind};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rank forums, users or topics from an exported store snapshot
#[derive(Parser, Debug)]
#[command(name = "discovery-snapshot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot JSON with `forums`, `users` and `posts` arrays
    #[arg(env = "DISCOVERY_SNAPSHOT_PATH")]
    snapshot: PathBuf,

    /// What to rank
    #[arg(short, long, value_enum, default_value = "forums")]
    kind: Kind,

    /// Sort criterion; unknown values fall back to the kind's default
    #[arg(short, long)]
    sort: Option<String>,

    /// Maximum entries returned (defaults to DISCOVERY_DEFAULT_LIMIT)
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Forums,
    Users,
    Topics,
}

impl Kind {
    fn entity(self) -> EntityKind {
        match self {
            Kind::Forums => EntityKind::Forum,
            Kind::Users => EntityKind::User,
            Kind::Topics => EntityKind::Topic,
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the ranked JSON
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Plain => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config
    let config = Config::from_env().context("Failed to load config")?;
    init_tracing(config.service.log_format);

    info!(
        service = %config.service.service_name,
        snapshot = %cli.snapshot.display(),
        kind = ?cli.kind,
        "Starting discovery ranking"
    );

    let snapshot = DiscoverySnapshot::from_path(&cli.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", cli.snapshot.display()))?;

    let ranker = DiscoveryRanker::new(&config.discovery);
    let sort = cli.sort.as_deref();

    info!(
        default_limit = ranker.default_limit(),
        weights = ?ranker.weights(),
        "Ranker configured"
    );

    let entity = cli.kind.entity();
    if let Some(requested) = sort {
        if !entity.criteria().iter().any(|name| *name == requested) {
            warn!(
                kind = %entity,
                requested,
                accepted = ?entity.criteria(),
                fallback = entity.default_criterion(),
                "Unknown sort criterion"
            );
        }
    }

    let output = match cli.kind {
        Kind::Forums => {
            let page = ranker.top_forums_now(&snapshot.public_forums(), sort, cli.limit);
            serde_json::to_string_pretty(&page)?
        }
        Kind::Users => {
            let page = ranker.top_users(
                &snapshot.users,
                &snapshot.forums,
                &snapshot.posts,
                sort,
                cli.limit,
            );
            serde_json::to_string_pretty(&page)?
        }
        Kind::Topics => {
            let page = ranker.top_topics_now(&snapshot.posts, sort, cli.limit);
            serde_json::to_string_pretty(&page)?
        }
    };

    println!("{output}");
    Ok(())
}
