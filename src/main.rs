//! Seed-Scope main entry point
//!
//! This is the command-line interface for evaluating crawl candidates against
//! per-seed scope rules.

use clap::Parser;
use seed_scope::candidate::load_candidates;
use seed_scope::chain::{print_statistics, CandidateChain};
use seed_scope::config::{load_config_with_hash, Config};
use seed_scope::{CandidateUri, ProcessResult, SeedScopeFilter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

/// Seed-Scope: per-seed regular-expression scoping for crawl candidates
///
/// Seed-Scope resolves the seed each candidate URI descends from and checks
/// the candidate against that seed's pattern, reporting which candidates
/// would proceed and which would be marked out of scope.
#[derive(Parser, Debug)]
#[command(name = "seed-scope")]
#[command(version = "1.0.0")]
#[command(about = "Per-seed scope filtering for crawl candidates", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// TOML file of candidates to evaluate
    #[arg(long, value_name = "FILE", required_unless_present = "dry_run")]
    candidates: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the rule table without evaluating candidates
    #[arg(long, conflicts_with = "candidates")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    match cli.candidates {
        Some(path) => handle_evaluate(config, &path).await?,
        None => handle_dry_run(&config)?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seed_scope=info,warn"),
            1 => EnvFilter::new("seed_scope=debug,info"),
            2 => EnvFilter::new("seed_scope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the rule table
fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter = SeedScopeFilter::from_config(config)?;

    println!("=== Seed-Scope Dry Run ===\n");

    println!("Seed Resolution:");
    println!("  Strategy: {}", filter.resolution());
    println!("  Max via hops: {}", filter.max_via_hops());

    println!("\nSeed Filters ({}):", filter.rules().len());
    for seed in filter.rules().seeds() {
        if let Some(pattern) = filter.rules().get(seed) {
            println!("  - {} => {}", seed, pattern);
        }
    }

    println!("\nUnfiltered Seeds ({}):", config.scope.seeds.len());
    for seed in &config.scope.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Evaluates every candidate in `path` concurrently and prints the decisions
async fn handle_evaluate(config: Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let filter = SeedScopeFilter::from_config(&config)?;
    tracing::info!(
        "Seed filters: {}, resolution: {}, max via hops: {}",
        filter.rules().len(),
        filter.resolution(),
        filter.max_via_hops()
    );

    let known_seeds: HashSet<String> = config.known_seeds().map(str::to_string).collect();
    let candidates = load_candidates(path, &known_seeds)?;
    tracing::info!("Loaded {} candidates from {}", candidates.len(), path.display());

    let chain = Arc::new(CandidateChain::new().with_processor(Arc::new(filter)));

    let mut tasks = JoinSet::new();
    for (index, mut candidate) in candidates.into_iter().enumerate() {
        let chain = Arc::clone(&chain);
        tasks.spawn_blocking(move || {
            let result = chain.run(&mut candidate);
            (index, candidate, result)
        });
    }

    let mut decisions: Vec<(usize, CandidateUri, ProcessResult)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        decisions.push(joined?);
    }
    decisions.sort_by_key(|(index, _, _)| *index);

    for (_, candidate, result) in &decisions {
        println!("{:<8} {:<14} {}", result, candidate.status(), candidate);
        for failure in candidate.non_fatal_failures() {
            println!("         ! {}", failure);
        }
    }
    println!();

    print_statistics(&chain.stats().snapshot());

    Ok(())
}
