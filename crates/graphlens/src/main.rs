//! Graphlens CLI - path finding and clustering from the command line.
//!
//! Reads a JSON graph snapshot (`{"nodes": [...], "links": [...]}`) and runs
//! one query against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use graphlens::config::GraphlensConfig;
use tracing_subscriber::EnvFilter;

mod cli;

/// Exit code for a well-formed query that has no path.
const EXIT_NO_PATH: u8 = 2;

/// Graphlens: path finding and clustering over graph snapshots.
#[derive(Parser)]
#[command(name = "graphlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./graphlens.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path between two nodes
    Path {
        /// Snapshot JSON file, or `-` for stdin
        snapshot: PathBuf,

        /// Source node id
        #[arg(long)]
        from: String,

        /// Target node id
        #[arg(long)]
        to: String,

        /// Strategy: weighted, hops, or bounded
        #[arg(short, long)]
        mode: Option<String>,

        /// Maximum number of links for bounded search
        #[arg(long)]
        max_hops: Option<usize>,

        /// Abort the search after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Partition nodes into same-type connected clusters
    Clusters {
        /// Snapshot JSON file, or `-` for stdin
        snapshot: PathBuf,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show snapshot statistics
    Stats {
        /// Snapshot JSON file, or `-` for stdin
        snapshot: PathBuf,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn load_config(explicit: Option<&PathBuf>) -> Result<GraphlensConfig, graphlens::Error> {
    match explicit {
        Some(path) => GraphlensConfig::load(path),
        None => GraphlensConfig::load_or_default(&std::env::current_dir()?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Path {
            snapshot,
            from,
            to,
            mode,
            max_hops,
            timeout_ms,
            json,
        } => cli::path::run(
            &config,
            &snapshot,
            &cli::path::PathArgs {
                from,
                to,
                mode,
                max_hops,
                timeout_ms,
                json,
            },
        ),
        Commands::Clusters { snapshot, json } => cli::clusters::run(&config, &snapshot, json),
        Commands::Stats { snapshot, json } => cli::stats::run(&config, &snapshot, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(graphlens::Error::Path(e)) if e.is_not_found() => {
            println!("{}", e.to_string().yellow());
            ExitCode::from(EXIT_NO_PATH)
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
