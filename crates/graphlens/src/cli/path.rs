//! `graphlens path` command implementation.

use std::path::Path as FsPath;
use std::time::Duration;

use colored::Colorize;
use graphlens::config::GraphlensConfig;
use graphlens::{Path, PathMode, PathQuery, SearchLimits, find_path};

use super::display::{node_label, print_json};
use super::snapshot::load_index;

/// Arguments of the path command after clap parsing.
pub struct PathArgs {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Strategy name; falls back to the configured default
    pub mode: Option<String>,
    /// Depth bound; falls back to the configured default
    pub max_hops: Option<usize>,
    /// Deadline override in milliseconds
    pub timeout_ms: Option<u64>,
    /// Emit JSON
    pub json: bool,
}

/// Run the path command.
pub fn run(
    config: &GraphlensConfig,
    snapshot: &FsPath,
    args: &PathArgs,
) -> Result<(), graphlens::Error> {
    let mode = match args.mode.as_deref() {
        Some(raw) => raw.parse::<PathMode>().map_err(graphlens::Error::Config)?,
        None => config.default_mode,
    };
    let max_hops = args.max_hops.unwrap_or(config.default_max_hops);

    let index = load_index(snapshot, config)?;

    // The deadline starts after loading so it only bounds the search.
    let limits = match args.timeout_ms {
        Some(ms) => SearchLimits::none().with_timeout(Duration::from_millis(ms)),
        None => config.search_limits(),
    };
    let query = PathQuery::new(mode)
        .with_max_hops(max_hops)
        .with_limits(limits);

    let path = find_path(&index, &args.from, &args.to, &query)?;

    if args.json {
        print_json(&path)?;
    } else {
        print_path(&path, mode);
    }
    Ok(())
}

/// Print a found path as a chain followed by its links.
fn print_path(path: &Path, mode: PathMode) {
    let chain = path
        .nodes()
        .iter()
        .map(node_label)
        .collect::<Vec<_>>()
        .join(" → ");

    println!(
        "{} ({}):",
        "Path".white().bold(),
        mode.to_string().cyan()
    );
    println!("  {}", chain.green());
    println!();

    for (step, (link, pair)) in path.links().iter().zip(path.nodes().windows(2)).enumerate() {
        println!(
            "  {} {} {} {} {}",
            format!("{}.", step + 1).yellow(),
            pair[0].id,
            format!("-[{}]-", link.link_type).dimmed(),
            pair[1].id,
            format!("(weight {})", link.weight).dimmed()
        );
    }

    println!();
    println!(
        "{}: {} hops, total weight {}",
        "Summary".dimmed(),
        path.hops().to_string().green(),
        path.total_weight().to_string().green()
    );
}
