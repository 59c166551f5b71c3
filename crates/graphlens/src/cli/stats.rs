//! `graphlens stats` command implementation.

use std::path::Path;

use colored::Colorize;
use graphlens::config::GraphlensConfig;

use super::display::print_json;
use super::snapshot::load_index;

/// Run the stats command.
pub fn run(config: &GraphlensConfig, snapshot: &Path, json: bool) -> Result<(), graphlens::Error> {
    let index = load_index(snapshot, config)?;
    let stats = index.stats();

    if json {
        return print_json(&stats);
    }

    println!("{}", "Snapshot Statistics".white().bold());
    println!();
    println!("  {:<15} {}", "Nodes:", stats.nodes.to_string().green());
    println!("  {:<15} {}", "Links:", stats.links.to_string().green());
    println!("  {:<15} {}", "Components:", stats.components);
    println!("  {:<15} {}", "Isolated:", stats.isolated);
    if stats.self_loops > 0 {
        println!("  {:<15} {}", "Self-loops:", stats.self_loops.to_string().yellow());
    }
    if stats.dropped_links > 0 {
        println!(
            "  {:<15} {}",
            "Dropped links:",
            stats.dropped_links.to_string().yellow()
        );
    }

    Ok(())
}
