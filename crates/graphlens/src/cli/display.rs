//! Common display utilities for CLI commands.

use colored::Colorize;
use graphlens::{Node, Warning};
use serde::Serialize;

const MAX_DISPLAY_ITEMS: usize = 10;

/// Print ingestion warnings to stderr, one per line.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{}: {warning}", "warning".yellow().bold());
    }
}

/// Display a list of nodes with optional truncation.
///
/// Shows up to `MAX_DISPLAY_ITEMS` nodes with bullet points. If there are more,
/// shows "... and N more".
pub fn print_nodes(nodes: &[Node]) {
    for node in nodes.iter().take(MAX_DISPLAY_ITEMS) {
        println!("    {} {}", "•".dimmed(), node_label(node));
    }

    if nodes.len() > MAX_DISPLAY_ITEMS {
        println!(
            "    {} ... and {} more",
            "•".dimmed(),
            nodes.len() - MAX_DISPLAY_ITEMS
        );
    }
}

/// `label (id)` when the label adds information, otherwise just the id.
pub fn node_label(node: &Node) -> String {
    if node.label.is_empty() || node.label == node.id {
        node.id.clone()
    } else {
        format!("{} ({})", node.label, node.id)
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), graphlens::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
