//! `graphlens clusters` command implementation.

use std::path::Path;

use colored::Colorize;
use graphlens::config::GraphlensConfig;
use graphlens::{Clustering, detect_clusters};

use super::display::{print_json, print_nodes};
use super::snapshot::load_index;

/// Run the clusters command.
pub fn run(config: &GraphlensConfig, snapshot: &Path, json: bool) -> Result<(), graphlens::Error> {
    let index = load_index(snapshot, config)?;
    let clustering = detect_clusters(&index)?;

    if json {
        return print_json(&clustering);
    }

    print_clustering(&clustering);
    Ok(())
}

fn print_clustering(clustering: &Clustering) {
    println!(
        "Found {} clusters:",
        clustering.len().to_string().green().bold()
    );
    println!();

    for cluster in clustering.clusters() {
        println!(
            "  {} {} {}:",
            "Cluster".yellow().bold(),
            cluster.cluster_id,
            format!("({}, {} members)", cluster.node_type, cluster.len()).dimmed()
        );
        print_nodes(&cluster.members);
    }

    let singletons = clustering
        .clusters()
        .iter()
        .filter(|c| c.is_singleton())
        .count();
    println!();
    println!(
        "{}: {} clusters, {} singletons",
        "Summary".dimmed(),
        clustering.len(),
        singletons
    );
}
