//! Snapshot loading shared by every command.

use std::io;
use std::path::Path;

use graphlens::config::GraphlensConfig;
use graphlens::{GraphIndex, Snapshot};
use tracing::info;

use super::display::print_warnings;

/// Read a snapshot from `path`, or from stdin when `path` is `-`.
pub fn read(path: &Path) -> Result<Snapshot, graphlens::Error> {
    if path.as_os_str() == "-" {
        return Snapshot::from_reader(io::stdin().lock());
    }
    let file = std::fs::File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("snapshot not found: {}", path.display()),
        )
    })?;
    Snapshot::from_reader(io::BufReader::new(file))
}

/// Read a snapshot and index it with the configured options.
///
/// Ingestion warnings are printed to stderr.
pub fn load_index(
    path: &Path,
    config: &GraphlensConfig,
) -> Result<GraphIndex, graphlens::Error> {
    let snapshot = read(path)?;
    info!(
        nodes = snapshot.nodes.len(),
        links = snapshot.links.len(),
        "Snapshot loaded"
    );
    let index = GraphIndex::build_with(&snapshot.nodes, &snapshot.links, &config.index_options())?;
    print_warnings(index.warnings());
    Ok(index)
}
