//! # Graphlens: path finding and clustering over graph snapshots
//!
//! Graphlens answers two questions about a relationship graph supplied as a
//! list of nodes and a list of links:
//!
//! - **How are these two entities connected?** [`find_path`] with one of three
//!   strategies: minimum weight, fewest hops, or a depth-bounded search.
//! - **Which entities belong together?** [`detect_clusters`] partitions nodes
//!   into connected groups of the same type.
//!
//! ## Design Philosophy
//!
//! - **Snapshot in, values out** - no state survives a call; the caller owns
//!   the graph and may rebuild the index whenever its data changes
//! - **Deterministic** - the same input order always gives the same path and
//!   the same cluster numbering
//! - **Typed failures** - "no path" and "bad request" are distinct
//!   [`PathError`] variants, never panics
//! - **Library first, CLI second** - the `graphlens` binary is a thin layer over
//!   the functions re-exported here
//!
//! ## Quick Start
//!
//! ```
//! use graphlens::{GraphIndex, Link, Node, PathMode, PathQuery, detect_clusters, find_path};
//!
//! let nodes = vec![
//!     Node::new("a", "person"),
//!     Node::new("b", "person"),
//!     Node::new("c", "company"),
//! ];
//! let links = vec![
//!     Link::new("a", "b", "knows").with_weight(2.0),
//!     Link::new("b", "c", "works_at").with_weight(3.0),
//! ];
//!
//! let index = GraphIndex::build(&nodes, &links)?;
//!
//! let path = find_path(&index, "a", "c", &PathQuery::new(PathMode::FewestHops))?;
//! println!("{} hops, weight {}", path.hops(), path.total_weight());
//!
//! let clustering = detect_clusters(&index)?;
//! println!("{} clusters", clustering.len());
//! # Ok::<(), graphlens::Error>(())
//! ```

mod cluster;
mod error;
mod index;
mod model;
mod path;

pub mod config;
pub mod warning;

pub use cluster::{Cluster, Clustering, detect_clusters};
pub use error::{Error, GraphError, PathError, Result};
pub use index::{AdjacencyEntry, DuplicatePolicy, GraphIndex, GraphStats, IndexOptions};
pub use model::{Endpoint, Link, LinkIx, Node, NodeIx, Snapshot};
pub use path::{
    CancelFlag, DEFAULT_MAX_HOPS, Path, PathMode, PathQuery, SearchLimits, find_path,
};
pub use warning::Warning;

/// Build an index over `nodes`/`links` and find one path in a single call.
///
/// Equivalent to [`GraphIndex::build`] followed by [`find_path`] with no
/// search limits. Prefer building the index once when running several
/// queries over the same snapshot.
///
/// # Errors
///
/// [`Error::Graph`] if the snapshot cannot be indexed, [`Error::Path`] if the
/// query fails.
pub fn find_path_in(
    nodes: &[Node],
    links: &[Link],
    source: &str,
    target: &str,
    mode: PathMode,
    max_hops: usize,
) -> Result<Path> {
    let index = GraphIndex::build(nodes, links)?;
    let query = PathQuery::new(mode).with_max_hops(max_hops);
    Ok(find_path(&index, source, target, &query)?)
}

/// Build an index over `nodes`/`links` and cluster it in a single call.
///
/// # Errors
///
/// [`Error::Graph`] if the snapshot cannot be indexed or is empty.
pub fn detect_clusters_in(nodes: &[Node], links: &[Link]) -> Result<Clustering> {
    let index = GraphIndex::build(nodes, links)?;
    Ok(detect_clusters(&index)?)
}
