//! Types for path queries and their results.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::model::{Link, Node};

/// Default depth bound for [`PathMode::BoundedSearch`].
pub const DEFAULT_MAX_HOPS: usize = 6;

/// Traversal strategy for a path query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathMode {
    /// Minimum total weight (Dijkstra). Rejects negative weights.
    #[default]
    #[serde(alias = "weighted")]
    WeightedShortest,
    /// Minimum number of links (breadth-first).
    #[serde(alias = "hops")]
    FewestHops,
    /// First path found by a depth-limited exhaustive search. Not necessarily
    /// the shortest.
    #[serde(alias = "bounded")]
    BoundedSearch,
}

impl PathMode {
    /// Short name used in CLI output and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WeightedShortest => "weighted",
            Self::FewestHops => "hops",
            Self::BoundedSearch => "bounded",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted" | "weighted-shortest" | "dijkstra" | "w" => Ok(Self::WeightedShortest),
            "hops" | "fewest-hops" | "bfs" | "h" => Ok(Self::FewestHops),
            "bounded" | "bounded-search" | "dfs" | "b" => Ok(Self::BoundedSearch),
            other => Err(format!(
                "Invalid mode '{other}'. Use 'weighted', 'hops', or 'bounded'."
            )),
        }
    }
}

/// Shared flag a caller can raise to abort a running search.
///
/// Cloning shares the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Searches holding a clone stop at their next iteration.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Deadline and cancellation checked once per search iteration.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Abort with [`PathError::DeadlineExceeded`] once this instant passes.
    pub deadline: Option<Instant>,
    /// Abort with [`PathError::Cancelled`] once this flag is raised.
    pub cancel: Option<CancelFlag>,
}

impl SearchLimits {
    /// No deadline, no cancellation.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Deadline `timeout` from now.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Attach a cancel flag.
    #[must_use]
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub(crate) fn check(&self) -> Result<(), PathError> {
        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            return Err(PathError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(PathError::DeadlineExceeded);
        }
        Ok(())
    }
}

/// A path request: strategy, depth bound and limits.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Traversal strategy.
    pub mode: PathMode,
    /// Maximum number of links. Only consulted by [`PathMode::BoundedSearch`].
    pub max_hops: usize,
    /// Deadline and cancellation.
    pub limits: SearchLimits,
}

impl PathQuery {
    /// Query with [`DEFAULT_MAX_HOPS`] and no limits.
    #[must_use]
    pub fn new(mode: PathMode) -> Self {
        Self {
            mode,
            max_hops: DEFAULT_MAX_HOPS,
            limits: SearchLimits::none(),
        }
    }

    /// Replace the depth bound.
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Replace the limits.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for PathQuery {
    fn default() -> Self {
        Self::new(PathMode::default())
    }
}

/// A path between two nodes.
///
/// Invariants, enforced by [`Path::new`]:
/// - `hops == nodes.len() - 1 == links.len()`
/// - `links[i]` connects `nodes[i]` and `nodes[i + 1]`
/// - `total_weight` is the sum of the link weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    nodes: Vec<Node>,
    links: Vec<Link>,
    total_weight: f64,
    hops: usize,
}

impl Path {
    /// Create a path, validating invariants.
    ///
    /// Returns `None` if:
    /// - `nodes` has fewer than two entries
    /// - `links.len()` does not equal `nodes.len() - 1`
    /// - some link does not connect its neighbors in `nodes`
    #[must_use]
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Option<Self> {
        if nodes.len() < 2 || links.len() != nodes.len() - 1 {
            return None;
        }
        let chained = links
            .iter()
            .zip(nodes.windows(2))
            .all(|(link, pair)| link.connects(&pair[0].id, &pair[1].id));
        if !chained {
            return None;
        }
        Some(Self::from_parts(nodes, links))
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        let total_weight = links.iter().map(|l| l.weight).sum();
        let hops = links.len();
        Self {
            nodes,
            links,
            total_weight,
            hops,
        }
    }

    /// Nodes from source to target inclusive.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Links in traversal order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Sum of the link weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of links traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.hops
    }

    /// The first node.
    #[must_use]
    pub fn source(&self) -> &Node {
        &self.nodes[0]
    }

    /// The last node.
    #[must_use]
    pub fn target(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Node ids in order, convenient for assertions and display.
    #[must_use]
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}
