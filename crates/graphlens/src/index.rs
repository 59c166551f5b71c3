//! Adjacency index over a node/link snapshot.
//!
//! `GraphIndex` is the only place string ids are resolved. Nodes and links are
//! copied into flat arrays and every algorithm works on [`NodeIx`]/[`LinkIx`]
//! handles into them.
//!
//! ## Ordering
//!
//! Node order and link order are preserved from the input. They are what make
//! every traversal deterministic:
//!
//! | Order | Decides |
//! |-------|---------|
//! | Node input order | Dijkstra tie-breaks, cluster numbering |
//! | Link input order | Adjacency enumeration, which parallel link a path uses |

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GraphError;
use crate::model::{Link, LinkIx, Node, NodeIx};
use crate::warning::Warning;

/// What to do when the same node id appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the build with [`GraphError::DuplicateId`].
    #[default]
    Reject,
    /// Keep the first occurrence and record a [`Warning::DuplicateNode`] for
    /// each later one.
    KeepFirst,
}

/// Options for [`GraphIndex::build_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Duplicate node id handling.
    pub duplicates: DuplicatePolicy,
}

/// One neighbor of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyEntry {
    /// The node on the other side of the link.
    pub neighbor: NodeIx,
    /// The link that was followed.
    pub link: LinkIx,
    /// The link's weight.
    pub weight: f64,
    /// `true` if this is the first link (in input order) between the two
    /// nodes. Parallel links after the first are `false`.
    pub primary: bool,
}

/// Summary counts for an indexed snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Addressable nodes.
    pub nodes: usize,
    /// Links that survived ingestion (self-loops included).
    pub links: usize,
    /// Links dropped because an endpoint was unknown.
    pub dropped_links: usize,
    /// Links whose endpoints are the same node.
    pub self_loops: usize,
    /// Connected components, ignoring node types.
    pub components: usize,
    /// Nodes with no traversable links.
    pub isolated: usize,
}

/// Read-only adjacency structure built from one snapshot.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    nodes: Vec<Node>,
    links: Vec<Link>,
    /// Input position of each kept link.
    link_positions: Vec<usize>,
    adjacency: Vec<Vec<AdjacencyEntry>>,
    lookup: HashMap<String, NodeIx>,
    warnings: Vec<Warning>,
}

impl GraphIndex {
    /// Build an index with default options (duplicate ids are rejected).
    pub fn build(nodes: &[Node], links: &[Link]) -> Result<Self, GraphError> {
        Self::build_with(nodes, links, &IndexOptions::default())
    }

    /// Build an index in O(N + E).
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyId`] if any node id is empty
    /// - [`GraphError::DuplicateId`] if an id repeats under
    ///   [`DuplicatePolicy::Reject`]
    ///
    /// Links with unknown endpoints are not errors; they are dropped and
    /// reported through [`warnings`](Self::warnings).
    pub fn build_with(
        nodes: &[Node],
        links: &[Link],
        options: &IndexOptions,
    ) -> Result<Self, GraphError> {
        let mut index = Self {
            nodes: Vec::with_capacity(nodes.len()),
            links: Vec::with_capacity(links.len()),
            link_positions: Vec::with_capacity(links.len()),
            adjacency: Vec::with_capacity(nodes.len()),
            lookup: HashMap::with_capacity(nodes.len()),
            warnings: Vec::new(),
        };

        for (position, node) in nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(GraphError::EmptyId { position });
            }
            if index.lookup.contains_key(&node.id) {
                match options.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(GraphError::DuplicateId(node.id.clone()));
                    }
                    DuplicatePolicy::KeepFirst => {
                        warn!(node_id = %node.id, position, "Ignoring duplicate node id");
                        index.warnings.push(Warning::DuplicateNode {
                            position,
                            node_id: node.id.clone(),
                        });
                        continue;
                    }
                }
            }
            let ix = NodeIx::from(index.nodes.len());
            index.lookup.insert(node.id.clone(), ix);
            index.nodes.push(node.clone());
            index.adjacency.push(Vec::new());
        }

        let mut seen_pairs: HashSet<(NodeIx, NodeIx)> = HashSet::new();
        for (position, link) in links.iter().enumerate() {
            let (Some(source), Some(target)) =
                (index.lookup(&link.source), index.lookup(&link.target))
            else {
                let missing_id = if index.lookup(&link.source).is_none() {
                    link.source.clone()
                } else {
                    link.target.clone()
                };
                warn!(position, missing_id = %missing_id, "Dropping link with unknown endpoint");
                index.warnings.push(Warning::DanglingLink {
                    position,
                    missing_id,
                });
                continue;
            };

            let link_ix = LinkIx::from(index.links.len());
            index.links.push(link.clone());
            index.link_positions.push(position);

            if source == target {
                index.warnings.push(Warning::SelfLoop {
                    position,
                    node_id: link.source.clone(),
                });
                continue;
            }

            let primary = seen_pairs.insert((source.min(target), source.max(target)));
            index.adjacency[source.index()].push(AdjacencyEntry {
                neighbor: target,
                link: link_ix,
                weight: link.weight,
                primary,
            });
            index.adjacency[target.index()].push(AdjacencyEntry {
                neighbor: source,
                link: link_ix,
                weight: link.weight,
                primary,
            });
        }

        debug!(
            nodes = index.nodes.len(),
            links = index.links.len(),
            warnings = index.warnings.len(),
            "Graph index built"
        );

        Ok(index)
    }

    /// Number of addressable nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links that survived ingestion.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the index has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a node id to its handle.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<NodeIx> {
        self.lookup.get(id).copied()
    }

    /// The node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `ix` did not come from this index.
    #[must_use]
    pub fn node(&self, ix: NodeIx) -> &Node {
        &self.nodes[ix.index()]
    }

    /// The link behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `ix` did not come from this index.
    #[must_use]
    pub fn link(&self, ix: LinkIx) -> &Link {
        &self.links[ix.index()]
    }

    /// Position of a kept link in the slice passed to the build.
    ///
    /// Differs from `ix` once an earlier link has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if `ix` did not come from this index.
    #[must_use]
    pub fn link_position(&self, ix: LinkIx) -> usize {
        self.link_positions[ix.index()]
    }

    /// All addressable nodes in input order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All kept links in input order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Neighbors of a node in link input order.
    #[must_use]
    pub fn neighbors(&self, ix: NodeIx) -> &[AdjacencyEntry] {
        &self.adjacency[ix.index()]
    }

    /// Handles of every node in input order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIx> + '_ {
        (0..self.nodes.len()).map(NodeIx::from)
    }

    /// Problems tolerated during the build.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Summary counts, including connected components ignoring type.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let dropped_links = self
            .warnings
            .iter()
            .filter(|w| matches!(w, Warning::DanglingLink { .. }))
            .count();
        let self_loops = self
            .warnings
            .iter()
            .filter(|w| matches!(w, Warning::SelfLoop { .. }))
            .count();
        let isolated = self.adjacency.iter().filter(|a| a.is_empty()).count();

        let mut visited = vec![false; self.nodes.len()];
        let mut components = 0;
        let mut queue = VecDeque::new();
        for start in self.node_indices() {
            if visited[start.index()] {
                continue;
            }
            components += 1;
            visited[start.index()] = true;
            queue.push_back(start);
            while let Some(current) = queue.pop_front() {
                for entry in self.neighbors(current) {
                    if !visited[entry.neighbor.index()] {
                        visited[entry.neighbor.index()] = true;
                        queue.push_back(entry.neighbor);
                    }
                }
            }
        }

        GraphStats {
            nodes: self.nodes.len(),
            links: self.links.len(),
            dropped_links,
            self_loops,
            components,
            isolated,
        }
    }
}
