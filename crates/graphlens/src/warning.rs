//! Warning types for non-fatal problems found while indexing a snapshot.
//!
//! Presentation layers routinely hand over snapshots that are slightly out of
//! sync (a link added before its node, a node removed while its links linger).
//! Those inputs are tolerated: the offending item is skipped and a [`Warning`]
//! is recorded on the [`GraphIndex`](crate::GraphIndex) so the caller can
//! surface it.
//!
//! # Examples
//!
//! ```
//! use graphlens::{GraphIndex, Link, Node, Warning};
//!
//! let nodes = vec![Node::new("a", "x")];
//! let links = vec![Link::new("a", "ghost", "knows")];
//! let index = GraphIndex::build(&nodes, &links)?;
//!
//! assert_eq!(index.link_count(), 0);
//! assert!(matches!(index.warnings()[0], Warning::DanglingLink { .. }));
//! # Ok::<(), graphlens::GraphError>(())
//! ```

/// A non-fatal problem recorded while building an index.
///
/// Each variant carries the input position of the offending item so callers
/// can point back into their own arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A link referenced a node id that is not in the node set.
    ///
    /// The link is dropped and takes no part in any traversal.
    DanglingLink {
        /// Zero-based position of the link in the input slice.
        position: usize,
        /// The endpoint id that could not be resolved.
        missing_id: String,
    },

    /// A link connected a node to itself.
    ///
    /// The link is kept in the link list but contributes no adjacency entry.
    SelfLoop {
        /// Zero-based position of the link in the input slice.
        position: usize,
        /// The node the link loops on.
        node_id: String,
    },

    /// A node id repeated an earlier one and was ignored.
    ///
    /// Only recorded under [`DuplicatePolicy::KeepFirst`](crate::DuplicatePolicy::KeepFirst).
    DuplicateNode {
        /// Zero-based position of the ignored node in the input slice.
        position: usize,
        /// The repeated id.
        node_id: String,
    },
}

impl Warning {
    /// Returns the input position associated with this warning.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::DanglingLink { position, .. }
            | Self::SelfLoop { position, .. }
            | Self::DuplicateNode { position, .. } => *position,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlens::Warning;
    ///
    /// let warning = Warning::DanglingLink {
    ///     position: 4,
    ///     missing_id: "ghost".to_string(),
    /// };
    /// let desc = warning.description();
    /// assert!(desc.contains("link 4"));
    /// assert!(desc.contains("ghost"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::DanglingLink {
                position,
                missing_id,
            } => format!("link {position}: unknown endpoint '{missing_id}', dropped"),
            Self::SelfLoop { position, node_id } => {
                format!("link {position}: self-loop on '{node_id}', not traversable")
            }
            Self::DuplicateNode { position, node_id } => {
                format!("node {position}: duplicate id '{node_id}', ignored")
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// Useful for grouping warnings without matching on variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DanglingLink { .. } => "dangling_link",
            Self::SelfLoop { .. } => "self_loop",
            Self::DuplicateNode { .. } => "duplicate_node",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}
