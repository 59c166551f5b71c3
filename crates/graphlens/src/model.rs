//! Boundary data model.
//!
//! These types are what callers hand to the engine and what comes back out:
//! - **Input**: `Node`, `Link`, `Snapshot`
//! - **Arena handles**: `NodeIx`, `LinkIx` (positions inside a `GraphIndex`)
//!
//! ## Endpoint Normalization
//!
//! Layout engines commonly replace a link's `source`/`target` strings with the
//! node objects themselves once a simulation has run. Both shapes deserialize
//! into a plain id through [`Endpoint`], so nothing past this module ever sees
//! anything other than a `String`.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

// ============================================================================
// Arena handles
// ============================================================================

/// Position of a node inside a [`GraphIndex`](crate::GraphIndex).
///
/// Handles are only meaningful for the index that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    /// Extract the raw position.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIx {
    fn from(ix: usize) -> Self {
        Self(ix)
    }
}

/// Position of a link inside a [`GraphIndex`](crate::GraphIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkIx(usize);

impl LinkIx {
    /// Extract the raw position.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for LinkIx {
    fn from(ix: usize) -> Self {
        Self(ix)
    }
}

impl fmt::Display for LinkIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Nodes and links
// ============================================================================

/// An addressable graph entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique, non-empty identity.
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Category tag. Clustering only joins nodes with equal tags.
    #[serde(rename = "type")]
    pub node_type: String,
}

impl Node {
    /// Create a node whose label equals its id.
    #[must_use]
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            node_type: node_type.into(),
        }
    }

    /// Replace the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// An undirected, weighted relation between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Id of one endpoint.
    #[serde(alias = "sourceId", deserialize_with = "endpoint_id")]
    pub source: String,
    /// Id of the other endpoint.
    #[serde(alias = "targetId", deserialize_with = "endpoint_id")]
    pub target: String,
    /// Relation tag. Carried through to paths, never interpreted.
    #[serde(rename = "type", default)]
    pub link_type: String,
    /// Traversal cost. Defaults to `1.0`.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Link {
    /// Create a link with the default weight of `1.0`.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        link_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            link_type: link_type.into(),
            weight: default_weight(),
        }
    }

    /// Replace the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns `true` if this link connects `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

fn default_weight() -> f64 {
    1.0
}

/// A link endpoint as it may appear in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// A bare node id.
    Id(String),
    /// An embedded node object; only its `id` is kept.
    Object {
        /// The embedded node's id.
        id: String,
    },
}

impl Endpoint {
    /// Collapse either representation into the plain id.
    #[must_use]
    pub fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

fn endpoint_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Endpoint::deserialize(deserializer).map(Endpoint::into_id)
}

// ============================================================================
// Snapshot
// ============================================================================

/// A complete graph as supplied by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All nodes, in the order that defines tie-breaking.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All links, in the order that defines adjacency enumeration.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a snapshot from any reader producing JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
