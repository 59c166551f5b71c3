//! Same-type connectivity clustering.
//!
//! A cluster is a maximal set of nodes that share a type and are connected by
//! links whose endpoints all have that type. This is a connected-components
//! computation on the subgraph of same-typed links, not modularity-based
//! community detection.
//!
//! Cluster ids are assigned in node input order starting from 0, so the same
//! snapshot always yields the same numbering.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::error::GraphError;
use crate::index::GraphIndex;
use crate::model::Node;

/// One cluster of same-typed, connected nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Sequential id, starting from 0.
    pub cluster_id: usize,
    /// The type shared by every member.
    pub node_type: String,
    /// Members in input order.
    pub members: Vec<Node>,
}

impl Cluster {
    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; every cluster has at least its seed node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` for a cluster with a single member.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// A partition of every indexed node into clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clustering {
    clusters: Vec<Cluster>,
    /// Ordered by node id.
    assignment: BTreeMap<String, usize>,
}

impl Clustering {
    /// Clusters ordered by id.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// The cluster a node id belongs to.
    #[must_use]
    pub fn cluster_of(&self, node_id: &str) -> Option<usize> {
        self.assignment.get(node_id).copied()
    }

    /// Members of one cluster.
    #[must_use]
    pub fn members(&self, cluster_id: usize) -> Option<&[Node]> {
        self.clusters
            .get(cluster_id)
            .map(|cluster| cluster.members.as_slice())
    }

    /// Number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// `cluster_id -> members` map.
    #[must_use]
    pub fn by_id(&self) -> BTreeMap<usize, Vec<Node>> {
        self.clusters
            .iter()
            .map(|cluster| (cluster.cluster_id, cluster.members.clone()))
            .collect()
    }

    /// `node_id -> cluster_id` map, ordered by node id.
    #[must_use]
    pub fn assignment(&self) -> &BTreeMap<String, usize> {
        &self.assignment
    }
}

/// Partition the indexed nodes into same-type connected clusters.
///
/// Nodes are seeded in input order. Each unvisited node starts a new cluster
/// and a breadth-first flood fill pulls in every neighbor of the same type.
/// A node with no same-typed neighbor ends up alone.
///
/// # Errors
///
/// [`GraphError::EmptyGraph`] if the index has no nodes.
///
/// # Examples
///
/// ```
/// use graphlens::{GraphIndex, Link, Node, detect_clusters};
///
/// let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "y")];
/// let links = vec![Link::new("a", "b", "knows"), Link::new("b", "c", "knows")];
/// let index = GraphIndex::build(&nodes, &links)?;
///
/// let clustering = detect_clusters(&index)?;
/// assert_eq!(clustering.len(), 2);
/// assert_eq!(clustering.cluster_of("a"), clustering.cluster_of("b"));
/// assert_eq!(clustering.cluster_of("c"), Some(1));
/// # Ok::<(), graphlens::GraphError>(())
/// ```
pub fn detect_clusters(index: &GraphIndex) -> Result<Clustering, GraphError> {
    if index.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut cluster_of = vec![None::<usize>; index.node_count()];
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut queue = VecDeque::new();

    for seed in index.node_indices() {
        if cluster_of[seed.index()].is_some() {
            continue;
        }
        let cluster_id = clusters.len();
        let seed_type = &index.node(seed).node_type;
        let mut members = vec![seed];
        cluster_of[seed.index()] = Some(cluster_id);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for entry in index.neighbors(current) {
                let next = entry.neighbor;
                if cluster_of[next.index()].is_none() && index.node(next).node_type == *seed_type {
                    cluster_of[next.index()] = Some(cluster_id);
                    members.push(next);
                    queue.push_back(next);
                }
            }
        }

        members.sort_unstable();
        clusters.push(Cluster {
            cluster_id,
            node_type: seed_type.clone(),
            members: members.iter().map(|&ix| index.node(ix).clone()).collect(),
        });
    }

    let assignment = index
        .node_indices()
        .zip(cluster_of)
        .filter_map(|(ix, cluster)| cluster.map(|c| (index.node(ix).id.clone(), c)))
        .collect();

    debug!(
        nodes = index.node_count(),
        clusters = clusters.len(),
        "Clusters detected"
    );

    Ok(Clustering {
        clusters,
        assignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn type_boundary_splits_connected_nodes() {
        let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "y")];
        let links = vec![
            Link::new("a", "b", "t").with_weight(2.0),
            Link::new("b", "c", "t").with_weight(3.0),
        ];
        let index = GraphIndex::build(&nodes, &links).unwrap();
        let clustering = detect_clusters(&index).unwrap();

        let by_id = clustering.by_id();
        assert_eq!(by_id.len(), 2);
        assert_eq!(ids(&by_id[&0]), ["a", "b"]);
        assert_eq!(ids(&by_id[&1]), ["c"]);
        assert_eq!(clustering.clusters()[1].node_type, "y");
    }

    #[test]
    fn same_type_through_other_type_does_not_join() {
        // a(x) - m(y) - b(x): a and b share a type but only connect through m.
        let nodes = vec![Node::new("a", "x"), Node::new("m", "y"), Node::new("b", "x")];
        let links = vec![Link::new("a", "m", "t"), Link::new("m", "b", "t")];
        let index = GraphIndex::build(&nodes, &links).unwrap();
        let clustering = detect_clusters(&index).unwrap();

        assert_eq!(clustering.len(), 3);
        assert_ne!(clustering.cluster_of("a"), clustering.cluster_of("b"));
        assert!(clustering.clusters().iter().all(Cluster::is_singleton));
    }

    #[test]
    fn members_are_listed_in_input_order() {
        let nodes = vec![
            Node::new("a", "x"),
            Node::new("b", "x"),
            Node::new("c", "x"),
            Node::new("d", "x"),
        ];
        // Flood fill reaches d before b.
        let links = vec![
            Link::new("a", "d", "t"),
            Link::new("d", "c", "t"),
            Link::new("c", "b", "t"),
        ];
        let index = GraphIndex::build(&nodes, &links).unwrap();
        let clustering = detect_clusters(&index).unwrap();

        assert_eq!(clustering.len(), 1);
        assert_eq!(ids(clustering.members(0).unwrap()), ["a", "b", "c", "d"]);
    }

    #[test]
    fn cluster_ids_follow_seed_order() {
        let nodes = vec![
            Node::new("p", "y"),
            Node::new("a", "x"),
            Node::new("q", "y"),
            Node::new("b", "x"),
        ];
        let links = vec![Link::new("a", "b", "t"), Link::new("p", "q", "t")];
        let index = GraphIndex::build(&nodes, &links).unwrap();
        let clustering = detect_clusters(&index).unwrap();

        assert_eq!(clustering.cluster_of("p"), Some(0));
        assert_eq!(clustering.cluster_of("q"), Some(0));
        assert_eq!(clustering.cluster_of("a"), Some(1));
        assert_eq!(clustering.cluster_of("b"), Some(1));
        assert_eq!(clustering.cluster_of("missing"), None);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let index = GraphIndex::build(&[], &[]).unwrap();
        assert_eq!(detect_clusters(&index), Err(GraphError::EmptyGraph));
    }
}
