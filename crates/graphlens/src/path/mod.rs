//! Path finding over a [`GraphIndex`].
//!
//! Three interchangeable strategies share one entry point, [`find_path`]:
//!
//! | Mode | Algorithm | Guarantee |
//! |------|-----------|-----------|
//! | `WeightedShortest` | Dijkstra, binary heap | Minimum total weight |
//! | `FewestHops` | Breadth-first search | Minimum number of links |
//! | `BoundedSearch` | Depth-limited DFS | Some path of at most `max_hops` links |
//!
//! All three report results through the same [`Path`] type and the same
//! [`PathError`] variants, and all three check the query's [`SearchLimits`]
//! once per iteration.
//!
//! ## Parallel links
//!
//! When several links join the same two nodes, a path uses the first of them in
//! input order. Dijkstra is the one exception: it takes the lightest, and the
//! first among equally light ones, so that `total_weight` is the true minimum.

mod bounded;
mod hops;
mod types;
mod weighted;

pub use types::{CancelFlag, DEFAULT_MAX_HOPS, Path, PathMode, PathQuery, SearchLimits};

use tracing::debug;

use crate::error::PathError;
use crate::index::GraphIndex;
use crate::model::{LinkIx, NodeIx};

/// Node and link handles of a found path, before ids are resolved.
#[derive(Debug, Default)]
struct Trail {
    nodes: Vec<NodeIx>,
    links: Vec<LinkIx>,
}

impl Trail {
    /// Walk predecessor records back from `target` to `source`.
    fn from_predecessors(
        predecessors: &[Option<(NodeIx, LinkIx)>],
        source: NodeIx,
        target: NodeIx,
    ) -> Self {
        let mut trail = Self::default();
        let mut current = target;
        trail.nodes.push(current);
        while current != source {
            let Some((previous, link)) = predecessors[current.index()] else {
                break;
            };
            trail.links.push(link);
            trail.nodes.push(previous);
            current = previous;
        }
        trail.nodes.reverse();
        trail.links.reverse();
        trail
    }

    fn into_path(self, index: &GraphIndex) -> Path {
        let nodes = self.nodes.iter().map(|&ix| index.node(ix).clone()).collect();
        let links = self.links.iter().map(|&ix| index.link(ix).clone()).collect();
        Path::from_parts(nodes, links)
    }
}

/// Find a path from `source` to `target`.
///
/// Validation happens in this order, and the first failure is returned:
///
/// 1. [`PathError::EmptyGraph`] if the index has no nodes
/// 2. [`PathError::InvalidEndpoint`] if either id is unknown
/// 3. [`PathError::SameEndpoint`] if both ids name the same node
/// 4. [`PathError::NegativeWeight`] / [`PathError::InvalidWeight`] for
///    weighted searches over a bad weight
///
/// After that the search runs and either returns a [`Path`] with at least one
/// link, [`PathError::NotFound`], or one of the limit errors.
///
/// # Examples
///
/// ```
/// use graphlens::{GraphIndex, Link, Node, PathMode, PathQuery, find_path};
///
/// let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "y")];
/// let links = vec![
///     Link::new("a", "b", "knows").with_weight(2.0),
///     Link::new("b", "c", "knows").with_weight(3.0),
/// ];
/// let index = GraphIndex::build(&nodes, &links)?;
///
/// let path = find_path(&index, "a", "c", &PathQuery::new(PathMode::WeightedShortest))?;
/// assert_eq!(path.node_ids(), ["a", "b", "c"]);
/// assert_eq!(path.hops(), 2);
/// assert!((path.total_weight() - 5.0).abs() < f64::EPSILON);
/// # Ok::<(), graphlens::Error>(())
/// ```
pub fn find_path(
    index: &GraphIndex,
    source: &str,
    target: &str,
    query: &PathQuery,
) -> Result<Path, PathError> {
    if index.is_empty() {
        return Err(PathError::EmptyGraph);
    }
    let source_ix = index
        .lookup(source)
        .ok_or_else(|| PathError::InvalidEndpoint(source.to_string()))?;
    let target_ix = index
        .lookup(target)
        .ok_or_else(|| PathError::InvalidEndpoint(target.to_string()))?;
    if source_ix == target_ix {
        return Err(PathError::SameEndpoint(source.to_string()));
    }

    let trail = match query.mode {
        PathMode::WeightedShortest => {
            weighted::validate_weights(index)?;
            weighted::search(index, source_ix, target_ix, &query.limits)?
        }
        PathMode::FewestHops => hops::search(index, source_ix, target_ix, &query.limits)?,
        PathMode::BoundedSearch => bounded::search(
            index,
            source_ix,
            target_ix,
            query.max_hops,
            &query.limits,
        )?,
    };

    let Some(trail) = trail else {
        debug!(source, target, mode = %query.mode, "No path found");
        return Err(PathError::NotFound {
            from: source.to_string(),
            to: target.to_string(),
        });
    };

    let path = trail.into_path(index);
    debug!(
        source,
        target,
        mode = %query.mode,
        hops = path.hops(),
        total_weight = path.total_weight(),
        "Path found"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Node};

    fn line() -> GraphIndex {
        let nodes = vec![Node::new("a", "x"), Node::new("b", "x"), Node::new("c", "x")];
        let links = vec![Link::new("a", "b", "t"), Link::new("b", "c", "t")];
        GraphIndex::build(&nodes, &links).unwrap()
    }

    #[test]
    fn empty_graph_is_reported_first() {
        let index = GraphIndex::build(&[], &[]).unwrap();
        let err = find_path(&index, "a", "a", &PathQuery::default()).unwrap_err();
        assert_eq!(err, PathError::EmptyGraph);
    }

    #[test]
    fn unknown_endpoint_beats_same_endpoint() {
        let index = line();
        let err = find_path(&index, "zz", "zz", &PathQuery::default()).unwrap_err();
        assert_eq!(err, PathError::InvalidEndpoint("zz".to_string()));
    }

    #[test]
    fn unknown_target_is_named() {
        let index = line();
        let err = find_path(&index, "a", "nope", &PathQuery::default()).unwrap_err();
        assert_eq!(err, PathError::InvalidEndpoint("nope".to_string()));
    }

    #[test]
    fn same_endpoint_is_not_found_class() {
        let index = line();
        for mode in [
            PathMode::WeightedShortest,
            PathMode::FewestHops,
            PathMode::BoundedSearch,
        ] {
            let err = find_path(&index, "b", "b", &PathQuery::new(mode)).unwrap_err();
            assert_eq!(err, PathError::SameEndpoint("b".to_string()));
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn trail_reconstruction_orders_source_to_target() {
        let predecessors = vec![
            None,
            Some((NodeIx::from(0), LinkIx::from(0))),
            Some((NodeIx::from(1), LinkIx::from(1))),
        ];
        let trail = Trail::from_predecessors(&predecessors, NodeIx::from(0), NodeIx::from(2));
        assert_eq!(
            trail.nodes,
            [NodeIx::from(0), NodeIx::from(1), NodeIx::from(2)]
        );
        assert_eq!(trail.links, [LinkIx::from(0), LinkIx::from(1)]);
    }
}
