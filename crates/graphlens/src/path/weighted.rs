//! Weighted shortest path (Dijkstra).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::Trail;
use super::types::SearchLimits;
use crate::error::PathError;
use crate::index::GraphIndex;
use crate::model::{LinkIx, NodeIx};

/// Heap entry. Ordered so the max-heap pops the smallest distance first and,
/// among equal distances, the node that came first in the input.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    node: NodeIx,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Reject weights Dijkstra cannot handle.
///
/// Every indexed link is checked, not only those reachable from the source,
/// so the outcome does not depend on the endpoints.
pub(super) fn validate_weights(index: &GraphIndex) -> Result<(), PathError> {
    for (ix, link) in index.links().iter().enumerate() {
        let weight = link.weight;
        let position = index.link_position(LinkIx::from(ix));
        if !weight.is_finite() {
            return Err(PathError::InvalidWeight { position, weight });
        }
        if weight < 0.0 {
            return Err(PathError::NegativeWeight { position, weight });
        }
    }
    Ok(())
}

/// Settle nodes in order of tentative distance until `target` is settled.
///
/// Relaxation only replaces a predecessor on a strictly shorter distance, so
/// the first link (in adjacency order) achieving the minimum is kept.
pub(super) fn search(
    index: &GraphIndex,
    source: NodeIx,
    target: NodeIx,
    limits: &SearchLimits,
) -> Result<Option<Trail>, PathError> {
    let count = index.node_count();
    let mut distance = vec![f64::INFINITY; count];
    let mut predecessors: Vec<Option<(NodeIx, LinkIx)>> = vec![None; count];
    let mut settled = vec![false; count];
    let mut heap = BinaryHeap::new();

    distance[source.index()] = 0.0;
    heap.push(Candidate {
        distance: 0.0,
        node: source,
    });

    while let Some(Candidate { distance: d, node }) = heap.pop() {
        limits.check()?;
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        trace!(node = %index.node(node).id, distance = d, "Settled");

        if node == target {
            return Ok(Some(Trail::from_predecessors(&predecessors, source, target)));
        }

        for entry in index.neighbors(node) {
            let next = entry.neighbor;
            if settled[next.index()] {
                continue;
            }
            let candidate = d + entry.weight;
            if candidate < distance[next.index()] {
                distance[next.index()] = candidate;
                predecessors[next.index()] = Some((node, entry.link));
                heap.push(Candidate {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    Ok(None)
}
