//! Fewest-hops path (breadth-first search).

use std::collections::VecDeque;

use super::Trail;
use super::types::SearchLimits;
use crate::error::PathError;
use crate::index::GraphIndex;
use crate::model::{LinkIx, NodeIx};

/// Level-order search from `source`; the first time `target` is dequeued its
/// recorded predecessors give a minimum-hop path.
///
/// Only primary adjacency entries are followed, so the link recorded for each
/// step is the first one in input order between the two nodes.
pub(super) fn search(
    index: &GraphIndex,
    source: NodeIx,
    target: NodeIx,
    limits: &SearchLimits,
) -> Result<Option<Trail>, PathError> {
    let count = index.node_count();
    let mut visited = vec![false; count];
    let mut predecessors: Vec<Option<(NodeIx, LinkIx)>> = vec![None; count];
    let mut queue = VecDeque::new();

    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        limits.check()?;
        if current == target {
            return Ok(Some(Trail::from_predecessors(&predecessors, source, target)));
        }

        for entry in index.neighbors(current).iter().filter(|e| e.primary) {
            let next = entry.neighbor;
            if !visited[next.index()] {
                visited[next.index()] = true;
                predecessors[next.index()] = Some((current, entry.link));
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}
