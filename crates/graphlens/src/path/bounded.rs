//! Depth-limited exhaustive search.
//!
//! Backtracking DFS with an explicit stack. A node is on the current branch
//! from the moment its frame is pushed until the frame is popped, so other
//! branches may pass through it again. Stack depth never exceeds `max_hops`
//! frames, whatever the graph looks like.

use tracing::trace;

use super::Trail;
use super::types::SearchLimits;
use crate::error::PathError;
use crate::index::GraphIndex;
use crate::model::{LinkIx, NodeIx};

#[derive(Debug)]
struct Frame {
    node: NodeIx,
    /// Next adjacency entry to try.
    cursor: usize,
    /// Link used to enter this node; `None` for the source.
    via: Option<LinkIx>,
}

/// Return the first path of at most `max_hops` links, in adjacency
/// enumeration order. The result is not necessarily the shortest.
pub(super) fn search(
    index: &GraphIndex,
    source: NodeIx,
    target: NodeIx,
    max_hops: usize,
    limits: &SearchLimits,
) -> Result<Option<Trail>, PathError> {
    if max_hops == 0 {
        return Ok(None);
    }

    let mut on_branch = vec![false; index.node_count()];
    on_branch[source.index()] = true;
    let mut stack = vec![Frame {
        node: source,
        cursor: 0,
        via: None,
    }];

    loop {
        limits.check()?;
        let Some(frame) = stack.last_mut() else {
            return Ok(None);
        };
        let node = frame.node;
        let cursor = frame.cursor;
        frame.cursor += 1;

        let Some(entry) = index.neighbors(node).get(cursor) else {
            on_branch[node.index()] = false;
            stack.pop();
            continue;
        };
        let next = entry.neighbor;
        if !entry.primary || on_branch[next.index()] {
            continue;
        }

        // `stack.len()` links lead to `next`; that is within bound because a
        // frame is only pushed while fewer than `max_hops` frames exist.
        if next == target {
            let mut trail = Trail::default();
            for frame in &stack {
                trail.nodes.push(frame.node);
                trail.links.extend(frame.via);
            }
            trail.nodes.push(next);
            trail.links.push(entry.link);
            return Ok(Some(trail));
        }

        if stack.len() < max_hops {
            trace!(node = %index.node(next).id, depth = stack.len(), "Descending");
            on_branch[next.index()] = true;
            stack.push(Frame {
                node: next,
                cursor: 0,
                via: Some(entry.link),
            });
        }
    }
}
