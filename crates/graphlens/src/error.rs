//! Error types for graphlens operations.
//!
//! Errors are split by the operation that produces them:
//!
//! - **`GraphError`**: the snapshot cannot be indexed or clustered (empty node
//!   set, bad or duplicate ids)
//! - **`PathError`**: a path query failed, either because the request itself is
//!   invalid or because no path exists under the query's constraints
//! - **`Error`**: top-level wrapper used by the CLI and snapshot loading
//!
//! ## Error Categorization
//!
//! `PathError` separates "no path" outcomes from input problems. Callers that
//! only want to know whether to show an empty-result message should use
//! [`PathError::is_not_found`].
//!
//! Non-fatal ingestion problems (dangling links, self-loops) are not errors;
//! see [`crate::warning`].

use thiserror::Error;


/// Result type for graphlens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for graphlens.
#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot could not be indexed or clustered
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Path query failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or output JSON was malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while building a [`GraphIndex`](crate::GraphIndex) or
/// clustering it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The operation was invoked on an empty node set.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A node had an empty id.
    #[error("node at position {position} has an empty id")]
    EmptyId {
        /// Zero-based position of the node in the input slice.
        position: usize,
    },

    /// The same node id appeared more than once and the index was built with
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("duplicate node id: {0}")]
    DuplicateId(String),
}

/// Reasons a path query can fail.
///
/// Every variant is a deterministic function of the input; retrying with the
/// same snapshot and query yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The index contains no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The source or target id is not in the node set.
    #[error("unknown endpoint: {0}")]
    InvalidEndpoint(String),

    /// Source and target are the same node.
    #[error("source and target are both {0}; a path needs at least one edge")]
    SameEndpoint(String),

    /// A link has a negative weight and a weighted search was requested.
    #[error("link at position {position} has negative weight {weight}")]
    NegativeWeight {
        /// Zero-based position of the offending link in the input slice.
        position: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// A link has a NaN or infinite weight and a weighted search was requested.
    #[error("link at position {position} has non-finite weight {weight}")]
    InvalidWeight {
        /// Zero-based position of the offending link in the input slice.
        position: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// No path exists within the search's constraints.
    #[error("no path from {from} to {to}")]
    NotFound {
        /// Source node id.
        from: String,
        /// Target node id.
        to: String,
    },

    /// The query's deadline passed before the search finished.
    #[error("search deadline exceeded")]
    DeadlineExceeded,

    /// The query's cancel flag was raised.
    #[error("search cancelled")]
    Cancelled,
}

impl PathError {
    /// Returns `true` if this error means "there is no path" rather than
    /// "the request was invalid".
    ///
    /// `SameEndpoint` counts as not-found: zero-length paths are never
    /// produced.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::SameEndpoint(_))
    }

    /// Returns `true` if the search was stopped by its limits rather than
    /// running to completion.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::DeadlineExceeded | Self::Cancelled)
    }
}
