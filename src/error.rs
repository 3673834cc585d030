/*!
# Errors

Every failure of a graph operation is a violated precondition (duplicate insert, unknown vertex,
exhausted capacity, loop, unsupported operation). There is nothing to retry, so errors only need
to carry enough context to understand what went wrong: the operation, the vertices involved and,
where it matters, the state found in the graph.

Vertices are rendered with their `Debug` representation, which keeps [`GraphError`] independent
of the vertex id type.
*/

use std::fmt::Debug;

use crate::{edge::ConnectionType, node::NumNodes};

/// Shorthand for results of graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Coarse category of a [`GraphError`], handy for matching
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AlreadyExists,
    CapacityExceeded,
    NotFound,
    DuplicateConnection,
    Unimplemented,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("{op}: invalid argument: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    #[error("{op}: vertex {vertex} already exists")]
    AlreadyExists { op: &'static str, vertex: String },

    #[error(
        "{op}: not enough space for {requested} new vertices (capacity {capacity}, {order} in use)"
    )]
    CapacityExceeded {
        op: &'static str,
        capacity: NumNodes,
        order: NumNodes,
        requested: NumNodes,
    },

    #[error("{op}: {what} does not exist")]
    NotFound { op: &'static str, what: String },

    #[error("{op}: {first} and {second} are already connected by {existing} (slot {slot})")]
    DuplicateConnection {
        op: &'static str,
        first: String,
        second: String,
        existing: ConnectionType,
        slot: usize,
    },

    #[error("{op} is not supported by {repr}")]
    Unimplemented {
        op: &'static str,
        repr: &'static str,
    },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            GraphError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            GraphError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            GraphError::NotFound { .. } => ErrorKind::NotFound,
            GraphError::DuplicateConnection { .. } => ErrorKind::DuplicateConnection,
            GraphError::Unimplemented { .. } => ErrorKind::Unimplemented,
        }
    }

    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument { op, .. }
            | GraphError::AlreadyExists { op, .. }
            | GraphError::CapacityExceeded { op, .. }
            | GraphError::NotFound { op, .. }
            | GraphError::DuplicateConnection { op, .. }
            | GraphError::Unimplemented { op, .. } => op,
        }
    }

    pub(crate) fn equal_vertices<V: Debug>(op: &'static str, u: &V) -> Self {
        GraphError::InvalidArgument {
            op,
            reason: format!("both endpoints are {u:?}, loops are not allowed"),
        }
    }

    pub(crate) fn missing_vertex<V: Debug>(op: &'static str, u: &V) -> Self {
        GraphError::NotFound {
            op,
            what: format!("vertex {u:?}"),
        }
    }
}

/// Returns early with the given error if the condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $err : expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use raise_error_unless;
