//! Error types.
//!
//! Query errors are caller contract violations: they are detected before any search work
//! starts and are never retried. "No common ancestor" is not an error; queries report it as
//! `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Empty vertex group, empty noun list, or a similar malformed request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// The graph contains a directed cycle through `vertex`.
    #[error("graph is not acyclic: vertex {vertex} lies on a directed cycle")]
    Cycle { vertex: usize },

    /// The graph does not have exactly one vertex with out-degree 0.
    #[error("graph is not rooted: found {roots} vertices with no outgoing edges")]
    NotRooted { roots: usize },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unknown noun: {0:?}")]
    UnknownNoun(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse { line, message: msg.into() }
    }
}

/// Check that `vertex` is a valid id for a graph with `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::InvalidVertex { vertex, vertex_count })
    }
}
