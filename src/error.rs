//! Error types shared by the graph model and both circuit finders.

use thiserror::Error;

/// Errors raised while constructing a graph or starting a traversal.
///
/// A Hamiltonian search that finds no cycle is *not* an error; it is reported
/// as `Ok(None)` by [`crate::hamiltonian_circuit`]. Likewise an Eulerian walk
/// over a non-Eulerian graph returns a partial walk rather than failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Construction input describes an ill-formed graph, e.g. a non-square
    /// adjacency matrix or a generation request too small to carry a cycle.
    #[error("invalid graph size: {reason}")]
    InvalidSize { reason: String },

    /// An edge endpoint or start vertex lies outside `[0, vertex_count)`.
    #[error("vertex index {index} out of range for graph with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GraphError {
    pub(crate) fn invalid_size(reason: impl Into<String>) -> Self {
        GraphError::InvalidSize {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GraphError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(
            e.to_string(),
            "vertex index 7 out of range for graph with 5 vertices"
        );

        let e = GraphError::invalid_size("adjacency matrix is not square");
        assert_eq!(
            e.to_string(),
            "invalid graph size: adjacency matrix is not square"
        );
    }
}
