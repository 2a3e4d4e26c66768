//! Eulerian and Hamiltonian circuit search over undirected graphs.
//!
//! The [`Graph`] model stores insertion-ordered adjacency lists plus the
//! per-edge usage flags the Eulerian finder consumes. [`eulerian_circuit`]
//! runs a recursive Hierholzer pass; [`hamiltonian_circuit`] runs an
//! exhaustive backtracking search. [`generate_graph`] builds connected
//! random graphs for exercising both.

pub mod error;
pub mod eulerian;
pub mod generate;
pub mod graph;
pub mod hamiltonian;

pub use error::{GraphError, Result};
pub use eulerian::eulerian_circuit;
pub use generate::generate_graph;
pub use graph::Graph;
pub use hamiltonian::hamiltonian_circuit;
