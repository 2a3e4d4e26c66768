//! # Hamiltonian Circuit Finder
//!
//! Exhaustive backtracking DFS over the vertex set. Each frame appends the
//! current vertex to the path and marks it visited; once the path holds
//! every vertex, the cycle closes if the start vertex appears among the
//! current vertex's neighbors. A failed branch unmarks and pops before the
//! caller tries the next neighbor.
//!
//! The search is first-found: neighbors are tried in adjacency insertion
//! order and the first complete cycle is returned, so the result is
//! deterministic for a fixed graph but not canonical in any other sense.
//! Worst-case running time is exponential in the vertex count; that is the
//! problem, not the implementation.
//!
//! ## Example
//! ```
//! use circuits::{hamiltonian_circuit, Graph};
//!
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//! g.add_edge(3, 0).unwrap();
//!
//! let cycle = hamiltonian_circuit(&g, 0).unwrap();
//! assert_eq!(cycle, Some(vec![0, 1, 2, 3, 0]));
//! ```

use log::debug;

use crate::error::Result;
use crate::graph::Graph;

/// Searches for a Hamiltonian cycle starting and ending at `start`.
///
/// On success the returned path has `vertex_count + 1` entries: every vertex
/// exactly once, with `start` repeated at the end to close the cycle.
/// `Ok(None)` means no cycle was found, which is an ordinary outcome (e.g. a
/// tree, or a disconnected graph), not an error.
///
/// The graph is read-only here; all search state lives on the call stack,
/// which never grows deeper than `vertex_count` frames.
///
/// # Errors
/// [`crate::GraphError::IndexOutOfRange`] if `start >= g.vertex_count()`,
/// except on the zero-vertex graph, where any search trivially finds
/// nothing and returns `Ok(None)`.
pub fn hamiltonian_circuit(g: &Graph, start: usize) -> Result<Option<Vec<usize>>> {
    if g.vertex_count() == 0 {
        return Ok(None);
    }
    g.check_vertex(start)?;
    debug!(
        "hamiltonian_circuit: start={start}, vertices={}",
        g.vertex_count()
    );

    let mut visited = vec![false; g.vertex_count()];
    let mut path = Vec::with_capacity(g.vertex_count() + 1);
    if search(g, start, 1, &mut visited, &mut path) {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// One exploration frame: returns true iff a full cycle was completed below
/// this point, in which case `path` holds it and no state is rolled back.
fn search(g: &Graph, v: usize, depth: usize, visited: &mut [bool], path: &mut Vec<usize>) -> bool {
    path.push(v);
    visited[v] = true;

    if depth == g.vertex_count() {
        let start = path[0];
        if g.neighbors(v).contains(&start) {
            path.push(start);
            return true;
        }
    }

    for &u in g.neighbors(v) {
        if !visited[u] && search(g, u, depth + 1, visited, path) {
            return true;
        }
    }

    // backtrack
    visited[v] = false;
    path.pop();
    false
}
