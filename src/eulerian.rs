//! # Eulerian Circuit Finder
//!
//! Recursive Hierholzer-style single pass: from the current vertex, follow
//! the first unused edge in adjacency order, marking both directions
//! consumed, and append each vertex to the walk in post-order once its edges
//! are exhausted. The post-order sequence is the circuit reversed, so the
//! entry point reverses it before returning.
//!
//! No feasibility check is performed. On a connected graph where every
//! vertex has even degree the result is a closed walk using every edge
//! exactly once; otherwise the walk is partial (it covers only the edges
//! reachable from the start through unused edges) and may not close. That
//! partial result is a documented limitation, not an error.
//!
//! ## Example
//! ```
//! use circuits::{eulerian_circuit, Graph};
//!
//! // A 4-cycle: every vertex has degree 2, so an Eulerian circuit exists.
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//! g.add_edge(3, 0).unwrap();
//!
//! let walk = eulerian_circuit(&mut g, 0).unwrap();
//! assert_eq!(walk, vec![0, 1, 2, 3, 0]);
//! ```

use log::debug;

use crate::error::Result;
use crate::graph::Graph;

/// Finds an Eulerian circuit starting (and, on an Eulerian graph, ending) at
/// `start`, consuming the graph's edge-usage flags.
///
/// The caller owns the reset contract: every usage flag must be clear when
/// this is called. Call [`Graph::reset_usage`] between independent runs on
/// the same graph; rerunning without a reset finds no unused edges and
/// returns the degenerate walk `[start]`.
///
/// Runs in O(V + E); recursion depth is bounded by the edge count.
///
/// # Errors
/// [`crate::GraphError::IndexOutOfRange`] if `start >= g.vertex_count()`,
/// which includes any start vertex on an empty graph.
pub fn eulerian_circuit(g: &mut Graph, start: usize) -> Result<Vec<usize>> {
    g.check_vertex(start)?;
    debug!(
        "eulerian_circuit: start={start}, vertices={}, edges={}",
        g.vertex_count(),
        g.edge_count()
    );

    let mut walk = Vec::with_capacity(g.edge_count() + 1);
    visit(g, start, &mut walk);
    // visit() emits the circuit in reverse order (post-order append).
    walk.reverse();
    Ok(walk)
}

fn visit(g: &mut Graph, v: usize, walk: &mut Vec<usize>) {
    let mut i = 0;
    while i < g.degree(v) {
        let u = g.neighbors(v)[i];
        if !g.edge_used(v, u) {
            g.mark_edge_used(v, u);
            visit(g, u, walk);
        }
        i += 1;
    }
    walk.push(v);
}
