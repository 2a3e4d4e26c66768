//! Undirected graph model shared by the Eulerian and Hamiltonian finders.
//!
//! Adjacency is stored as per-vertex neighbor lists; neighbor order is
//! insertion order and is semantically significant, because both finders
//! scan neighbors in that order and return the first circuit they reach.
//! Alongside the adjacency lists the graph owns a symmetric `n x n` boolean
//! relation marking which edges the Eulerian finder has already consumed.

use crate::error::{GraphError, Result};

/// An undirected graph over vertices `0..n`, with per-edge usage flags for
/// Eulerian traversal.
///
/// Parallel edges and self-loops are representable (repeated
/// [`add_edge`](Graph::add_edge) calls simply append more adjacency entries)
/// and are neither deduplicated nor rejected. Callers that need simple-graph
/// semantics must not insert them.
///
/// # Example
/// ```
/// use circuits::Graph;
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
/// g.add_edge(2, 0).unwrap();
/// assert_eq!(g.edge_count(), 3);
/// assert_eq!(g.neighbors(1), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    adj: Vec<Vec<usize>>,
    used: Vec<Vec<bool>>,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges. All usage flags start
    /// cleared.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            adj: vec![Vec::new(); n],
            used: vec![vec![false; n]; n],
        }
    }

    /// Builds a graph from a 0/1 adjacency matrix.
    ///
    /// Each nonzero entry in the upper triangle becomes one undirected edge;
    /// a nonzero diagonal entry becomes a self-loop. The lower triangle is
    /// ignored so a symmetric matrix does not double its edges.
    ///
    /// # Errors
    /// [`GraphError::InvalidSize`] if any row's length differs from the
    /// number of rows.
    pub fn from_adjacency_matrix(rows: &[Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(GraphError::invalid_size(format!(
                "adjacency matrix is not square: {n} rows but a row of width {}",
                row.len()
            )));
        }

        let mut g = Graph::new(n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate().skip(i) {
                if cell != 0 {
                    g.add_edge(i, j)?;
                }
            }
        }
        Ok(g)
    }

    /// Adds an undirected edge between `u` and `v`: `v` is appended to `u`'s
    /// neighbor list and `u` to `v`'s, and both usage flags are cleared.
    /// Calling this twice with the same pair creates a parallel edge.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if either endpoint is out of range;
    /// the graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.used[u][v] = false;
        self.used[v][u] = false;
        Ok(())
    }

    /// Clears every edge-usage flag.
    ///
    /// The Eulerian finder consumes these flags but never resets them, so
    /// this must be called between independent [`crate::eulerian_circuit`]
    /// runs on the same graph. Stale flags make a rerun return a degenerate
    /// walk.
    pub fn reset_usage(&mut self) {
        for row in &mut self.used {
            row.fill(false);
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of undirected edges (adjacency entries counted once per edge;
    /// a self-loop contributes two entries on one vertex and counts as one
    /// edge here).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Degree of `v`, counting multiplicity of parallel edges.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Neighbor list of `v` in insertion order.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.n {
            return Err(GraphError::IndexOutOfRange {
                index: v,
                len: self.n,
            });
        }
        Ok(())
    }

    pub(crate) fn edge_used(&self, u: usize, v: usize) -> bool {
        self.used[u][v]
    }

    /// Marks both directions of `(u, v)` consumed.
    pub(crate) fn mark_edge_used(&mut self, u: usize, v: usize) {
        self.used[u][v] = true;
        self.used[v][u] = true;
    }
}
