//! Random graph generation for exercising both circuit finders.
//!
//! The construction guarantees connectivity by starting from the full ring
//! `0-1-..-(n-1)-0`, then inserts random distinct edges until a density
//! target is met, and finally patches odd-degree vertices so the graph is as
//! close to Eulerian as the density allows. A `HashSet` of normalized vertex
//! pairs keeps the result a simple graph.

use std::collections::HashSet;

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Generates a connected simple graph on `n` vertices with roughly
/// `density_percent` of the `n*(n-1)/2` possible edges.
///
/// The base ring makes a Hamiltonian circuit exist by construction; the
/// final parity pass gives every vertex even degree in almost all cases
/// (a patch edge is skipped when it already exists), so the graph is
/// usually Eulerian as well.
///
/// Generic over the RNG so callers can pass `thread_rng()` or a seeded
/// generator for reproducible output.
///
/// # Errors
/// [`GraphError::InvalidSize`] if `n < 3`; a ring needs at least three
/// vertices.
pub fn generate_graph<R: Rng>(n: usize, density_percent: f64, rng: &mut R) -> Result<Graph> {
    if n < 3 {
        return Err(GraphError::invalid_size(format!(
            "cannot generate a cyclic graph on {n} vertices, need at least 3"
        )));
    }

    let max_edges = n * (n - 1) / 2;
    let target = ((density_percent / 100.0) * max_edges as f64) as usize;

    let mut g = Graph::new(n);
    let mut existing: HashSet<(usize, usize)> = HashSet::with_capacity(target);

    // Base ring: connected, and both circuit kinds exist on it already.
    for i in 0..n {
        let j = (i + 1) % n;
        g.add_edge(i, j)?;
        existing.insert(normalize(i, j));
    }

    let dist = Uniform::from(0..n);
    while existing.len() < target {
        let u = dist.sample(rng);
        let v = dist.sample(rng);
        if u == v {
            continue;
        }
        let e = normalize(u, v);
        if existing.contains(&e) {
            continue;
        }
        g.add_edge(u, v)?;
        existing.insert(e);
    }

    // Parity pass: pair each odd-degree vertex with its ring successor,
    // unless that edge is already present.
    for i in 0..n {
        if g.degree(i) % 2 != 0 {
            let j = (i + 1) % n;
            let e = normalize(i, j);
            if !existing.contains(&e) {
                g.add_edge(i, j)?;
                existing.insert(e);
            }
        }
    }

    debug!(
        "generate_graph: n={n}, density={density_percent}%, edges={}",
        g.edge_count()
    );
    Ok(g)
}

fn normalize(u: usize, v: usize) -> (usize, usize) {
    (u.min(v), u.max(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eulerian_circuit, hamiltonian_circuit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    #[test]
    fn too_small_is_rejected() {
        let mut rng = seeded(0);
        for n in 0..3 {
            assert!(matches!(
                generate_graph(n, 50.0, &mut rng),
                Err(GraphError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn ring_backbone_is_always_present() {
        let mut rng = seeded(1);
        let g = generate_graph(10, 30.0, &mut rng).unwrap();
        for i in 0..10 {
            assert!(g.neighbors(i).contains(&((i + 1) % 10)));
        }
    }

    #[test]
    fn stays_a_simple_graph() {
        let mut rng = seeded(2);
        let g = generate_graph(12, 70.0, &mut rng).unwrap();
        for v in 0..12 {
            let mut nbrs: Vec<usize> = g.neighbors(v).to_vec();
            nbrs.sort_unstable();
            let before = nbrs.len();
            nbrs.dedup();
            assert_eq!(nbrs.len(), before, "parallel edge at vertex {v}");
            assert!(!nbrs.contains(&v), "self-loop at vertex {v}");
        }
    }

    #[test]
    fn generated_graph_is_hamiltonian() {
        // The ring backbone guarantees it regardless of the random edges.
        let mut rng = seeded(3);
        let g = generate_graph(9, 40.0, &mut rng).unwrap();
        let cycle = hamiltonian_circuit(&g, 0).unwrap();
        assert!(cycle.is_some());
    }

    #[test]
    fn even_degree_graphs_get_full_eulerian_walks() {
        let mut rng = seeded(4);
        for n in [6usize, 10, 14] {
            let mut g = generate_graph(n, 50.0, &mut rng).unwrap();
            if (0..n).all(|v| g.degree(v) % 2 == 0) {
                let walk = eulerian_circuit(&mut g, 0).unwrap();
                assert_eq!(walk.len(), g.edge_count() + 1);
                assert_eq!(walk[0], 0);
                assert_eq!(*walk.last().unwrap(), 0);
            }
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let a = generate_graph(8, 60.0, &mut seeded(7)).unwrap();
        let b = generate_graph(8, 60.0, &mut seeded(7)).unwrap();
        for v in 0..8 {
            assert_eq!(a.neighbors(v), b.neighbors(v));
        }
    }
}
