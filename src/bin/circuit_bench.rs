//! Console sweep that times both circuit finders on generated graphs.
//!
//! Mirrors a classic experiment: the Eulerian pass stays fast at every
//! size, while Hamiltonian backtracking can blow up on adversarial
//! instances. Sparse graphs are swept to a smaller n for that reason.

use std::time::Instant;

use rand::thread_rng;

use circuits::{eulerian_circuit, generate_graph, hamiltonian_circuit};

fn run(n: usize, density: f64) {
    println!("n = {n}, density = {density}%");

    let mut rng = thread_rng();
    let mut g = match generate_graph(n, density, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("  generation failed: {e}");
            return;
        }
    };

    g.reset_usage();
    let start = Instant::now();
    let euler = eulerian_circuit(&mut g, 0);
    let euler_us = start.elapsed().as_micros();
    match euler {
        Ok(walk) => println!(
            "  euler:    {euler_us} us, walk length {} ({} edges)",
            walk.len(),
            g.edge_count()
        ),
        Err(e) => println!("  euler:    failed: {e}"),
    }

    let start = Instant::now();
    let hamilton = hamiltonian_circuit(&g, 0);
    let hamilton_us = start.elapsed().as_micros();
    match hamilton {
        Ok(Some(_)) => println!("  hamilton: {hamilton_us} us, cycle found"),
        Ok(None) => println!("  hamilton: {hamilton_us} us, no cycle"),
        Err(e) => println!("  hamilton: failed: {e}"),
    }
    println!();
}

fn main() {
    // Sparse graphs leave the backtracker fewer shortcuts, so keep n small.
    for n in (5..=65).step_by(5) {
        run(n, 30.0);
    }
    for n in (5..=125).step_by(5) {
        run(n, 70.0);
    }
}
