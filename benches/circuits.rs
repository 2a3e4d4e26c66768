use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use circuits::{eulerian_circuit, generate_graph, hamiltonian_circuit, Graph};

fn seeded_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    generate_graph(n, density, &mut rng).expect("bench graph")
}

fn bench_eulerian(c: &mut Criterion) {
    let base = seeded_graph(60, 70.0, 42);
    c.bench_function("eulerian_circuit n=60 d=70", |b| {
        b.iter(|| {
            let mut g = base.clone();
            g.reset_usage();
            eulerian_circuit(black_box(&mut g), 0).unwrap()
        })
    });
}

fn bench_hamiltonian(c: &mut Criterion) {
    // Dense graphs keep the backtracker close to its best case.
    let g = seeded_graph(30, 70.0, 42);
    c.bench_function("hamiltonian_circuit n=30 d=70", |b| {
        b.iter(|| hamiltonian_circuit(black_box(&g), 0).unwrap())
    });
}

criterion_group!(benches, bench_eulerian, bench_hamiltonian);
criterion_main!(benches);
