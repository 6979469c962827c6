//! Union-Find and Kruskal benchmarks
//!
//! Measures:
//! - Random unions and finds at several forest sizes
//! - Command replay throughput
//! - Kruskal on random sparse graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use dsforest::{
    kruskal, replay_commands, Command, EdgeList, KruskalConfig, NodeId, UnionFind, Weight,
};

fn random_pairs(n: usize, count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                NodeId::from(rng.gen_range(0..n)),
                NodeId::from(rng.gen_range(0..n)),
            )
        })
        .collect()
}

/// Benchmark unions followed by finds
fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find/random");

    for &n in &[1_000usize, 10_000, 100_000] {
        let pairs = random_pairs(n, n, 1);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("union", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = UnionFind::new(n);
                for &(x, y) in pairs {
                    uf.union(x, y, Weight(1));
                }
                black_box(uf.num_components());
            });
        });

        group.bench_with_input(BenchmarkId::new("union_then_find", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = UnionFind::new(n);
                for &(x, y) in pairs {
                    uf.union(x, y, Weight(1));
                }
                for &(x, _) in pairs {
                    black_box(uf.find(x));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark command stream replay
fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find/replay");
    let n = 50_000;
    let mut rng = StdRng::seed_from_u64(2);

    let commands: Vec<Command> = (0..n)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Command::Unite {
                    a: NodeId::from(rng.gen_range(0..n)),
                    b: NodeId::from(rng.gen_range(0..n)),
                    weight: Weight(rng.gen_range(0..100)),
                }
            } else {
                Command::Query {
                    x: NodeId::from(rng.gen_range(0..n)),
                }
            }
        })
        .collect();

    group.throughput(Throughput::Elements(commands.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| black_box(replay_commands(n, &commands).unwrap()));
    });

    group.finish();
}

/// Benchmark Kruskal on sparse random graphs
fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal/sparse");

    for &n in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(3);
        let triples: Vec<(u32, u32, u64)> = (0..n * 4)
            .map(|_| {
                (
                    rng.gen_range(0..n as u32),
                    rng.gen_range(0..n as u32),
                    rng.gen_range(1..1_000_000),
                )
            })
            .collect();
        let edges = EdgeList::from_edges(n, &triples);
        let config = KruskalConfig::default();

        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| black_box(kruskal(edges, &config).unwrap().total_weight));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_union_find, bench_replay, bench_kruskal);
criterion_main!(benches);
