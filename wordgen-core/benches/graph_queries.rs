//! Benchmarks for transition graph construction and queries.
//!
//! The input interleaves the word "0" with random numerals, so the "0"
//! node accumulates a successor set that grows with the problem size.
//! That makes it the worst-case seed for ranking and sampling.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordgen_core::model::graph::TransitionGraph;

/// Problem sizes, in pairs of ingested words.
const PROBLEM_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Builds the synthetic input sequence for a given problem size.
fn build_input(n: usize) -> Vec<String> {
	let mut rng = StdRng::seed_from_u64(49);
	let mut words = Vec::with_capacity(2 * n);
	for _ in 0..n {
		words.push("0".to_owned());
		words.push(rng.random_range(0..n).to_string());
	}
	words
}

fn bench_construction(c: &mut Criterion) {
	let mut group = c.benchmark_group("construction");
	for &n in PROBLEM_SIZES {
		let words = build_input(n);
		group.throughput(Throughput::Elements(words.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(n), &words, |b, words| {
			b.iter(|| TransitionGraph::new(black_box(words)));
		});
	}
	group.finish();
}

fn bench_top_successors(c: &mut Criterion) {
	let mut group = c.benchmark_group("top_successors");
	for &n in PROBLEM_SIZES {
		let graph = TransitionGraph::new(build_input(n));
		group.throughput(Throughput::Elements(n as u64));
		group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
			b.iter(|| graph.top_successors(black_box("0"), n).unwrap());
		});
	}
	group.finish();
}

fn bench_greedy_chain(c: &mut Criterion) {
	let mut group = c.benchmark_group("greedy_chain");
	for &n in PROBLEM_SIZES {
		let graph = TransitionGraph::new(build_input(n));
		group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
			b.iter(|| graph.generate_greedy_chain(black_box("0"), 100).unwrap());
		});
	}
	group.finish();
}

fn bench_weighted_chain(c: &mut Criterion) {
	let mut group = c.benchmark_group("weighted_chain");
	for &n in PROBLEM_SIZES {
		let graph = TransitionGraph::new(build_input(n));
		group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
			let mut rng = StdRng::seed_from_u64(7);
			b.iter(|| graph.generate_weighted_chain(black_box("0"), 100, &mut rng).unwrap());
		});
	}
	group.finish();
}

criterion_group!(
	benches,
	bench_construction,
	bench_top_successors,
	bench_greedy_chain,
	bench_weighted_chain
);
criterion_main!(benches);
