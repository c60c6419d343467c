//! Benchmarks for conversion-table construction and lookup.
//!
//! This benchmark suite measures table construction at several sizes and the
//! per-query cost of the forward and reverse lookup tiers, quantifying what
//! the bounds check of the safe tier costs relative to the plain tier.
//!
//! # Test Data
//!
//! Inputs are duplicate-free shuffled subsets of a sparse identifier space,
//! generated from a fixed PCG seed so runs are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench conversion
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use renumber_core::{GenericIndex, IndexConversion, define_index};

define_index! {
    /// Dense position in a benchmark conversion table.
    struct DenseIndex;
}

type Table = IndexConversion<GenericIndex, DenseIndex>;

const SEED: u64 = 0x5eed_cafe_f00d_0001;
const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

/// Every fourth identifier of `[0, 4 * len)`, in shuffled order.
fn sparse_inputs(len: usize, rng: &mut Pcg64) -> Vec<GenericIndex> {
    let mut inputs: Vec<GenericIndex> = (0..len).map(|raw| GenericIndex::new(raw * 4)).collect();
    inputs.shuffle(rng);
    inputs
}

fn bench_construction(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(SEED);

    for len in SIZES {
        let inputs = sparse_inputs(len, &mut rng);
        c.bench_with_input(
            BenchmarkId::new("construct", len),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    let table = Table::from_indices(hint::black_box(inputs.clone()));
                    hint::black_box(table)
                });
            },
        );
    }
}

fn bench_forward_lookup(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(SEED);

    for len in SIZES {
        let inputs = sparse_inputs(len, &mut rng);
        let table = Table::from_indices(inputs.clone());
        let mut queries = inputs;
        queries.shuffle(&mut rng);

        c.bench_with_input(
            BenchmarkId::new("convert", len),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for &input in queries {
                        hint::black_box(table.convert(hint::black_box(input)));
                    }
                });
            },
        );

        c.bench_with_input(
            BenchmarkId::new("convert_safe", len),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for &input in queries {
                        hint::black_box(table.convert_safe(hint::black_box(input)));
                    }
                });
            },
        );
    }
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(SEED);

    for len in SIZES {
        let table = Table::from_indices(sparse_inputs(len, &mut rng));
        let mut queries: Vec<DenseIndex> = table.output_indices().iter().collect();
        queries.shuffle(&mut rng);

        c.bench_with_input(
            BenchmarkId::new("source_index", len),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for &out in queries {
                        hint::black_box(table.source_index(hint::black_box(out)));
                    }
                });
            },
        );
    }
}

criterion_group!(
    benches,
    bench_construction,
    bench_forward_lookup,
    bench_reverse_lookup
);
criterion_main!(benches);
