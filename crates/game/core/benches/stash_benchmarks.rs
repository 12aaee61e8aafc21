//! Performance benchmarks for stash operations.
//!
//! Run with: cargo bench --package froglin-core
//!
//! This will generate HTML reports in target/criterion/

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use froglin_core::{Field, Hasher, SparseMerkleTree};

fn populated(hasher: &Hasher, leaves: u64) -> SparseMerkleTree {
    let mut tree = SparseMerkleTree::new(*hasher, 254);
    for i in 1..=leaves {
        let value = Field::from(i);
        tree.add(hasher.hash_one(value), value)
            .expect("distinct keys should insert");
    }
    tree
}

fn bench_poseidon2(c: &mut Criterion) {
    let hasher = Hasher::default();
    let inputs = [Field::from(1u64), Field::from(2u64), Field::from(3u64)];
    c.bench_function("poseidon2_hash_3", |b| {
        b.iter(|| black_box(hasher.hash(black_box(&inputs))))
    });
}

fn bench_stash_add(c: &mut Criterion) {
    let hasher = Hasher::default();
    let mut group = c.benchmark_group("stash_add");

    for leaves in [0u64, 16, 256].iter() {
        let tree = populated(&hasher, *leaves);
        let value = Field::from(1_000_000u64);
        let key = hasher.hash_one(value);

        group.bench_with_input(BenchmarkId::from_parameter(leaves), leaves, |b, _| {
            b.iter(|| {
                let mut tree = tree.clone();
                tree.add(black_box(key), value).expect("fresh key");
                black_box(tree.root())
            });
        });
    }

    group.finish();
}

fn bench_stash_proof(c: &mut Criterion) {
    let hasher = Hasher::default();
    let mut group = c.benchmark_group("stash_proof");

    for leaves in [16u64, 256].iter() {
        let tree = populated(&hasher, *leaves);
        let key = hasher.hash_one(Field::from(1u64));

        group.bench_with_input(BenchmarkId::from_parameter(leaves), leaves, |b, _| {
            b.iter(|| {
                let proof = tree.create_proof(black_box(key)).expect("proof");
                black_box(proof.verify(&hasher))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_poseidon2, bench_stash_add, bench_stash_proof);
criterion_main!(benches);
