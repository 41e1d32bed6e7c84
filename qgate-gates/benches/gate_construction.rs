use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qgate_core::QubitCount;
use qgate_gates::{indexed, single, structural};

fn benchmark_tensor_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_expansion");

    for n in [1usize, 2, 4, 6, 8] {
        let qubits = QubitCount::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("H", n), &qubits, |b, &qubits| {
            b.iter(|| black_box(single::hadamard(qubits)));
        });
    }

    group.finish();
}

fn benchmark_indexed_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_gates");

    for n in [2usize, 4, 6, 8] {
        let qubits = QubitCount::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("CNOT", n), &qubits, |b, &qubits| {
            b.iter(|| black_box(indexed::cnot(qubits, 0, n - 1)));
        });
        group.bench_with_input(BenchmarkId::new("CZ", n), &qubits, |b, &qubits| {
            b.iter(|| black_box(indexed::cz(qubits, 0, n - 1)));
        });
    }

    group.finish();
}

fn benchmark_structural_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural_gates");

    for n in [2usize, 4, 6, 8] {
        let qubits = QubitCount::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("SWAP", n), &qubits, |b, &qubits| {
            b.iter(|| black_box(structural::swap(qubits)));
        });
    }

    group.bench_function("U", |b| {
        b.iter(|| black_box(single::u(black_box(0.1), 0.2, 0.3, 0.4)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tensor_expansion,
    benchmark_indexed_gates,
    benchmark_structural_gates
);
criterion_main!(benches);
