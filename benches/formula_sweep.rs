use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mesophys::prelude::*;

fn bench_josephson(c: &mut Criterion) {
    let mut group = c.benchmark_group("josephson_junction");
    for n in [1_001usize, 100_001] {
        let jj = JosephsonJunction::new(1.0, 0.5, phase_period(n));
        group.bench_function(BenchmarkId::new("inductance", n), |b| {
            b.iter(|| jj.josephson_inductance())
        });
    }
    group.finish();
}

fn bench_nanowire_sweep(c: &mut Criterion) {
    let freqs = linspace(1.0e6, 1.0e10, 10_000);
    c.bench_function("nanowire_sweep", |b| {
        b.iter(|| {
            freqs
                .iter()
                .filter_map(|&f| {
                    HybridNW::from_slices(f, &[1e-7, 1.5e-7], &[0.0, 1.0], &[1.0, 0.5]).ok()
                })
                .map(|nw| nw.impedance())
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_josephson, bench_nanowire_sweep);
criterion_main!(benches);
