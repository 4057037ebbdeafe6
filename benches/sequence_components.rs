use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fortescue::prelude::*;

fn unbalanced_terminal(step: usize) -> Terminal {
    let skew = step as f64 * 0.1;
    let voltage = ThreePhase::new(
        Phasor::new(66_395.0, 0.0),
        Phasor::new(65_000.0 + skew, 241.0),
        Phasor::new(67_100.0, 119.5 - skew),
    );
    let current = ThreePhase::new(
        Phasor::new(100.0, 30.0 + skew),
        Phasor::new(92.0, 268.0),
        Phasor::new(108.0, 151.0),
    );
    Terminal::new(voltage, current)
}

fn bench_sequence_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("fortescue");
    let terminals: Vec<Terminal> = (0..1_000).map(unbalanced_terminal).collect();

    group.bench_function(BenchmarkId::new("sequence_components", terminals.len()), |b| {
        b.iter(|| {
            for term in &terminals {
                black_box(term.voltage().sequence_components());
            }
        })
    });
    group.bench_function(BenchmarkId::new("power", terminals.len()), |b| {
        b.iter(|| {
            for term in &terminals {
                black_box(term.power());
            }
        })
    });
    group.bench_function(BenchmarkId::new("negative_sequence_impedance", terminals.len()), |b| {
        b.iter(|| {
            for term in &terminals {
                black_box(term.negative_sequence_impedance());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sequence_components);
criterion_main!(benches);
