//! Benchmark for the per-frame simulation step.
//!
//! TARGET: a 10,000 particle burst advances well inside one frame budget
//!
//! Run with: cargo bench --package fanfare_core --bench simulation_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fanfare_core::{BurstConfig, BurstRng, Simulation, Vec2};

const BOUNDS: Vec2 = Vec2::new(1920.0, 1080.0);

fn benchmark_single_frame(c: &mut Criterion) {
    let config = BurstConfig {
        particle_count: 10_000,
        ticks: u32::MAX,
        ..BurstConfig::default()
    };
    let mut rng = BurstRng::from_seed(42);
    let mut sim = Simulation::spawn(&config, BOUNDS, &mut rng).expect("valid config");

    let mut group = c.benchmark_group("advance_10k");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("10k_particles_one_frame", |b| {
        b.iter(|| {
            sim.advance();
            black_box(sim.frame());
        });
    });
    group.finish();
}

fn benchmark_full_run(c: &mut Criterion) {
    let config = BurstConfig {
        particle_count: 1_000,
        ..BurstConfig::default()
    };

    c.bench_function("1k_particles_200_ticks", |b| {
        b.iter(|| {
            let mut rng = BurstRng::from_seed(42);
            let mut sim = Simulation::spawn(&config, BOUNDS, &mut rng).expect("valid config");
            while !sim.is_spent() {
                sim.advance();
            }
            black_box(sim.visible_count())
        });
    });
}

criterion_group!(benches, benchmark_single_frame, benchmark_full_run);
criterion_main!(benches);
