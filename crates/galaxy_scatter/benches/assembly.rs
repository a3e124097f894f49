mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use galaxy_scatter::camera::OrbitConfig;
use galaxy_scatter::galaxy::assembler::GalaxyAssembler;
use galaxy_scatter::galaxy::config::GalaxyConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

const STARS_PER_ARM: [usize; 3] = [500, 1000, 5000];

fn assembly_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("galaxy/assemble");

    for &stars in &STARS_PER_ARM {
        let config = GalaxyConfig::default()
            .with_stars_per_arm(stars)
            .with_core_star_count(2000);
        let Ok(assembler) = GalaxyAssembler::try_new(config) else {
            continue;
        };
        group.throughput(common::star_throughput(8 * stars + 2000));

        let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ stars as u64);

        group.bench_with_input(BenchmarkId::from_parameter(stars), &stars, |b, _| {
            b.iter(|| {
                if let Ok(galaxy) = assembler.generate(&mut rng) {
                    black_box(galaxy.total_points());
                }
            });
        });
    }

    group.finish();
}

fn orbit_benches(c: &mut Criterion) {
    let orbit = OrbitConfig::default();
    c.bench_function("camera/orbit_default", |b| {
        b.iter(|| {
            if let Ok(frames) = orbit.frames() {
                black_box(frames.len());
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = common::galaxy_criterion();
    targets = assembly_benches, orbit_benches
}
criterion_main!(benches);
