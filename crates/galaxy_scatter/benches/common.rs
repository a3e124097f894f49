use std::time::Duration;

use criterion::{Criterion, Throughput};

// A full default galaxy is about 10k points, so short windows still give stable samples.
pub const SAMPLE_SIZE: usize = 40;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn galaxy_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
        .noise_threshold(0.03)
}

/// Throughput in generated stars; empty workloads still report one element.
pub fn star_throughput(stars: usize) -> Throughput {
    Throughput::Elements(stars.max(1) as u64)
}
