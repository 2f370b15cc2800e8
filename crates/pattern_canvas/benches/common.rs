#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use pattern_canvas::prelude::*;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Element counts shared by the generation and scheduling benches.
pub const COUNTS: [usize; 4] = [100, 1_000, 10_000, 100_000];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Full-HD settings drawing `count` elements with `kind` and its defaults.
pub fn hd_settings(kind: MethodKind, count: usize, shape: Shape) -> Settings {
    Settings::new(1920, 1080)
        .with_count(count)
        .with_shape(shape)
        .with_method(default_method(kind))
}
