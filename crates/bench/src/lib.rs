use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 20;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 150;
const SMALL_RUNTIME_MEASURE_MS: u64 = 300;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 12;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 400;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 900;
const RNG_SEED: u64 = 0x5EED_05E7;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Dense keys `0..n` in a seed-stable shuffled order.
pub fn shuffled_keys(n: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut default_rng());
    keys
}

/// Seed-stable sparse keys, reproducible per `(tag, n)` pair.
pub fn sparse_keys(tag: u64, n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(RNG_SEED ^ tag);
    (0..n).map(|_| rng.random()).collect()
}
