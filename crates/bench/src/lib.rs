use std::cmp::Ordering;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Key domain of the uniform double workload.
pub const UNIFORM_F64_MIN: f64 = 256.0;
pub const UNIFORM_F64_MAX: f64 = 65536.0;

/// Positions probed by [`is_sorted_sampled`] on large inputs.
const SORTED_CHECK_SAMPLES: usize = 4096;

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

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset from the input length.
pub fn apply_runtime_config_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 4096 {
        apply_small_runtime_config(group);
    } else if len <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

/// `len` doubles drawn uniformly from `[UNIFORM_F64_MIN, UNIFORM_F64_MAX)`.
pub fn uniform_f64<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len)
        .map(|_| rng.random_range(UNIFORM_F64_MIN..UNIFORM_F64_MAX))
        .collect()
}

/// An ascending run over the uniform domain with 1% of positions swapped.
pub fn nearly_sorted_f64<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    let step = (UNIFORM_F64_MAX - UNIFORM_F64_MIN) / len.max(1) as f64;
    let mut data: Vec<f64> = (0..len)
        .map(|i| UNIFORM_F64_MIN + i as f64 * step)
        .collect();
    if len > 1 {
        for _ in 0..(len / 100).max(1) {
            let a = rng.random_range(0..len);
            let b = rng.random_range(0..len);
            data.swap(a, b);
        }
    }
    data
}

/// Checks sortedness at evenly strided positions, exhaustively on small inputs.
pub fn is_sorted_sampled<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return true;
    }
    let stride = (data.len() / SORTED_CHECK_SAMPLES).max(1);
    let mut prev = 0;
    let mut i = stride;
    while i < data.len() {
        if compare(&data[prev], &data[i]) == Ordering::Greater {
            return false;
        }
        prev = i;
        i += stride;
    }
    compare(&data[prev], &data[data.len() - 1]) != Ordering::Greater
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_values_stay_in_domain() {
        let values = uniform_f64(&mut default_rng(), 1000);
        assert_eq!(values.len(), 1000);
        assert!(
            values
                .iter()
                .all(|&v| (UNIFORM_F64_MIN..UNIFORM_F64_MAX).contains(&v))
        );
    }

    #[test]
    fn seeded_rngs_are_reproducible() {
        let a = uniform_f64(&mut seeded_rng(7), 32);
        let b = uniform_f64(&mut seeded_rng(7), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn nearly_sorted_has_few_inversions() {
        let data = nearly_sorted_f64(&mut default_rng(), 10_000);
        let descents = data.windows(2).filter(|w| w[0] > w[1]).count();
        assert!(descents <= 4 * (10_000 / 100));
    }

    #[test]
    fn sampled_check() {
        let sorted: Vec<u32> = (0..100_000).collect();
        assert!(is_sorted_sampled(&sorted, |a, b| a.cmp(b)));
        assert!(is_sorted_sampled::<u32, _>(&[], |a, b| a.cmp(b)));

        let mut broken = sorted.clone();
        broken.swap(0, 99_999);
        assert!(!is_sorted_sampled(&broken, |a, b| a.cmp(b)));
    }
}
