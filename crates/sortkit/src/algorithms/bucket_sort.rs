//! Hash-bucket sort for keys with a known, roughly uniform domain.
//!
//! Expected O(n) when keys spread evenly over the buckets, degrading towards
//! O(n²) when they pile into a few.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::common;
use crate::SortError;

/// How many buckets to use and which bucket a key lands in.
///
/// `bucket_index` must be monotone in the sort order: a key that compares
/// greater must never map to a lower bucket.
pub trait BucketPolicy<T> {
    fn bucket_count(&self, len: usize) -> usize;
    fn bucket_index(&self, value: &T, bucket_count: usize) -> usize;
}

/// Domain and size tiers for [`UniformF64Buckets`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BucketParams {
    pub min: f64,
    pub max: f64,
    pub small_input_limit: usize,
    pub medium_input_limit: usize,
    pub small_bucket_count: usize,
    pub medium_bucket_count: usize,
    pub large_bucket_count: usize,
}

pub const DEFAULT_BUCKET_PARAMS: BucketParams = BucketParams {
    min: 256.0,
    max: 65536.0,
    small_input_limit: 2 * 512,
    medium_input_limit: 2 * 65536,
    small_bucket_count: 26 * 26,
    medium_bucket_count: 26 * 26 * 26,
    large_bucket_count: 26 * 26 * 26 * 26,
};

/// Linear hashing of doubles in `[min, max)` into equally wide buckets.
///
/// Keys outside the domain are clamped to the first or last bucket, and NaN
/// goes to whichever end its sign puts it under `f64::total_cmp`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformF64Buckets {
    params: BucketParams,
}

impl UniformF64Buckets {
    pub const fn new(params: BucketParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BucketParams {
        &self.params
    }
}

impl Default for UniformF64Buckets {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_PARAMS)
    }
}

impl<H: Borrow<f64>> BucketPolicy<H> for UniformF64Buckets {
    fn bucket_count(&self, len: usize) -> usize {
        let p = &self.params;
        if len < p.small_input_limit {
            p.small_bucket_count
        } else if len < p.medium_input_limit {
            p.medium_bucket_count
        } else {
            p.large_bucket_count
        }
    }

    fn bucket_index(&self, value: &H, bucket_count: usize) -> usize {
        let p = &self.params;
        let value: &f64 = value.borrow();
        let last = bucket_count.saturating_sub(1);
        // Matches `f64::total_cmp`: -NaN sorts below every number, +NaN above.
        if value.is_nan() {
            return if value.is_sign_negative() { 0 } else { last };
        }
        let scaled = bucket_count as f64 * (value - p.min) / (p.max - p.min);
        // Float-to-int casts saturate: negatives become 0.
        (scaled as usize).min(last)
    }
}

/// Scatters `data` into buckets chosen by `policy`, then gathers the buckets in
/// index order, insertion-sorting each one into place with `compare`.
///
/// Elements are gathered in arrival order within a bucket, so equal keys keep
/// their relative order.
pub fn bucket_sort<T, P, F>(data: &mut [T], policy: &P, mut compare: F) -> Result<(), SortError>
where
    T: Clone,
    P: BucketPolicy<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let bucket_count = policy.bucket_count(len).max(1);
    tracing::debug!(len, bucket_count, "bucket sort");

    let mut buckets: Vec<Vec<T>> = common::try_vec_with_capacity(bucket_count, "bucket table")?;
    buckets.resize_with(bucket_count, Vec::new);

    for item in data.iter() {
        let idx = policy.bucket_index(item, bucket_count).min(bucket_count - 1);
        let bucket = &mut buckets[idx];
        bucket
            .try_reserve(1)
            .map_err(|err| SortError::allocation("bucket entries", bucket.len() + 1, err))?;
        bucket.push(item.clone());
    }

    let mut pos = 0;
    for bucket in buckets {
        let low = pos;
        for item in bucket {
            data[pos] = item;
            common::insert_tail(data, low, pos, &mut compare);
            pos += 1;
        }
    }
    debug_assert_eq!(pos, len);
    Ok(())
}
