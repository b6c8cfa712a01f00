use std::cmp::Ordering;

use super::common;
use crate::SortError;

/// Stable top-down merge sort. O(n log n) time, one full-length scratch copy.
///
/// The scratch copy and `data` swap roles at every recursion level, so no
/// per-level copying happens.
pub fn merge_sort<T, F>(data: &mut [T], mut compare: F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mut scratch = common::try_clone_slice(data, "merge sort scratch")?;
    tracing::trace!(len, "merge sort scratch ready");
    merge_sort_recursive(&mut scratch, data, 0, len, &mut compare);
    Ok(())
}

// Sorts src[left..right] into dst[left..right]; both must hold the same elements.
fn merge_sort_recursive<T, F>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    compare: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if right - left <= 1 {
        return;
    }

    let mid = left + ((right - left) >> 1);

    merge_sort_recursive(dst, src, left, mid, compare);
    merge_sort_recursive(dst, src, mid, right, compare);

    merge_ranges(src, dst, left, mid, right, compare);
}

#[inline]
fn merge_ranges<T, F>(src: &[T], dst: &mut [T], left: usize, mid: usize, right: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if compare(&src[i], &src[j]) != Ordering::Greater {
            dst[k] = src[i].clone();
            i += 1;
        } else {
            dst[k] = src[j].clone();
            j += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..right].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..right].clone_from_slice(&src[j..right]);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::compare::{cmp_f64, cmp_f64_rev};

    #[test]
    fn sorts_small_scenario() {
        let values = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
        let mut asc: Vec<&f64> = values.iter().collect();
        let mut desc = asc.clone();
        merge_sort(&mut asc, cmp_f64).unwrap();
        merge_sort(&mut desc, cmp_f64_rev).unwrap();
        assert_eq!(
            asc.iter().map(|h| **h).collect::<Vec<_>>(),
            [1.0, 2.0, 3.0, 5.0, 8.0, 9.0]
        );
        assert_eq!(
            desc.iter().map(|h| **h).collect::<Vec<_>>(),
            [9.0, 8.0, 5.0, 3.0, 2.0, 1.0]
        );
    }

    #[test]
    fn keeps_equal_keys_in_arrival_order() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2usize, 7, 64, 1000] {
            let input: Vec<(u8, usize)> = (0..size).map(|i| (rng.random_range(0..5), i)).collect();
            let mut data = input.clone();
            merge_sort(&mut data, |a, b| a.0.cmp(&b.0)).unwrap();
            let mut expected = input;
            expected.sort_by_key(|&(key, _)| key);
            assert_eq!(data, expected, "size={size}");
        }
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut empty: Vec<u32> = Vec::new();
        merge_sort(&mut empty, |a, b| a.cmp(b)).unwrap();
        assert!(empty.is_empty());

        let mut one = vec![42u32];
        merge_sort(&mut one, |a, b| a.cmp(b)).unwrap();
        assert_eq!(one, [42]);
    }

    #[test]
    fn merge_prefers_left_run_on_ties() {
        let src = [(1, 'a'), (3, 'a'), (1, 'b'), (3, 'b')];
        let mut dst = src;
        merge_ranges(&src, &mut dst, 0, 2, 4, &mut |a: &(i32, char), b: &(i32, char)| {
            a.0.cmp(&b.0)
        });
        assert_eq!(dst, [(1, 'a'), (1, 'b'), (3, 'a'), (3, 'b')]);
    }
}
