//! Quicksort with pluggable pivot selection.
//!
//! The default pivot is the BFPRT median of medians, which bounds the
//! recursion to O(log n) levels and the total work to O(n log n) at the price
//! of a larger constant factor. Both partition scans stop on keys equal to the
//! pivot, so runs of repeated keys split evenly instead of peeling off one
//! element per step.

use std::cmp::Ordering;

use rand::Rng;

use super::bfprt;

/// Chooses the pivot index for one partitioning step. May reorder `data`.
pub trait PivotSelector<T> {
    fn select<F>(&mut self, data: &mut [T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// True median of medians. Worst-case linear per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MedianOfMedians;

impl<T> PivotSelector<T> for MedianOfMedians {
    #[inline]
    fn select<F>(&mut self, data: &mut [T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        bfprt::median_of_medians(data, compare)
    }
}

/// Median of three uniformly drawn positions. No worst-case guarantee.
#[derive(Clone, Debug)]
pub struct RandomMedianOfThree<R> {
    rng: R,
}

impl<R: Rng> RandomMedianOfThree<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<T, R: Rng> PivotSelector<T> for RandomMedianOfThree<R> {
    fn select<F>(&mut self, data: &mut [T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = data.len();
        if len < 3 {
            return 0;
        }

        let picks: [usize; 3] = std::array::from_fn(|_| self.rng.random_range(0..len));
        let view: &[T] = data;
        let [a, b, c] = picks.map(|i| &view[i]);

        // x is a median when it is neither strictly below nor strictly above both others.
        let sign = |o: Ordering| o as i8;
        if sign(compare(a, b)) * sign(compare(a, c)) <= 0 {
            picks[0]
        } else if sign(compare(b, a)) * sign(compare(b, c)) <= 0 {
            picks[1]
        } else {
            picks[2]
        }
    }
}

/// Sorts `data` with quicksort around a median-of-medians pivot. Not stable.
pub fn quick_sort<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_with(data, &mut MedianOfMedians, compare);
}

/// Sorts `data` with quicksort, taking pivots from `selector`.
pub fn quick_sort_with<T, P, F>(data: &mut [T], selector: &mut P, mut compare: F)
where
    P: PivotSelector<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(
        len = data.len(),
        selector = std::any::type_name::<P>(),
        "quick sort"
    );
    quick_sort_recursive(data, selector, &mut compare);
}

fn quick_sort_recursive<T, P, F>(mut data: &mut [T], selector: &mut P, compare: &mut F)
where
    P: PivotSelector<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    while data.len() > 1 {
        let pivot = selector.select(data, compare);
        let split = partition_hoare(data, pivot, compare);

        let (left, rest) = data.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive(left, selector, compare);
            data = right;
        } else {
            quick_sort_recursive(right, selector, compare);
            data = left;
        }
    }
}

/// Two-pointer partition with the pivot parked at the front. Returns the
/// pivot's final index; everything left of it compares not greater, everything
/// right of it not less.
fn partition_hoare<T, F>(data: &mut [T], pivot: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.swap(0, pivot);

    let last = data.len() - 1;
    let mut low = 0;
    let mut high = data.len();
    loop {
        low += 1;
        while low < last && compare(&data[low], &data[0]) == Ordering::Less {
            low += 1;
        }
        // data[0] is the pivot, so this stops at 0 at the latest.
        high -= 1;
        while compare(&data[high], &data[0]) == Ordering::Greater {
            high -= 1;
        }
        if low >= high {
            break;
        }
        data.swap(low, high);
    }

    data.swap(0, high);
    high
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::compare::{cmp_f64, cmp_f64_rev};

    fn ascending(a: &u64, b: &u64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn sorts_small_scenario() {
        let values = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
        let mut asc: Vec<&f64> = values.iter().collect();
        let mut desc = asc.clone();
        quick_sort(&mut asc, cmp_f64);
        quick_sort(&mut desc, cmp_f64_rev);
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
    fn hoare_partition_places_pivot() {
        let mut data = vec![6u64, 3, 9, 1, 6, 8, 2];
        let at = partition_hoare(&mut data, 0, &mut ascending);
        assert_eq!(data[at], 6);
        assert!(data[..at].iter().all(|&x| x <= 6));
        assert!(data[at + 1..].iter().all(|&x| x >= 6));
    }

    #[test]
    fn both_selectors_match_std() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2usize, 3, 8, 31, 64, 127, 1000] {
            let input: Vec<u64> = (0..size).map(|_| rng.random()).collect();
            let mut expected = input.clone();
            expected.sort_unstable();

            let mut bfprt = input.clone();
            quick_sort(&mut bfprt, ascending);
            assert_eq!(bfprt, expected, "median of medians, size={size}");

            let mut sampled = input.clone();
            let mut selector = RandomMedianOfThree::new(StdRng::seed_from_u64(size as u64));
            quick_sort_with(&mut sampled, &mut selector, ascending);
            assert_eq!(sampled, expected, "random median of three, size={size}");
        }
    }

    #[test]
    fn handles_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let input: Vec<u64> = (0..2048).map(|_| (rng.random::<u64>() % 16) * 17).collect();
        let mut data = input.clone();
        quick_sort(&mut data, ascending);
        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(data, expected);

        let mut same = vec![7u64; 300];
        quick_sort(&mut same, ascending);
        assert!(same.iter().all(|&x| x == 7));
    }

    fn counted_quick_sort(data: &mut [u64]) -> u64 {
        let mut calls = 0u64;
        quick_sort(data, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        calls
    }

    #[test]
    fn equal_keys_sort_in_n_log_n() {
        let n = 100_000;
        let mut data = vec![7u64; n];
        let calls = counted_quick_sort(&mut data);
        assert!(data.iter().all(|&x| x == 7));
        assert!(calls <= 256 * n as u64, "calls={calls}");
    }

    #[test]
    fn two_distinct_keys_sort_in_n_log_n() {
        let n = 100_000;
        let mut rng = StdRng::seed_from_u64(0x2_4E15);
        let input: Vec<u64> = (0..n).map(|_| rng.random_range(0..2) * 9).collect();
        let mut data = input.clone();
        let calls = counted_quick_sort(&mut data);
        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(data, expected);
        assert!(calls <= 256 * n as u64, "calls={calls}");
    }

    #[test]
    fn hoare_partition_splits_equal_keys_evenly() {
        let mut data = vec![5u64; 101];
        let at = partition_hoare(&mut data, 0, &mut ascending);
        assert!((40..=60).contains(&at), "at={at}");
    }

    #[test]
    fn random_pivot_stays_in_range() {
        let mut selector = RandomMedianOfThree::new(StdRng::seed_from_u64(1));
        let mut data: Vec<u64> = (0..50).collect();
        for _ in 0..100 {
            let idx = PivotSelector::select(&mut selector, &mut data, &mut ascending);
            assert!(idx < data.len());
        }
        let mut tiny = vec![4u64, 1];
        assert_eq!(selector.select(&mut tiny, &mut ascending), 0);
    }
}
