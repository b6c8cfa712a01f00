//! Deterministic linear-time selection (Blum, Floyd, Pratt, Rivest, Tarjan).
//!
//! `median_of_medians` doubles as the pivot chooser for quicksort.

use std::cmp::Ordering;

use super::elementary::insertion_sort_by;

/// Size of the groups whose medians feed the recursive pivot search.
pub const BFPRT_GROUP_SIZE: usize = 5;

/// Lomuto partition around `data[pivot]`.
///
/// Elements strictly less than the pivot end up to its left, everything else
/// (ties included) to its right. Returns the pivot's final index, or 0 for an
/// empty slice.
///
/// # Panics
///
/// Panics if `data` is non-empty and `pivot >= data.len()`.
pub fn partition<T, F>(data: &mut [T], pivot: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(last) = data.len().checked_sub(1) else {
        return 0;
    };
    data.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if compare(&data[i], &data[last]) == Ordering::Less {
            data.swap(i, store);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}

/// Picks the median of the group medians as a pivot and returns its index.
///
/// Reorders `data`: each full group of five is sorted in place and its median
/// is moved to the front. A trailing partial group takes no part. Ranges
/// shorter than one group are sorted outright and their median index returned.
pub fn median_of_medians<T, F>(data: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < BFPRT_GROUP_SIZE {
        insertion_sort_by(data, compare);
        return ((len + 1) >> 1).saturating_sub(1);
    }

    let mut medians = 0;
    let mut start = 0;
    while start + BFPRT_GROUP_SIZE <= len {
        let group = &mut data[start..start + BFPRT_GROUP_SIZE];
        insertion_sort_by(group, compare);
        data.swap(medians, start + BFPRT_GROUP_SIZE / 2);
        medians += 1;
        start += BFPRT_GROUP_SIZE;
    }

    kth_index(&mut data[..medians], (medians + 1) >> 1, compare)
}

/// Index of the `k`-th smallest element (1-indexed) after reordering `data`
/// so that it sits in its sorted position. Worst case O(n), repeated keys
/// included.
///
/// `k` must lie in `1..=data.len()` (checked in debug builds); a range
/// shorter than two yields 0.
pub fn kth_index<T, F>(data: &mut [T], mut k: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(
        data.is_empty() || (1..=data.len()).contains(&k),
        "rank {k} outside 1..={}",
        data.len()
    );

    let mut begin = 0;
    let mut end = data.len();

    while end - begin >= 2 {
        let range = &mut data[begin..end];
        let pivot = median_of_medians(range, compare);
        let split = partition(range, pivot, compare);
        let equal_end = gather_equal(range, split, compare);

        // range[..split] < pivot, range[split..equal_end] == pivot
        if k <= split {
            end = begin + split;
        } else if k <= equal_end {
            return begin + k - 1;
        } else {
            begin += equal_end;
            k -= equal_end;
        }
    }

    begin
}

/// Moves every element of `data[split + 1..]` equal to the pivot at `split`
/// next to it. Returns the end of the equal run.
fn gather_equal<T, F>(data: &mut [T], split: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut equal_end = split + 1;
    for i in split + 1..data.len() {
        if compare(&data[i], &data[split]) == Ordering::Equal {
            data.swap(i, equal_end);
            equal_end += 1;
        }
    }
    equal_end
}

/// The `k`-th element (1-indexed) under `compare`, found in worst-case linear
/// time. Reorders `data`; `None` when `k` is outside `1..=data.len()`.
pub fn select_kth<T, F>(data: &mut [T], k: usize, mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = select_kth_index(data, k, &mut compare)?;
    Some(&data[index])
}

/// Like [`select_kth`], returning the position instead of the element.
pub fn select_kth_index<T, F>(data: &mut [T], k: usize, mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 || k > data.len() {
        return None;
    }
    Some(kth_index(data, k, &mut compare))
}
