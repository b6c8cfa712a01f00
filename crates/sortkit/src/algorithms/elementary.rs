//! Quadratic baselines: insertion, selection and bubble sort.
//!
//! Insertion sort doubles as the small-group sorter inside the median of
//! medians selector.

use std::cmp::Ordering;

use super::common;

/// Stable insertion sort. O(n) on sorted input, O(n²) otherwise.
pub fn insertion_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_by(data, &mut compare);
}

#[inline]
pub(crate) fn insertion_sort_by<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        common::insert_tail(data, 0, i, compare);
    }
}

/// Selection sort: grows a sorted suffix by swapping the greatest element of
/// the unsorted prefix into place. Always O(n²), not stable.
pub fn selection_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for end in (1..data.len()).rev() {
        let mut max_pos = 0;
        for j in 1..=end {
            if compare(&data[j], &data[max_pos]) == Ordering::Greater {
                max_pos = j;
            }
        }
        data.swap(end, max_pos);
    }
}

/// Stable bubble sort that stops after the first pass without swaps.
pub fn bubble_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort over a byte buffer viewed as consecutive `width`-byte records.
///
/// Records are moved as whole blocks; trailing bytes that do not fill a record
/// are left untouched.
pub fn insertion_sort_blocks<F>(bytes: &mut [u8], width: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if width == 0 {
        return;
    }
    let count = bytes.len() / width;

    for i in 1..count {
        let mut j = i;
        while j > 0 {
            let prev = &bytes[(j - 1) * width..j * width];
            let cur = &bytes[i * width..(i + 1) * width];
            if compare(prev, cur) != Ordering::Greater {
                break;
            }
            j -= 1;
        }
        if j < i {
            bytes[j * width..(i + 1) * width].rotate_right(width);
        }
    }
}

pub fn selection_sort_blocks<F>(bytes: &mut [u8], width: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if width == 0 {
        return;
    }
    let count = bytes.len() / width;

    for end in (1..count).rev() {
        let mut max_pos = 0;
        for j in 1..=end {
            let candidate = &bytes[j * width..(j + 1) * width];
            let best = &bytes[max_pos * width..(max_pos + 1) * width];
            if compare(candidate, best) == Ordering::Greater {
                max_pos = j;
            }
        }
        if max_pos != end {
            let (head, tail) = bytes.split_at_mut(end * width);
            head[max_pos * width..(max_pos + 1) * width].swap_with_slice(&mut tail[..width]);
        }
    }
}
