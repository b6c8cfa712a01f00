//! Streaming k-th order statistic over a bounded heap.
//!
//! Time O(n log k), space O(k). The input is only read.

use std::cmp::Ordering;

use super::heap::BoundedHeap;
use crate::SortError;

/// Returns the k-th element (1-indexed) of `data` under `compare` without
/// sorting the whole input: the k-th smallest for an ascending comparator,
/// the k-th largest for a descending one.
///
/// `Ok(None)` when `k` is outside `1..=data.len()`. When several candidates
/// tie with the worst retained element, the first one seen is kept.
pub fn select_kth_heap<T, F>(data: &[T], k: usize, compare: F) -> Result<Option<T>, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 || k > data.len() {
        return Ok(None);
    }

    // Max-heap under `compare`: the root is the worst of the k best so far.
    let mut heap = BoundedHeap::with_capacity(k, compare)?;
    for item in data {
        if !heap.is_full() {
            let pushed = heap.push(item.clone());
            debug_assert!(pushed.is_ok(), "push below capacity");
        } else if heap.compare_top(item) == Some(Ordering::Less) {
            heap.replace_top(item.clone());
        }
    }
    tracing::trace!(k, len = data.len(), "top-k scan finished");

    let mut retained = heap.into_sorted_vec();
    Ok(retained.pop())
}
