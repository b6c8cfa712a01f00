pub mod algorithms;
mod compare;
mod error;

use std::borrow::Borrow;
use std::cmp::Ordering;

pub use algorithms::bfprt::{
    BFPRT_GROUP_SIZE, kth_index, median_of_medians, partition, select_kth, select_kth_index,
};
pub use algorithms::bucket_sort::{
    BucketParams, BucketPolicy, DEFAULT_BUCKET_PARAMS, UniformF64Buckets, bucket_sort,
};
pub use algorithms::common::is_sorted_by;
pub use algorithms::elementary::{
    bubble_sort, insertion_sort, insertion_sort_blocks, selection_sort, selection_sort_blocks,
};
pub use algorithms::heap::{BoundedHeap, build_heap, heap_sort, sift_down};
pub use algorithms::merge_sort::merge_sort;
pub use algorithms::quick_sort::{
    MedianOfMedians, PivotSelector, RandomMedianOfThree, quick_sort, quick_sort_with,
};
pub use algorithms::shell_sort::{shell_gaps, shell_sort};
pub use algorithms::top_k::select_kth_heap;
pub use compare::{cmp_f64, cmp_f64_rev, cmp_u8, reversed};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    SelectionSort,
    BubbleSort,
    HeapSort,
    QuickSort,
    MergeSort,
    ShellSort,
    BucketSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 8] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::BucketSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::ShellSort => "shell_sort",
        SortAlgorithm::BucketSort => "bucket_sort",
    }
}

/// Whether equal elements keep their relative order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::InsertionSort | SortAlgorithm::BubbleSort | SortAlgorithm::MergeSort
    )
}

/// Whether the algorithm needs a [`BucketPolicy`] on top of the comparator.
pub fn requires_known_domain(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::BucketSort)
}

/// Whether the algorithm is quadratic on random input.
pub fn is_quadratic(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::InsertionSort | SortAlgorithm::SelectionSort | SortAlgorithm::BubbleSort
    )
}

/// Sorts `data` in place with any comparison sort.
///
/// Bucket sort needs a domain policy; use [`bucket_sort`] or [`sort_f64`].
pub fn sort_by<T, F>(algo: SortAlgorithm, data: &mut [T], compare: F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort(data, compare),
        SortAlgorithm::SelectionSort => selection_sort(data, compare),
        SortAlgorithm::BubbleSort => bubble_sort(data, compare),
        SortAlgorithm::HeapSort => heap_sort(data, compare),
        SortAlgorithm::QuickSort => quick_sort(data, compare),
        SortAlgorithm::MergeSort => merge_sort(data, compare)?,
        SortAlgorithm::ShellSort => shell_sort(data, compare)?,
        SortAlgorithm::BucketSort => {
            return Err(SortError::UnsupportedAlgorithm(algorithm_name(algo)));
        }
    }
    Ok(())
}

/// Sorts handles to doubles in ascending order. Bucket sort runs with
/// [`DEFAULT_BUCKET_PARAMS`].
pub fn sort_f64<H>(algo: SortAlgorithm, data: &mut [H]) -> Result<(), SortError>
where
    H: Borrow<f64> + Clone,
{
    match algo {
        SortAlgorithm::BucketSort => bucket_sort(data, &UniformF64Buckets::default(), cmp_f64),
        _ => sort_by(algo, data, cmp_f64),
    }
}
