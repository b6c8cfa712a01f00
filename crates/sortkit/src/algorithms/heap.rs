//! Array-backed binary heap over element handles.
//!
//! A node dominates its children when it compares `Greater` or `Equal` to
//! them, so the ascending comparator gives a max-heap and its inverse a
//! min-heap. Children of `i` live at `2i + 1` and `2i + 2`.

use std::cmp::Ordering;
use std::fmt;

use super::common;
use crate::SortError;

/// Restores the heap property for the subtree rooted at `root`, looking only
/// at `data[..end]`.
pub fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = root * 2 + 1;
        if left >= end {
            break;
        }

        let mut dominant = root;
        if compare(&data[left], &data[dominant]) == Ordering::Greater {
            dominant = left;
        }
        let right = left + 1;
        if right < end && compare(&data[right], &data[dominant]) == Ordering::Greater {
            dominant = right;
        }
        if dominant == root {
            break;
        }

        data.swap(root, dominant);
        root = dominant;
    }
}

fn sift_up<T, F>(data: &mut [T], mut child: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while child > 0 {
        let parent = (child - 1) / 2;
        if compare(&data[child], &data[parent]) != Ordering::Greater {
            break;
        }
        data.swap(parent, child);
        child = parent;
    }
}

pub fn build_heap<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    for start in (0..len / 2).rev() {
        sift_down(data, start, len, compare);
    }
}

/// Heap sort. O(n log n) in every case, not stable.
pub fn heap_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap_sort_by(data, &mut compare);
}

pub(crate) fn heap_sort_by<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    build_heap(data, compare);

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, compare);
        end -= 1;
    }
}

/// Binary heap with a capacity fixed at construction.
pub struct BoundedHeap<T, F> {
    data: Vec<T>,
    capacity: usize,
    compare: F,
}

impl<T, F> BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn with_capacity(capacity: usize, compare: F) -> Result<Self, SortError> {
        Ok(Self {
            data: common::try_vec_with_capacity(capacity, "heap storage")?,
            capacity,
            compare,
        })
    }

    /// Heapifies `data` in place. The capacity is the number of elements given.
    pub fn from_vec(mut data: Vec<T>, mut compare: F) -> Self {
        build_heap(&mut data, &mut compare);
        let capacity = data.len();
        Self {
            data,
            capacity,
            compare,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Compares `value` against the top with the heap's own comparator.
    #[inline]
    pub fn compare_top(&mut self, value: &T) -> Option<Ordering> {
        let top = self.data.first()?;
        Some((self.compare)(value, top))
    }

    /// Inserts `value` in O(log n). A full heap is left unchanged and the
    /// value is handed back.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, &mut self.compare);
        Ok(())
    }

    /// Overwrites the top with `value` and sifts it down, returning the old
    /// top. On an empty heap this is a plain [`push`](Self::push); a
    /// zero-capacity heap hands `value` straight back.
    pub fn replace_top(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            return self.push(value).err();
        }
        let old = std::mem::replace(&mut self.data[0], value);
        let len = self.data.len();
        sift_down(&mut self.data, 0, len, &mut self.compare);
        Some(old)
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        sift_down(&mut self.data, 0, last, &mut self.compare);
        top
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Heap-sorts the retained elements: ascending for a max-heap, descending
    /// for a min-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        heap_sort_by(&mut self.data, &mut self.compare);
        self.data
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BoundedHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
