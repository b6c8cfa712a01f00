use std::cmp::Ordering;

use crate::SortError;

#[inline]
pub fn try_vec_with_capacity<T>(len: usize, what: &'static str) -> Result<Vec<T>, SortError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|err| SortError::allocation(what, len, err))?;
    Ok(v)
}

#[inline]
pub fn try_clone_slice<T: Clone>(data: &[T], what: &'static str) -> Result<Vec<T>, SortError> {
    let mut v = try_vec_with_capacity(data.len(), what)?;
    v.extend_from_slice(data);
    Ok(v)
}

/// Moves `data[tail]` left past every element of `data[head..tail]` that
/// compares greater. `data[head..tail]` must already be sorted.
#[inline]
pub fn insert_tail<T, F>(data: &mut [T], head: usize, tail: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut j = tail;
    while j > head && compare(&data[j - 1], &data[j]) == Ordering::Greater {
        data.swap(j - 1, j);
        j -= 1;
    }
}

#[inline]
pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
