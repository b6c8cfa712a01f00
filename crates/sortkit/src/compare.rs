//! Three-way comparators over element handles.
//!
//! Every algorithm in this crate is driven by an `FnMut(&T, &T) -> Ordering`.
//! The comparator must be a strict weak ordering; nothing here checks that.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// Ascending order for small unsigned integers, by value or by handle.
#[inline]
pub fn cmp_u8<H: Borrow<u8>>(a: &H, b: &H) -> Ordering {
    let (a, b): (&u8, &u8) = (a.borrow(), b.borrow());
    a.cmp(b)
}

/// Ascending order for doubles, by value or by handle.
///
/// Uses the IEEE 754 total order, so NaN and signed zeros still compare
/// consistently.
#[inline]
pub fn cmp_f64<H: Borrow<f64>>(a: &H, b: &H) -> Ordering {
    let (a, b): (&f64, &f64) = (a.borrow(), b.borrow());
    a.total_cmp(b)
}

/// Descending order for doubles: the logical inverse of [`cmp_f64`].
#[inline]
pub fn cmp_f64_rev<H: Borrow<f64>>(a: &H, b: &H) -> Ordering {
    cmp_f64(b, a)
}

/// Inverts a comparator, turning every max-heap algorithm into a min-heap one.
#[inline]
pub fn reversed<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(b, a)
}
