use std::cmp::Ordering;

use super::common;
use crate::SortError;

/// Sedgewick's increments `1, 5, 19, 41, 109, 209, 505, 929, ...` not
/// exceeding `len / 2`, in increasing order.
///
/// Even terms are `9·4^i − 9·2^i + 1`, odd terms `4^(i+2) − 3·2^(i+2) + 1`.
pub fn shell_gaps(len: usize) -> Result<Vec<usize>, SortError> {
    let limit = len / 2;
    // Each term at least doubles, so two per bit is always enough room.
    let mut gaps = common::try_vec_with_capacity(2 * usize::BITS as usize, "shell sort gaps")?;

    let mut gap = 1usize;
    let mut term = 0u32;
    while gap <= limit {
        gaps.push(gap);
        term += 1;
        let next = if term % 2 == 0 {
            sedgewick_even(term / 2)
        } else {
            sedgewick_odd(term / 2)
        };
        match next {
            Some(next) => gap = next,
            None => break,
        }
    }
    Ok(gaps)
}

#[inline]
fn sedgewick_even(i: u32) -> Option<usize> {
    let four = 1usize.checked_shl(2 * i)?;
    let two = 1usize.checked_shl(i)?;
    9usize.checked_mul(four)?.checked_sub(9 * two)?.checked_add(1)
}

#[inline]
fn sedgewick_odd(i: u32) -> Option<usize> {
    let two = 1usize.checked_shl(i + 2)?;
    two.checked_mul(two - 3)?.checked_add(1)
}

/// Shell sort over Sedgewick's increments. Not stable.
pub fn shell_sort<T, F>(data: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let gaps = shell_gaps(len)?;
    tracing::trace!(len, gaps = gaps.len(), "shell sort increments");

    for &gap in gaps.iter().rev() {
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&data[j - gap], &data[j]) == Ordering::Greater {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::compare::cmp_f64;

    #[test]
    fn gap_sequence_prefix() {
        assert_eq!(shell_gaps(0).unwrap(), Vec::<usize>::new());
        assert_eq!(shell_gaps(1).unwrap(), Vec::<usize>::new());
        assert_eq!(shell_gaps(2).unwrap(), [1]);
        assert_eq!(shell_gaps(10).unwrap(), [1, 5]);
        assert_eq!(
            shell_gaps(2000).unwrap(),
            [1, 5, 19, 41, 109, 209, 505, 929]
        );
    }

    #[test]
    fn gaps_never_exceed_half_length() {
        for len in [3usize, 17, 100, 65_536, usize::MAX] {
            let gaps = shell_gaps(len).unwrap();
            assert!(gaps.iter().all(|&g| g <= len / 2));
            assert!(gaps.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn sorts_uniform_doubles() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let values: Vec<f64> = (0..5000).map(|_| rng.random_range(256.0..65536.0)).collect();
        let mut handles: Vec<&f64> = values.iter().collect();
        shell_sort(&mut handles, cmp_f64).unwrap();

        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        assert_eq!(handles.into_iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let mut data: Vec<u32> = (0..300).collect();
        shell_sort(&mut data, |a, b| a.cmp(b)).unwrap();
        assert!(data.iter().copied().eq(0..300));
    }
}
