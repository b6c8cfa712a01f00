//! Error type shared by the sorts and selectors that need scratch storage.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Failure reported by a sort or selection routine.
///
/// Invalid selection ranks are not errors: they are reported as `None` by the
/// selection functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Scratch storage could not be reserved. The input slice may have been
    /// partially reordered but still holds every original element.
    AllocationFailed {
        /// Which scratch buffer was being reserved.
        what: &'static str,
        /// Number of elements requested.
        requested: usize,
    },

    /// The algorithm cannot run with a bare comparator (it needs a domain policy).
    UnsupportedAlgorithm(&'static str),
}

impl SortError {
    pub(crate) fn allocation(what: &'static str, requested: usize, err: TryReserveError) -> Self {
        tracing::warn!(what, requested, error = %err, "scratch allocation failed");
        SortError::AllocationFailed { what, requested }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::AllocationFailed { what, requested } => {
                write!(f, "failed to allocate {what} for {requested} elements")
            }
            SortError::UnsupportedAlgorithm(name) => {
                write!(f, "{name} needs a bucket policy and cannot sort with a comparator alone")
            }
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_buffer() {
        let err = SortError::AllocationFailed {
            what: "merge sort scratch",
            requested: 42,
        };
        assert_eq!(
            err.to_string(),
            "failed to allocate merge sort scratch for 42 elements"
        );
    }

    #[test]
    fn reserve_failure_maps_to_allocation_error() {
        let mut v: Vec<u64> = Vec::new();
        let raw = v.try_reserve_exact(usize::MAX).unwrap_err();
        let err = SortError::allocation("probe", usize::MAX, raw);
        assert!(matches!(
            err,
            SortError::AllocationFailed {
                what: "probe",
                requested: usize::MAX
            }
        ));
    }
}
