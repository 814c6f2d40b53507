use std::cmp::Ordering;

use super::comparator_traits::Comparator;
use crate::error::{CompareError, Result};

/// Inverts the ordering of an inner comparator.
///
/// The arguments are swapped rather than the result negated, so `compare(x, y)` is exactly
/// `inner.compare(y, x)` even when the inner comparator is not antisymmetric at ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReversingComparator<C> {
    inner: C,
}

impl<C> ReversingComparator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn try_new(inner: Option<C>) -> Result<Self> {
        inner.map(Self::new).ok_or_else(|| {
            log::debug!("ReversingComparator::try_new called without a comparator");
            CompareError::InvalidArgument("inner comparator must be present".to_string())
        })
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the reversal, giving back the original comparator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReversingComparator<C> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.inner.compare(rhs, lhs)
    }
}
