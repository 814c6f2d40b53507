use std::{cmp::Ordering, sync::Arc};

use super::{
    combinators::{KeyComparator, ThenComparator},
    natural::NaturalComparator,
    reverse::ReversingComparator,
};

// Traits bound
pub trait Comparator<T: ?Sized> {
    /// Orders `lhs` against `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    // convenient comparison functions generated from compare
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    fn less_equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Greater
    }

    fn greater(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }

    fn greater_equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Less
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Arc<C> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

/// Comparator adaptors, available on every sized comparator.
pub trait ComparatorExt<T: ?Sized>: Comparator<T> + Sized {
    /// Inverts this ordering.
    fn reversed(self) -> ReversingComparator<Self> {
        ReversingComparator::new(self)
    }

    /// Breaks ties left by `self` with `next`.
    fn then<C: Comparator<T>>(self, next: C) -> ThenComparator<Self, C> {
        ThenComparator::new(self, next)
    }

    /// Breaks ties left by `self` with the natural ordering of a projected key.
    fn then_by_key<K, F>(
        self,
        key: F,
    ) -> ThenComparator<Self, KeyComparator<F, NaturalComparator<K>>>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        ThenComparator::new(self, KeyComparator::new(key, NaturalComparator::new()))
    }

    fn sort_slice(&self, items: &mut [T])
    where
        T: Sized,
    {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Binary search over `items`, which must already be sorted by this comparator.
    fn binary_search(&self, items: &[T], target: &T) -> Result<usize, usize>
    where
        T: Sized,
    {
        items.binary_search_by(|probe| self.compare(probe, target))
    }
}

impl<T: ?Sized, C: Comparator<T>> ComparatorExt<T> for C {}

/// Signed-integer form of an ordering: negative, zero or positive.
pub fn ordering_sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
