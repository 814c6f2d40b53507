use std::cmp::Ordering;

use super::comparator_traits::Comparator;

/// Orders values by a key projected out of them.
#[derive(Clone, Copy, Debug)]
pub struct KeyComparator<F, C> {
    key: F,
    key_cmp: C,
}

impl<F, C> KeyComparator<F, C> {
    pub fn new(key: F, key_cmp: C) -> Self {
        Self { key, key_cmp }
    }
}

impl<T, K, F, C> Comparator<T> for KeyComparator<F, C>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.key_cmp.compare(&(self.key)(lhs), &(self.key)(rhs))
    }
}

/// Lexicographic composition: `next` is consulted only when `first` reports a tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThenComparator<C1, C2> {
    first: C1,
    next: C2,
}

impl<C1, C2> ThenComparator<C1, C2> {
    pub fn new(first: C1, next: C2) -> Self {
        Self { first, next }
    }
}

impl<T: ?Sized, C1: Comparator<T>, C2: Comparator<T>> Comparator<T> for ThenComparator<C1, C2> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        match self.first.compare(lhs, rhs) {
            Ordering::Equal => self.next.compare(lhs, rhs),
            other => other,
        }
    }
}
