use std::{cmp::Ordering, fmt, marker::PhantomData};

use super::comparator_traits::Comparator;

/// The natural ordering of `T`, as given by its [`Ord`] implementation.
pub struct NaturalComparator<T: ?Sized> {
    _t: PhantomData<fn(&T, &T)>,
}

impl<T: ?Sized> NaturalComparator<T> {
    pub const fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T: ?Sized + Ord> Comparator<T> for NaturalComparator<T> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

// Manual impls keep these free of bounds on `T`.
impl<T: ?Sized> Clone for NaturalComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalComparator<T> {}

impl<T: ?Sized> Default for NaturalComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for NaturalComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NaturalComparator<{}>", std::any::type_name::<T>())
    }
}

#[cfg(test)]
#[test]
fn test_natural_comparator() {
    let cmp = NaturalComparator::<str>::new();
    assert_eq!(cmp.compare("apple", "banana"), Ordering::Less);
    assert_eq!(cmp.compare("banana", "apple"), Ordering::Greater);
    assert_eq!(cmp.compare("pear", "pear"), Ordering::Equal);
    assert_eq!(format!("{:?}", cmp), "NaturalComparator<str>");
}
