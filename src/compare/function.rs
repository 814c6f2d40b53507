use std::{cmp::Ordering, fmt};

use super::comparator_traits::Comparator;
use crate::error::{CompareError, Result};

/// Where absent (`None`) values sort relative to present ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NullOrdering {
    /// Absent values sort after every present value.
    #[default]
    NullsLast,
    /// Absent values sort before every present value.
    NullsFirst,
}

/// Adapts a two-argument ordering function into a comparator over optional values.
///
/// Present values are handed to the function unchanged. Absent values never reach it: two absent
/// values are equal, and an absent value sorts after a present one unless the comparator is
/// configured with [`NullOrdering::NullsFirst`].
///
/// The function is trusted to be a consistent ordering; that is not checked.
#[derive(Clone)]
pub struct FunctionComparator<F> {
    f: F,
    nulls: NullOrdering,
}

impl<F> FunctionComparator<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            nulls: NullOrdering::default(),
        }
    }

    /// Builds a comparator from a function that may be missing.
    pub fn try_new(f: Option<F>) -> Result<Self> {
        match f {
            Some(f) => Ok(Self::new(f)),
            None => {
                log::debug!("FunctionComparator::try_new called without a function");
                Err(CompareError::InvalidArgument(
                    "ordering function must be present".to_string(),
                ))
            }
        }
    }

    pub fn with_null_ordering(self, nulls: NullOrdering) -> Self {
        Self { nulls, ..self }
    }

    pub fn null_ordering(&self) -> NullOrdering {
        self.nulls
    }

    /// Compares two present values with the wrapped function.
    #[inline]
    pub fn compare_values<T>(&self, lhs: &T, rhs: &T) -> Ordering
    where
        F: Fn(&T, &T) -> Ordering,
    {
        (self.f)(lhs, rhs)
    }
}

impl<T, F> Comparator<Option<T>> for FunctionComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &Option<T>, rhs: &Option<T>) -> Ordering {
        let absent_first = self.nulls == NullOrdering::NullsFirst;
        match (lhs, rhs) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) if absent_first => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) if absent_first => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => (self.f)(x, y),
        }
    }
}

impl<F> fmt::Debug for FunctionComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionComparator")
            .field("nulls", &self.nulls)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn by_value(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_null_policy() {
        let cmp = FunctionComparator::new(by_value);
        assert_eq!(cmp.compare(&None::<i32>, &None), Ordering::Equal);
        assert_eq!(cmp.compare(&None, &Some(1)), Ordering::Greater);
        assert_eq!(cmp.compare(&Some(1), &None), Ordering::Less);
        assert_eq!(cmp.compare(&Some(1), &Some(2)), Ordering::Less);

        let cmp = cmp.with_null_ordering(NullOrdering::NullsFirst);
        assert_eq!(cmp.compare(&None::<i32>, &None), Ordering::Equal);
        assert_eq!(cmp.compare(&None, &Some(1)), Ordering::Less);
        assert_eq!(cmp.compare(&Some(1), &None), Ordering::Greater);
    }

    #[test]
    fn test_absent_values_skip_the_function() {
        let calls = Cell::new(0);
        let cmp = FunctionComparator::new(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        let _ = cmp.compare(&None::<i32>, &None);
        let _ = cmp.compare(&None, &Some(3));
        let _ = cmp.compare(&Some(3), &None);
        assert_eq!(calls.get(), 0);
        let _ = cmp.compare(&Some(3), &Some(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_result_passed_through() {
        // deliberately inverted function; the adapter must not "fix" it
        let cmp = FunctionComparator::new(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(cmp.compare(&Some(1), &Some(2)), Ordering::Greater);
        assert_eq!(cmp.compare_values(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_try_new() {
        assert!(FunctionComparator::try_new(Some(by_value)).is_ok());
        let missing = FunctionComparator::<fn(&i32, &i32) -> Ordering>::try_new(None);
        assert!(matches!(missing, Err(CompareError::InvalidArgument(_))));
    }
}
