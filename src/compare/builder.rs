use std::{cmp::Ordering, fmt, sync::Arc};

use super::{
    combinators::{KeyComparator, ThenComparator},
    comparator_traits::Comparator,
    natural::NaturalComparator,
    reverse::ReversingComparator,
};
use crate::error::{CompareError, Result};

type SharedComparator<T> = Arc<dyn Comparator<T> + Send + Sync>;

/// Starts an ordering for `T`, defaulting to its natural ordering.
///
/// ```
/// use collection_helpers::compare::{order_of, Comparator};
///
/// let cmp = order_of::<i32>().build().unwrap();
/// assert!(cmp.less(&3, &5));
/// ```
pub fn order_of<T>() -> OrderOf<T>
where
    T: Ord + ?Sized + 'static,
{
    OrderOf::natural()
}

/// Immutable builder for comparators over `T`.
///
/// Until a key is configured the builder compares with the natural ordering of `T`, if `T` has
/// one. The first [`by`](OrderOf::by) replaces that default; every later step only breaks ties
/// left by the steps before it. Each method returns a new builder, so several orderings can be
/// derived from one base without interfering.
pub struct OrderOf<T: ?Sized> {
    natural: Option<SharedComparator<T>>,
    configured: Option<SharedComparator<T>>,
}

impl<T: ?Sized + 'static> OrderOf<T> {
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self {
            natural: Some(Arc::new(NaturalComparator::<T>::new())),
            configured: None,
        }
    }

    /// A builder for a type without a natural ordering. It must be given a key before use.
    pub fn unordered() -> Self {
        Self {
            natural: None,
            configured: None,
        }
    }

    /// Orders by the natural ordering of a projected key.
    pub fn by<K, F>(&self, key: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.by_with(key, NaturalComparator::<K>::new())
    }

    /// Orders by a projected key using the supplied key comparator.
    pub fn by_with<K, F, C>(&self, key: F, key_cmp: C) -> Self
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Comparator<K> + Send + Sync + 'static,
    {
        self.then(KeyComparator::new(key, key_cmp))
    }

    /// Appends an arbitrary comparator as the next tie-breaker.
    pub fn then<C>(&self, next: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        let configured: SharedComparator<T> = match &self.configured {
            Some(prev) => {
                log::trace!("OrderOf<{}>::then: appending tie-breaker", std::any::type_name::<T>());
                Arc::new(ThenComparator::new(prev.clone(), next))
            }
            None => Arc::new(next),
        };
        Self {
            natural: self.natural.clone(),
            configured: Some(configured),
        }
    }

    /// Reverses everything configured so far, or the natural ordering when nothing is configured.
    ///
    /// The reversed ordering counts as configured, so a following [`by`](OrderOf::by) breaks its
    /// ties instead of replacing it. Reversing a builder that has no ordering at all leaves it
    /// unorderable.
    pub fn reversed(&self) -> Self {
        let configured = self
            .active()
            .ok()
            .map(|cmp| Arc::new(ReversingComparator::new(cmp)) as SharedComparator<T>);
        Self {
            natural: self.natural.clone(),
            configured,
        }
    }

    pub fn has_natural_ordering(&self) -> bool {
        self.natural.is_some()
    }

    pub fn is_configured(&self) -> bool {
        self.configured.is_some()
    }

    /// Compares with the current configuration.
    ///
    /// Fails with [`CompareError::TypeNotOrderable`] when `T` has no natural ordering and no key
    /// has been configured.
    pub fn compare(&self, lhs: &T, rhs: &T) -> Result<Ordering> {
        Ok(self.active()?.compare(lhs, rhs))
    }

    /// Freezes the current configuration into a comparator.
    pub fn build(&self) -> Result<OrderComparator<T>> {
        self.active().map(|inner| OrderComparator { inner })
    }

    fn active(&self) -> Result<SharedComparator<T>> {
        self.configured
            .as_ref()
            .or(self.natural.as_ref())
            .cloned()
            .ok_or_else(|| {
                let type_name = std::any::type_name::<T>();
                log::debug!("OrderOf<{}>: no natural ordering and no key configured", type_name);
                CompareError::TypeNotOrderable { type_name }
            })
    }
}

impl<T: ?Sized> Clone for OrderOf<T> {
    fn clone(&self) -> Self {
        Self {
            natural: self.natural.clone(),
            configured: self.configured.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for OrderOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderOf")
            .field("type", &std::any::type_name::<T>())
            .field("natural", &self.natural.is_some())
            .field("configured", &self.configured.is_some())
            .finish()
    }
}

/// Comparator produced by [`OrderOf::build`]. Cheap to clone and shareable across threads.
pub struct OrderComparator<T: ?Sized> {
    inner: SharedComparator<T>,
}

impl<T: ?Sized> Comparator<T> for OrderComparator<T> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.inner.compare(lhs, rhs)
    }
}

impl<T: ?Sized> Clone for OrderComparator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for OrderComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderComparator<{}>", std::any::type_name::<T>())
    }
}
