use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use super::{coordinates::Coordinates, view::NdArrayView};

pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, x: &T, y: &T) -> bool;

    /// Must agree with `equals`: values it reports equal hash the same.
    fn hash_code(&self, value: &T) -> u64;
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &E {
    #[inline]
    fn equals(&self, x: &T, y: &T) -> bool {
        (**self).equals(x, y)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> u64 {
        (**self).hash_code(value)
    }
}

/// Equality and hashing as given by `T`'s own [`Eq`] and [`Hash`].
pub struct DefaultEquality<T: ?Sized> {
    _t: PhantomData<fn(&T)>,
}

impl<T: ?Sized> DefaultEquality<T> {
    pub const fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T: ?Sized + Eq + Hash> EqualityComparer<T> for DefaultEquality<T> {
    #[inline]
    fn equals(&self, x: &T, y: &T) -> bool {
        x == y
    }

    fn hash_code(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T: ?Sized> Clone for DefaultEquality<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DefaultEquality<T> {}

impl<T: ?Sized> Default for DefaultEquality<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for DefaultEquality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultEquality<{}>", std::any::type_name::<T>())
    }
}

/// Structural equality of arrays of any rank, element by element.
///
/// Two arrays are equal when they have the same rank, the same length in every dimension, and
/// pairwise equal elements under the element comparer. Elements are visited in odometer order and
/// the walk stops at the first mismatch. The hash is structural as well: it covers the shape and
/// every element hash in visiting order, so arrays this comparer calls equal always hash alike.
#[derive(Clone, Copy, Debug)]
pub struct NdArrayEqualityComparer<E> {
    elem: E,
}

impl<E> NdArrayEqualityComparer<E> {
    pub fn new(elem: E) -> Self {
        Self { elem }
    }

    pub fn element_comparer(&self) -> &E {
        &self.elem
    }

    /// Equality over possibly absent arrays. Two absent arrays are equal.
    pub fn equals_optional<A>(&self, x: Option<&A>, y: Option<&A>) -> bool
    where
        A: NdArrayView + ?Sized,
        E: EqualityComparer<A::Elem>,
    {
        match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => self.equals(x, y),
            _ => {
                log::debug!("NdArrayEqualityComparer::equals: one side absent");
                false
            }
        }
    }

    /// Hash over a possibly absent array; absent hashes to 0.
    pub fn hash_optional<A>(&self, value: Option<&A>) -> u64
    where
        A: NdArrayView + ?Sized,
        E: EqualityComparer<A::Elem>,
    {
        value.map_or(0, |v| self.hash_code(v))
    }
}

impl<T: ?Sized> Default for NdArrayEqualityComparer<DefaultEquality<T>> {
    fn default() -> Self {
        Self::new(DefaultEquality::new())
    }
}

impl<A, E> EqualityComparer<A> for NdArrayEqualityComparer<E>
where
    A: NdArrayView + ?Sized,
    E: EqualityComparer<A::Elem>,
{
    fn equals(&self, x: &A, y: &A) -> bool {
        if std::ptr::eq(x, y) {
            return true;
        }

        let rank = x.rank();
        if rank != y.rank() {
            log::debug!(
                "NdArrayEqualityComparer::equals: rank mismatch {} vs {}",
                rank,
                y.rank()
            );
            return false;
        }

        for dim in 0..rank {
            if x.dim_len(dim) != y.dim_len(dim) {
                log::debug!(
                    "NdArrayEqualityComparer::equals: length mismatch in dimension {}: {} vs {}",
                    dim,
                    x.dim_len(dim),
                    y.dim_len(dim)
                );
                return false;
            }
        }

        for coords in Coordinates::new(x.shape()) {
            let same = match (x.get(&coords), y.get(&coords)) {
                (Some(a), Some(b)) => self.elem.equals(a, b),
                _ => false,
            };
            if !same {
                log::debug!(
                    "NdArrayEqualityComparer::equals: element mismatch at {:?}",
                    coords
                );
                return false;
            }
        }

        true
    }

    fn hash_code(&self, value: &A) -> u64 {
        let shape = value.shape();
        let mut hasher = DefaultHasher::new();
        hasher.write_usize(shape.len());
        for &len in shape.iter() {
            hasher.write_usize(len);
        }
        for coords in Coordinates::new(shape) {
            if let Some(elem) = value.get(&coords) {
                hasher.write_u64(self.elem.hash_code(elem));
            }
        }
        hasher.finish()
    }
}

/// Keys a hash container by content as judged by an equality comparer.
///
/// Both sides of a comparison are judged by the left-hand key's comparer, so every key in one
/// container should carry an equivalent comparer.
#[derive(Clone, Debug)]
pub struct ComparerKey<T, E> {
    value: T,
    comparer: E,
}

impl<T, E: EqualityComparer<T>> ComparerKey<T, E> {
    pub fn new(value: T, comparer: E) -> Self {
        Self { value, comparer }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, E: EqualityComparer<T>> PartialEq for ComparerKey<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(&self.value, &other.value)
    }
}

impl<T, E: EqualityComparer<T>> Eq for ComparerKey<T, E> {}

impl<T, E: EqualityComparer<T>> Hash for ComparerKey<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.comparer.hash_code(&self.value));
    }
}
