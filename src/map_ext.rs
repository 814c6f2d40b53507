//! Get-with-default lookups over key/value maps.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Read-only lookups that fall back to a default instead of returning `None`.
///
/// The map is never modified; a missing key does not insert the default.
pub trait MapExt<Q: ?Sized, V> {
    fn lookup(&self, key: &Q) -> Option<&V>;

    fn get_or_default(&self, key: &Q) -> V
    where
        V: Default + Clone,
    {
        self.lookup(key).cloned().unwrap_or_default()
    }

    fn get_or(&self, key: &Q, default: V) -> V
    where
        V: Clone,
    {
        self.lookup(key).cloned().unwrap_or(default)
    }

    fn get_or_else<F>(&self, key: &Q, default: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        self.lookup(key).cloned().unwrap_or_else(default)
    }
}

impl<K, V, Q, S> MapExt<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> MapExt<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}
