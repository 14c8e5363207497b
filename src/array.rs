//! `EnumArray` — a fixed-size array indexed by an enum instead of an integer.
//!
//! Swapping two integer indices across dimensions compiles and then corrupts
//! data at runtime; swapping two enum keys of different types does not compile.
//! A 2D table of, say, per-module per-channel readings becomes
//! `EnumArray<Module, EnumArray<Channel, Reading>>`, and `table[m][c]` only
//! accepts a `Module` then a `Channel`, in that order.
//!
//! The container owns exactly one element per key, stored contiguously in
//! declaration order. There is deliberately no `Index<usize>` impl and no raw
//! slice accessor: positional access is what this type exists to rule out.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::builder::RawSlots;
use crate::{Builder, Cursor, Key};

/// A fixed-size array holding exactly one `V` per value of the key enum `K`.
///
/// Elements live at the dense position of their key (declaration order) and
/// are only reachable through keys, so access is total and never bounds-checked
/// against anything the caller controls.
///
/// ```
/// use enum_array::{enum_key, EnumArray};
///
/// enum_key! {
///     #[derive(Debug)]
///     enum Severity { Info, Warning, Error }
/// }
///
/// let mut counts: EnumArray<Severity, u64> = EnumArray::default();
/// counts[Severity::Warning] += 1;
/// assert_eq!(counts[Severity::Warning], 1);
/// assert_eq!(counts[Severity::Info], 0);
/// ```
pub struct EnumArray<K: Key, V> {
    data: K::Storage<V>,
}

impl<K: Key, V> EnumArray<K, V> {
    pub(crate) fn from_storage(data: K::Storage<V>) -> Self {
        Self { data }
    }

    /// Builds an array by calling `f` once per key, in declaration order.
    ///
    /// Each element is constructed directly in its final slot. If `f` panics,
    /// the elements built so far are dropped.
    ///
    /// ```
    /// use enum_array::{enum_key, EnumArray, Key};
    ///
    /// enum_key! {
    ///     enum Bit { Lo, Hi }
    /// }
    ///
    /// let masks = EnumArray::<Bit, u8>::from_fn(|bit: Bit| 1 << bit.index());
    /// assert_eq!(masks[Bit::Hi], 2);
    /// ```
    pub fn from_fn(mut f: impl FnMut(K) -> V) -> Self {
        let mut raw = RawSlots::<K, V>::new();
        for &key in K::VALUES {
            raw.write(f(key));
        }
        // SAFETY: `VALUES` has exactly `LEN` entries, so every slot is written.
        let data = unsafe { raw.assume_full() };
        Self { data }
    }

    /// Starts a safe initialization; see [`Builder`].
    pub fn builder() -> Builder<K, V, Cursor<K, 0>> {
        Builder::new()
    }

    /// Returns a reference to the element for `key`. Never fails.
    pub fn get(&self, key: K) -> &V {
        &self.data.as_ref()[key.index()]
    }

    /// Returns a mutable reference to the element for `key`. Never fails.
    pub fn get_mut(&mut self, key: K) -> &mut V {
        &mut self.data.as_mut()[key.index()]
    }

    /// Overwrites every element with a copy of `value`.
    pub fn fill(&mut self, value: V)
    where
        V: Clone,
    {
        self.data.as_mut().fill(value);
    }

    /// Number of elements; always `K::LEN`.
    pub fn len(&self) -> usize {
        K::LEN
    }

    /// Returns `true` if the key enum has no values.
    pub fn is_empty(&self) -> bool {
        K::LEN == 0
    }

    /// Iterates over the elements in key declaration order.
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.data.as_ref().iter()
    }

    /// Iterates mutably over the elements in key declaration order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, V> {
        self.data.as_mut().iter_mut()
    }

    /// Iterates over the keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = K> {
        K::VALUES.iter().copied()
    }

    /// Iterates over `(key, &element)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (K, &V)> {
        K::VALUES.iter().copied().zip(self.data.as_ref())
    }

    /// Consumes the array, rebuilding it element by element through `f`.
    ///
    /// ```
    /// use enum_array::{enum_key, EnumArray, Key};
    ///
    /// enum_key! {
    ///     enum Half { Front, Back }
    /// }
    ///
    /// let lengths = EnumArray::<Half, &str>::from_fn(|_| "abc").map(|_, s| s.len());
    /// assert_eq!(lengths[Half::Back], 3);
    /// ```
    pub fn map<U>(self, mut f: impl FnMut(K, V) -> U) -> EnumArray<K, U> {
        let mut raw = RawSlots::<K, U>::new();
        for (key, value) in K::VALUES.iter().copied().zip(self.data) {
            raw.write(f(key, value));
        }
        // SAFETY: one write per key.
        let data = unsafe { raw.assume_full() };
        EnumArray { data }
    }
}

impl<K: Key, V> Index<K> for EnumArray<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}

impl<K: Key, V> IndexMut<K> for EnumArray<K, V> {
    fn index_mut(&mut self, key: K) -> &mut V {
        self.get_mut(key)
    }
}

impl<K: Key, V: Default> Default for EnumArray<K, V> {
    fn default() -> Self {
        Self::from_fn(|_| V::default())
    }
}

impl<K: Key, V: Clone> Clone for EnumArray<K, V> {
    fn clone(&self) -> Self {
        Self::from_fn(|key| self[key].clone())
    }
}

impl<K: Key + fmt::Debug, V: fmt::Debug> fmt::Debug for EnumArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<K: Key, V: PartialEq> PartialEq for EnumArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.data.as_ref() == other.data.as_ref()
    }
}

impl<K: Key, V: Eq> Eq for EnumArray<K, V> {}

impl<K: Key, V> IntoIterator for EnumArray<K, V> {
    type Item = V;
    type IntoIter = <K::Storage<V> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, K: Key, V> IntoIterator for &'a EnumArray<K, V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Key, V> IntoIterator for &'a mut EnumArray<K, V> {
    type Item = &'a mut V;
    type IntoIter = slice::IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
