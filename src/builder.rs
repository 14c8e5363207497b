//! Safe initialization — every key gets exactly one value, checked at compile time.
//!
//! [`Builder`] is an incremental typestate builder: its third type parameter is
//! a [`Cursor`] that records how many keys have been supplied so far. Each
//! [`with`](Builder::with) call only accepts an [`Entry`] whose type-level
//! position tag matches the cursor, and [`finish`](Builder::finish) only exists
//! once the cursor has walked the whole key set. A missing, duplicated, or
//! out-of-order key therefore fails to *compile*; there is no runtime error
//! path for a wrong key set.
//!
//! Values are written in place into uninitialized slots, so the element type
//! needs neither `Default` nor `Clone`.
//!
//! ```
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//!
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Decode, 1))
//!     .with(entry!(Stage::Execute, 4))
//!     .finish();
//!
//! assert_eq!(latency[Stage::Decode], 1);
//! ```
//!
//! Leaving a key out is rejected before the program runs: the tokens after
//! the gap no longer line up with the key sequence, so the next `with` call
//! sees a position-tag mismatch (the error codes below are pinned so these
//! snippets keep failing for the cursor-mismatch reason, not incidentally):
//!
//! ```compile_fail,E0308
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//!
//! // Stage::Decode is missing.
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Execute, 4))
//!     .finish();
//! ```
//!
//! Leaving out the *last* key instead trips the `finish` gate, which requires
//! the cursor to have consumed the whole key set:
//!
//! ```compile_fail
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//!
//! // Stage::Execute is missing; `finish` needs `Stage: Complete<3>`.
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Decode, 1))
//!     .finish();
//! ```
//!
//! So is supplying keys out of declaration order:
//!
//! ```compile_fail,E0308
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//!
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Stage::Decode, 1))
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Execute, 4))
//!     .finish();
//! ```
//!
//! …duplicating one:
//!
//! ```compile_fail,E0308
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//!
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Fetch, 3))
//!     .with(entry!(Stage::Execute, 4))
//!     .finish();
//! ```
//!
//! …or borrowing a key from another enum, even one with matching positions:
//!
//! ```compile_fail,E0308
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     enum Stage { Fetch, Decode, Execute }
//! }
//! enum_key! {
//!     enum Other { A, B, C }
//! }
//!
//! let latency = EnumArray::<Stage, u32>::builder()
//!     .with(entry!(Other::A, 3))
//!     .with(entry!(Stage::Decode, 1))
//!     .with(entry!(Stage::Execute, 4))
//!     .finish();
//! ```

use core::marker::PhantomData;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr;

use crate::{EnumArray, Key};

/// An initializer token: the value destined for one key, tagged at the type
/// level with that key's dense position.
///
/// [`entry!`](crate::entry) is the sole sanctioned constructor: it derives
/// `POS` from the named variant, so the tag and the key cannot disagree.
/// Naming a `POS` by hand could mislabel the token and land the value at the
/// wrong key (a logic error, not a memory-safety one; debug builds catch it
/// with an assertion).
pub struct Entry<K, const POS: usize, V> {
    value: V,
    _key: PhantomData<K>,
}

impl<K: Key, const POS: usize, V> Entry<K, POS, V> {
    /// Creates an entry for `key` holding `value`.
    ///
    /// The key is taken by value so the enum type is inferred from it; `POS`
    /// must be the key's dense position. Use [`entry!`](crate::entry), which
    /// guarantees that by construction, instead of calling this directly.
    #[doc(hidden)]
    pub fn new(key: K, value: V) -> Self {
        debug_assert_eq!(key.index(), POS);
        Self {
            value,
            _key: PhantomData,
        }
    }
}

/// Creates an [`Entry`] for a key, deriving its type-level position tag from
/// the variant itself.
///
/// ```
/// use enum_array::{enum_key, entry, EnumArray};
///
/// enum_key! {
///     enum Axis { X, Y }
/// }
///
/// let bounds = EnumArray::<Axis, i64>::builder()
///     .with(entry!(Axis::X, 1920))
///     .with(entry!(Axis::Y, 1080))
///     .finish();
/// assert_eq!(bounds[Axis::Y], 1080);
/// ```
#[macro_export]
macro_rules! entry {
    ($key:path, $value:expr $(,)?) => {
        // The cast is position-exact: `enum_key!` enums carry no explicit
        // discriminants.
        $crate::Entry::<_, { $key as usize }, _>::new($key, $value)
    };
}

/// Type-level cursor over the key sequence of `K`: "the next key to supply is
/// the one at position `I`". Appears only as the state parameter of
/// [`Builder`].
pub struct Cursor<K, const I: usize> {
    _key: PhantomData<K>,
}

/// "Position `I` is a valid step of this key type": steps the builder's
/// [`Cursor`] past position `I`.
///
/// Implemented by [`enum_key!`](crate::enum_key) on the enum itself, once per
/// non-final position. Keeping the enum as the `Self` type (rather than the
/// cursor) is what lets the macro generate these impls in a downstream crate
/// without tripping the orphan rule.
///
/// # Safety
///
/// `Next` must be `Cursor<Self, I + 1>`, and impls must exist only for
/// `I < Self::LEN`. [`Builder::finish`] relies on this to prove that every
/// slot has been written.
pub unsafe trait Advance<const I: usize>: Key {
    /// The cursor at the following position.
    type Next;
}

/// "Position `I` is the end of this key type's sequence": every key has been
/// supplied once the builder's cursor reaches `I`.
///
/// Implemented by [`enum_key!`](crate::enum_key) on the enum itself, only for
/// `I == Self::LEN`.
///
/// # Safety
///
/// An impl for any other position lets [`Builder::finish`] treat uninitialized
/// slots as live values.
pub unsafe trait Complete<const I: usize>: Key {}

/// Uninitialized per-key slots plus a count of how many have been written.
///
/// Dropping a partially filled `RawSlots` drops exactly the written prefix, so
/// an abandoned builder (or a panicking closure in
/// [`EnumArray::from_fn`]) neither leaks nor double-drops.
pub(crate) struct RawSlots<K: Key, V> {
    slots: K::Storage<MaybeUninit<V>>,
    filled: usize,
}

impl<K: Key, V> RawSlots<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: K::uninit_storage(),
            filled: 0,
        }
    }

    /// Writes `value` into the next slot.
    pub(crate) fn write(&mut self, value: V) {
        self.slots.as_mut()[self.filled].write(value);
        self.filled += 1;
    }

    /// Unwraps the storage with every slot assumed initialized.
    ///
    /// # Safety
    ///
    /// All `K::LEN` slots must have been written.
    pub(crate) unsafe fn assume_full(self) -> K::Storage<V> {
        debug_assert_eq!(self.filled, K::LEN);
        let this = ManuallyDrop::new(self);
        // SAFETY: per the `Key` contract the storage is `[MaybeUninit<V>; LEN]`,
        // which has the same layout as `[V; LEN]`, and the caller guarantees
        // every slot is initialized. `this` is not dropped, so ownership of the
        // elements moves out exactly once.
        unsafe { ptr::read(ptr::from_ref(&this.slots).cast()) }
    }
}

impl<K: Key, V> Drop for RawSlots<K, V> {
    fn drop(&mut self) {
        for slot in &mut self.slots.as_mut()[..self.filled] {
            // SAFETY: slots below `filled` have been written and not moved out.
            unsafe { slot.assume_init_drop() };
        }
    }
}

/// The safe-initialization builder. See the [module docs](self) for the
/// protocol and its compile-time guarantees.
///
/// Obtained from [`EnumArray::builder`]; `C` starts at `Cursor<K, 0>` and
/// advances one position per [`with`](Builder::with) call.
pub struct Builder<K: Key, V, C> {
    raw: RawSlots<K, V>,
    _cursor: PhantomData<C>,
}

impl<K: Key, V> Builder<K, V, Cursor<K, 0>> {
    pub(crate) fn new() -> Self {
        Self {
            raw: RawSlots::new(),
            _cursor: PhantomData,
        }
    }
}

impl<K, V, const I: usize> Builder<K, V, Cursor<K, I>>
where
    K: Advance<I>,
{
    /// Supplies the value for the key at position `I` and advances the cursor.
    ///
    /// Only accepts an [`Entry`] tagged with exactly position `I`; an entry
    /// for any other key is a type error at the call site.
    pub fn with(mut self, entry: Entry<K, I, V>) -> Builder<K, V, <K as Advance<I>>::Next> {
        debug_assert_eq!(self.raw.filled, I);
        self.raw.write(entry.value);
        Builder {
            raw: self.raw,
            _cursor: PhantomData,
        }
    }
}

impl<K, V, const I: usize> Builder<K, V, Cursor<K, I>>
where
    K: Complete<I>,
{
    /// Produces the fully initialized array.
    ///
    /// Only available once every key has been supplied; calling it earlier is
    /// a type error.
    pub fn finish(self) -> EnumArray<K, V> {
        // SAFETY: `K: Complete<I>` holds only for `I == K::LEN`, and the
        // cursor advances exactly once per written slot.
        let data = unsafe { self.raw.assume_full() };
        EnumArray::from_storage(data)
    }
}

#[cfg(test)]
mod tests {
    use crate::{enum_key, entry, EnumArray};

    enum_key! {
        #[derive(Debug)]
        enum Rgb { Red, Green, Blue }
    }

    #[test]
    fn builds_in_declaration_order() {
        let a = EnumArray::<Rgb, u8>::builder()
            .with(entry!(Rgb::Red, 0xCC))
            .with(entry!(Rgb::Green, 0x11))
            .with(entry!(Rgb::Blue, 0x77))
            .finish();

        assert_eq!(a[Rgb::Red], 0xCC);
        assert_eq!(a[Rgb::Green], 0x11);
        assert_eq!(a[Rgb::Blue], 0x77);
    }

    #[test]
    fn abandoned_builder_drops_written_prefix() {
        use std::rc::Rc;

        let marker = Rc::new(());
        {
            let _partial = EnumArray::<Rgb, Rc<()>>::builder()
                .with(entry!(Rgb::Red, Rc::clone(&marker)))
                .with(entry!(Rgb::Green, Rc::clone(&marker)));
            // Dropped here without `finish`.
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "assertion")]
    fn mislabeled_entry_is_caught_in_debug_builds() {
        use crate::Entry;

        // Bypassing `entry!` with a hand-picked position tag that does not
        // match the key.
        let _ = Entry::<Rgb, 0, i32>::new(Rgb::Blue, 1);
    }

    #[test]
    fn works_without_default_or_clone() {
        struct Opaque(#[allow(dead_code)] u64);

        let a = EnumArray::<Rgb, Opaque>::builder()
            .with(entry!(Rgb::Red, Opaque(1)))
            .with(entry!(Rgb::Green, Opaque(2)))
            .with(entry!(Rgb::Blue, Opaque(3)))
            .finish();
        assert_eq!(a[Rgb::Blue].0, 3);
    }
}
