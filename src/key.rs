//! The `Key` trait — enum-to-dense-index reflection.
//!
//! Rust has no built-in way to ask an enum for its ordered value set, so the
//! mapping is supplied by a macro-based registry: [`enum_key!`](crate::enum_key)
//! declares the enum and generates its [`Key`] impl together with the
//! type-level step table consumed by the safe-initialization builder.

use core::mem::MaybeUninit;

/// An enumeration usable as the index type of an [`EnumArray`](crate::EnumArray).
///
/// Each value of the enum is assigned a dense position `0..LEN` by declaration
/// order. The mapping is a property of the type and never changes at runtime.
///
/// # Safety
///
/// Implementations must uphold all of the following; the container and builder
/// rely on them for memory safety:
///
/// - `Storage<T>` is exactly `[T; LEN]`.
/// - `VALUES` lists every distinct value exactly once, in declaration order,
///   and `VALUES.len() == LEN`.
/// - `index` returns the position of the value within `VALUES`, so
///   `index(v) < LEN` for every value `v`.
/// - `uninit_storage` returns `LEN` uninitialized slots.
///
/// Prefer [`enum_key!`](crate::enum_key), which generates a correct impl; a
/// hand-written impl takes on these obligations itself.
pub unsafe trait Key: Copy + 'static {
    /// Number of distinct values of the enum.
    const LEN: usize;

    /// Every value of the enum, in declaration order.
    const VALUES: &'static [Self];

    /// Backing storage for one element per key; always `[T; LEN]`.
    ///
    /// A generic associated type stands in for `[T; Self::LEN]`, which stable
    /// Rust cannot spell as a field of a generic struct.
    type Storage<T>: AsRef<[T]> + AsMut<[T]> + IntoIterator<Item = T>;

    /// Dense position of this value, `0..LEN`.
    fn index(self) -> usize;

    /// One uninitialized slot per key, for in-place construction.
    fn uninit_storage<T>() -> Self::Storage<MaybeUninit<T>>;
}

/// Declares an enum and registers it as a [`Key`].
///
/// The macro owns the enum declaration so that the dense positions it records
/// are guaranteed to match declaration order: variants are unit-only, carry no
/// explicit discriminants, and `Clone`/`Copy` are derived automatically (other
/// derives and attributes pass through).
///
/// ```
/// use enum_array::{enum_key, EnumArray, Key};
///
/// enum_key! {
///     #[derive(Debug, PartialEq, Eq)]
///     pub enum Channel {
///         Left,
///         Right,
///     }
/// }
///
/// assert_eq!(Channel::LEN, 2);
/// assert_eq!(Channel::VALUES, &[Channel::Left, Channel::Right]);
/// assert_eq!(Channel::Right.index(), 1);
///
/// let gains: EnumArray<Channel, f32> = EnumArray::from_fn(|_| 1.0);
/// assert_eq!(gains[Channel::Left], 1.0);
/// ```
///
/// An enum with no variants is valid and yields zero-length arrays:
///
/// ```
/// use enum_array::{enum_key, EnumArray};
///
/// enum_key! {
///     pub enum Never {}
/// }
///
/// let empty: EnumArray<Never, String> = EnumArray::builder().finish();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! enum_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis enum $name {
            $($variant),+
        }

        unsafe impl $crate::Key for $name {
            const LEN: usize = $crate::__count!($($variant)+);

            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            type Storage<T> = [T; { $crate::__count!($($variant)+) }];

            fn index(self) -> usize {
                // No explicit discriminants, so the discriminant is the
                // declaration position.
                self as usize
            }

            fn uninit_storage<T>() -> Self::Storage<::core::mem::MaybeUninit<T>> {
                [const { ::core::mem::MaybeUninit::uninit() }; { $crate::__count!($($variant)+) }]
            }
        }

        $crate::__key_steps!($name, 0usize, $($variant)+);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {}
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis enum $name {}

        unsafe impl $crate::Key for $name {
            const LEN: usize = 0;

            const VALUES: &'static [Self] = &[];

            type Storage<T> = [T; 0];

            fn index(self) -> usize {
                match self {}
            }

            fn uninit_storage<T>() -> Self::Storage<::core::mem::MaybeUninit<T>> {
                []
            }
        }

        // An empty key set is complete before the first step.
        unsafe impl $crate::Complete<0> for $name {}
    };
}

/// Counts identifiers; expands to a `usize` expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:ident $($rest:ident)*) => { 1usize + $crate::__count!($($rest)*) };
}

/// Generates the builder's step table: one [`Advance`](crate::Advance) impl
/// per position and a final [`Complete`](crate::Complete) impl.
///
/// Both traits are implemented *on the enum itself*, parameterized by the
/// position, so the impls are orphan-rule-legal in the crate that invokes
/// [`enum_key!`](crate::enum_key).
#[doc(hidden)]
#[macro_export]
macro_rules! __key_steps {
    ($name:ident, $idx:expr,) => {
        unsafe impl $crate::Complete<{ $idx }> for $name {}
    };
    ($name:ident, $idx:expr, $head:ident $($rest:ident)*) => {
        unsafe impl $crate::Advance<{ $idx }> for $name {
            type Next = $crate::Cursor<$name, { $idx + 1usize }>;
        }
        $crate::__key_steps!($name, $idx + 1usize, $($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use crate::Key;

    enum_key! {
        #[derive(Debug, PartialEq, Eq)]
        enum Compass {
            North,
            East,
            South,
            West,
        }
    }

    #[test]
    fn positions_follow_declaration_order() {
        assert_eq!(Compass::LEN, 4);
        assert_eq!(Compass::North.index(), 0);
        assert_eq!(Compass::East.index(), 1);
        assert_eq!(Compass::South.index(), 2);
        assert_eq!(Compass::West.index(), 3);
    }

    #[test]
    fn values_agree_with_index() {
        for (i, &value) in Compass::VALUES.iter().enumerate() {
            assert_eq!(value.index(), i);
        }
    }

    #[test]
    fn storage_is_one_slot_per_key() {
        let storage: <Compass as Key>::Storage<u8> = [1, 2, 3, 4];
        assert_eq!(storage.as_ref().len(), Compass::LEN);
    }
}
