//! # `enum-array` - Enum-Keyed Arrays with Compile-Time-Checked Initialization
//!
//! A fixed-size array whose index type is a specific enum, so the compiler
//! rejects accidental index swaps across dimensions, plus a safe-initialization
//! protocol that forces every enum value to receive exactly one initializer, in
//! declaration order, verified entirely at compile time.
//!
//! ## Safety Guarantees
//!
//! - **No integer indexing**: elements are reachable only through keys of the
//!   right enum type; there is no `Index<usize>` surface to misuse.
//! - **Total access**: a key is statically restricted to the enum's value set,
//!   so keyed access never fails at runtime.
//! - **Safe initialization**: [`EnumArray::builder`] either compiles with
//!   exactly one correctly ordered token per key, or does not compile at all.
//!   A missing, duplicated, out-of-order, or wrong-enum key is a type error,
//!   not a runtime branch.
//! - **In-place construction**: each element is built exactly once, directly in
//!   its final slot, so element types need neither `Default` nor `Clone`.
//!
//! ## Architecture
//!
//! Three pieces, stratified the same way:
//!
//! 1. **Key reflection** ([`Key`], [`enum_key!`]): a macro-based registry that
//!    maps an enum's values to dense positions `0..LEN` in declaration order
//!    and supplies the `[V; LEN]` storage type behind a generic associated
//!    type.
//! 2. **The container** ([`EnumArray`]): keyed access, bulk
//!    [`fill`](EnumArray::fill), closure construction
//!    ([`EnumArray::from_fn`]), and declaration-order iteration.
//! 3. **The typestate builder** ([`Builder`], [`entry!`]): a type-level cursor
//!    walks the key sequence; each initializer token is tagged with its key's
//!    position, and the token only type-checks at the matching cursor step.
//!
//! ## Example
//!
//! ```rust
//! use enum_array::{enum_key, entry, EnumArray};
//!
//! enum_key! {
//!     #[derive(Debug)]
//!     pub enum Module { Power, Thermal, Comms }
//! }
//! enum_key! {
//!     #[derive(Debug)]
//!     pub enum Channel { Primary, Backup }
//! }
//!
//! // A 2D table keyed by two different enums: swapping the keys in
//! // `table[m][c]` is a type error instead of silent data corruption.
//! let mut table: EnumArray<Module, EnumArray<Channel, f64>> = EnumArray::default();
//! table[Module::Thermal][Channel::Backup] = 36.6;
//!
//! // Safe initialization: one token per key, in declaration order, or it
//! // does not compile.
//! let voltage = EnumArray::<Module, f64>::builder()
//!     .with(entry!(Module::Power, 12.0))
//!     .with(entry!(Module::Thermal, 5.0))
//!     .with(entry!(Module::Comms, 3.3))
//!     .finish();
//! assert_eq!(voltage[Module::Comms], 3.3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod array;
pub mod builder;
pub mod key;

pub use array::EnumArray;
pub use builder::{Advance, Builder, Complete, Cursor, Entry};
pub use key::Key;
