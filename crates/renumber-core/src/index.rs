//! Strongly-typed index spaces.
//!
//! This module provides [`SpaceIndex`], the contract shared by every index
//! family, and [`define_index!`](crate::define_index), the macro that stamps
//! out one nominal index type per semantic index space.
//!
//! An index space is a set of entities addressed by small unsigned integers:
//! nodes of a graph, rows of a matrix, slots of an arena. Giving each space
//! its own type makes indices from different spaces mutually incompatible at
//! compile time, so a row index can never be compared with, added to, or
//! silently used as a column index. Conversion between spaces is always
//! explicit, typically through an
//! [`IndexConversion`](crate::conversion::IndexConversion) table.
//!
//! Every generated type is a zero-cost `usize` newtype with:
//!
//! - a reserved tombstone, [`INVALID`](SpaceIndex::INVALID), equal to
//!   `usize::MAX` and meaning "no such index";
//! - a default value of `0`;
//! - conversion *in* from `usize` (via [`From`]) and explicit conversion
//!   *out* (via `idx()` or `usize::from`);
//! - same-family addition (`+`, `+=`), used to compute exclusive upper
//!   bounds such as `max_index + 1`;
//! - total ordering, equality, and hashing by the underlying integer;
//! - [`Display`] formatting identical to the underlying integer, so format
//!   specifiers like width and fill behave as they would for a plain number.
//!
//! # Examples
//!
//! ```
//! renumber_core::define_index! {
//!     /// Index of a node in the host graph.
//!     struct NodeIndex;
//! }
//!
//! let a = NodeIndex::new(3);
//! let b: NodeIndex = 4.into();
//! assert!(a < b);
//! assert_eq!((a + b).idx(), 7);
//! assert_ne!(a, NodeIndex::INVALID);
//! assert_eq!(format!("{a}"), "3");
//! ```

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign},
};

/// Contract shared by every strongly-typed index space.
///
/// Implementations are produced by [`define_index!`](crate::define_index);
/// there should be no reason to implement this trait by hand. Generic code
/// such as [`IndexConversion`](crate::conversion::IndexConversion) and
/// [`IndexRange`](crate::range::IndexRange) is written against this trait
/// and works uniformly over all index families.
///
/// Two guarantees matter to generic callers:
///
/// - [`INVALID`](Self::INVALID) is the largest representable value, so every
///   ordinary index compares strictly less than it;
/// - [`From<usize>`] and [`idx`](Self::idx) round-trip losslessly.
///
/// # Examples
///
/// ```
/// use renumber_core::{GenericIndex, SpaceIndex};
///
/// fn exclusive_upper_bound<I: SpaceIndex>(max: I) -> I {
///     max + I::from(1)
/// }
///
/// assert_eq!(exclusive_upper_bound(GenericIndex::new(11)).idx(), 12);
/// ```
pub trait SpaceIndex:
    Debug
    + Display
    + Default
    + Copy
    + Eq
    + Ord
    + Hash
    + From<usize>
    + Add<Output = Self>
    + AddAssign
    + Send
    + Sync
{
    /// Tombstone denoting "no such index".
    ///
    /// Equal to the maximum representable underlying value; every ordinary
    /// index compares strictly less than it.
    const INVALID: Self;

    /// Name of the index space, used in diagnostics.
    const SPACE_NAME: &'static str;

    /// Returns the underlying index value.
    fn idx(self) -> usize;
}

/// Defines one or more strongly-typed index spaces.
///
/// Each listed `struct Name;` becomes a `#[repr(transparent)]` newtype over
/// `usize` implementing [`SpaceIndex`](crate::index::SpaceIndex) with the
/// full feature set described in the [module docs](crate::index). Distinct
/// spaces are never interchangeable: comparing or adding indices of two
/// different spaces is a compile error, and converting between spaces
/// requires an explicit table such as
/// [`IndexConversion`](crate::conversion::IndexConversion).
///
/// # Examples
///
/// ```
/// renumber_core::define_index! {
///     /// Index of an equation row.
///     struct RowIndex;
///     /// Index of a variable column.
///     struct ColumnIndex;
/// }
///
/// let row = RowIndex::new(2);
/// let col = ColumnIndex::new(2);
/// assert_eq!(row.idx(), col.idx()); // underlying values may coincide
/// ```
///
/// Mixing spaces does not compile:
///
/// ```compile_fail
/// renumber_core::define_index! {
///     /// Index of an equation row.
///     struct RowIndex;
///     /// Index of a variable column.
///     struct ColumnIndex;
/// }
///
/// let _ = RowIndex::new(0) == ColumnIndex::new(0);
/// ```
#[macro_export]
macro_rules! define_index {
    ($(
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
    )+) => {$(
        $(#[$attr])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name(usize);

        impl $name {
            /// Tombstone denoting "no such index".
            pub const INVALID: Self = Self(usize::MAX);

            /// Creates an index with the given underlying value.
            #[must_use]
            pub const fn new(idx: usize) -> Self {
                Self(idx)
            }

            /// Returns the underlying index value.
            #[must_use]
            pub const fn idx(self) -> usize {
                self.0
            }
        }

        impl $crate::index::SpaceIndex for $name {
            const INVALID: Self = Self(usize::MAX);
            const SPACE_NAME: &'static str = stringify!($name);

            fn idx(self) -> usize {
                self.0
            }
        }

        impl ::std::convert::From<usize> for $name {
            fn from(idx: usize) -> Self {
                Self(idx)
            }
        }

        impl ::std::convert::From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }

        impl ::std::ops::Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl ::std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    )+};
}

crate::define_index! {
    /// An index space with no particular meaning.
    ///
    /// Useful in examples, tests, and call sites that genuinely do not care
    /// which space an index belongs to. Anything that carries meaning
    /// deserves its own space via [`define_index!`](crate::define_index).
    pub struct GenericIndex;
}
