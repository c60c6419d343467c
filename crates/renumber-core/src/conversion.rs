//! Bidirectional conversion between a sparse and a dense index space.
//!
//! This module provides [`IndexConversion`], a table that remaps an ordered
//! sequence of "input" indices from an arbitrary, possibly sparse space onto
//! the dense, contiguous space `[0, N)` — and back. Hosts use it to project
//! real entity identifiers onto compact array positions for cache-friendly
//! storage, then recover the original identifier from a compact position.
//!
//! A table is built once from its input sequence and is read-only afterwards
//! (apart from [`swap`](IndexConversion::swap)). Queries come in two tiers:
//!
//! - the plain tier ([`convert`](IndexConversion::convert),
//!   [`source_index`](IndexConversion::source_index),
//!   [`is_valid`](IndexConversion::is_valid)) indexes directly and panics on
//!   out-of-bounds arguments — for inner loops where the caller has already
//!   established bounds via [`output_indices`](IndexConversion::output_indices)
//!   or [`table_size`](IndexConversion::table_size);
//! - the safe tier ([`convert_safe`](IndexConversion::convert_safe),
//!   [`source_index_safe`](IndexConversion::source_index_safe),
//!   [`is_valid_safe`](IndexConversion::is_valid_safe)) bounds-checks first
//!   and reports out-of-range arguments through the
//!   [`INVALID`](SpaceIndex::INVALID) tombstone — for boundary code ingesting
//!   externally supplied indices.
//!
//! # Examples
//!
//! ```
//! use renumber_core::{IndexConversion, SpaceIndex, define_index};
//!
//! define_index! {
//!     /// Identifier of an entity in the host system.
//!     struct EntityId;
//!     /// Dense storage slot assigned to an active entity.
//!     struct SlotIndex;
//! }
//!
//! let active = vec![EntityId::new(162), EntityId::new(508), EntityId::new(896)];
//! let table = IndexConversion::<EntityId, SlotIndex>::from_indices(active);
//!
//! assert_eq!(table.convert(EntityId::new(508)), SlotIndex::new(1));
//! assert_eq!(table.source_index(SlotIndex::new(2)), EntityId::new(896));
//! assert_eq!(table.convert_safe(EntityId::new(999_999)), SlotIndex::INVALID);
//! ```

use crate::{index::SpaceIndex, range::IndexRange};

/// A two-way mapping between a sparse input space and the dense space `[0, N)`.
///
/// Dense position `k` is assigned to the `k`-th element of the input sequence,
/// so the sequence's order defines the dense space. The inverse direction is a
/// flat lookup array with one entry per possible input value below
/// [`table_size`](Self::table_size), holding either the dense position or the
/// [`INVALID`](SpaceIndex::INVALID) tombstone.
///
/// Construction never fails, duplicate input values included: a duplicate
/// makes the lookup entry point at the *last* occurrence, and the table then
/// reports itself invalid through [`indices_are_unique`](Self::indices_are_unique)
/// and [`check_invariants`](Self::check_invariants). Callers that need
/// duplicate rejection should gate construction on
/// [`seq::elements_are_unique`](crate::seq::elements_are_unique).
///
/// # Examples
///
/// ```
/// use renumber_core::{GenericIndex, IndexConversion, SpaceIndex, define_index};
///
/// define_index! {
///     /// Dense position in a conversion table.
///     struct DenseIndex;
/// }
///
/// let table = IndexConversion::<GenericIndex, DenseIndex>::from_indices(vec![
///     GenericIndex::new(5),
///     GenericIndex::new(1),
///     GenericIndex::new(8),
///     GenericIndex::new(11),
/// ]);
///
/// assert!(table.check_invariants());
/// assert_eq!(table.table_size(), GenericIndex::new(12));
/// for out in table.output_indices() {
///     assert_eq!(table.convert(table.source_index(out)), out);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConversion<In, Out> {
    indices: Vec<In>,
    lim: In,
    lookup: Vec<Out>,
}

impl<In: SpaceIndex, Out: SpaceIndex> IndexConversion<In, Out> {
    /// Creates an empty table.
    ///
    /// The empty table has no input indices, a [`table_size`](Self::table_size)
    /// of zero, and satisfies every invariant.
    #[must_use]
    pub fn new() -> Self {
        Self::from_indices(Vec::new())
    }

    /// Creates a table mapping `indices[k]` to dense position `k`.
    ///
    /// The lookup capacity is derived as one past the largest input value
    /// (zero for an empty sequence). Inputs must be ordinary indices: the
    /// [`INVALID`](SpaceIndex::INVALID) tombstone has no successor, so
    /// supplying it overflows the capacity derivation.
    #[must_use]
    pub fn from_indices(indices: Vec<In>) -> Self {
        let lim = Self::index_upper_bound(&indices);
        let lookup = Self::make_lookup(&indices, lim);
        Self {
            indices,
            lim,
            lookup,
        }
    }

    /// Creates a table with an explicit size hint.
    ///
    /// `max_in` names the largest input value the table should be prepared to
    /// handle; the lookup capacity becomes `max_in + 1` or the derived
    /// minimum, whichever is larger. A hint can only enlarge the table, never
    /// shrink it below what `indices` requires.
    #[must_use]
    pub fn from_indices_with_max(indices: Vec<In>, max_in: In) -> Self {
        let lim = Ord::max(max_in + In::from(1), Self::index_upper_bound(&indices));
        let lookup = Self::make_lookup(&indices, lim);
        Self {
            indices,
            lim,
            lookup,
        }
    }

    fn index_upper_bound(indices: &[In]) -> In {
        indices
            .iter()
            .max()
            .map_or_else(In::default, |&max| max + In::from(1))
    }

    fn make_lookup(indices: &[In], lim: In) -> Vec<Out> {
        let mut lookup = vec![Out::INVALID; lim.idx()];
        for (k, &input) in indices.iter().enumerate() {
            // Always true for tables built through the public constructors
            if input < lim {
                lookup[input.idx()] = Out::from(k);
            } else {
                log::warn!(
                    "{space} input {input} exceeds lookup capacity {lim}; entry dropped",
                    space = In::SPACE_NAME,
                );
            }
        }
        lookup
    }

    /// Returns the size of the lookup table.
    ///
    /// This is one past the largest input value the table handles; every
    /// argument accepted by the plain query tier is strictly below it.
    #[must_use]
    pub const fn table_size(&self) -> In {
        self.lim
    }

    /// Returns the input sequence defining the dense space.
    ///
    /// `input_indices()[k]` is the input index mapped to dense position `k`.
    #[must_use]
    pub fn input_indices(&self) -> &[In] {
        &self.indices
    }

    /// Returns the range of every valid dense position, `[0, N)`.
    #[must_use]
    pub fn output_indices(&self) -> IndexRange<Out> {
        IndexRange::up_to(Out::from(self.indices.len()))
    }

    /// Returns the input index mapped to dense position `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not a valid dense position, i.e. not produced by
    /// [`output_indices`](Self::output_indices). Use
    /// [`source_index_safe`](Self::source_index_safe) when that is not
    /// already established.
    #[must_use]
    pub fn source_index(&self, out: Out) -> In {
        self.indices[out.idx()]
    }

    /// Returns the input index mapped to dense position `out`, bounds-checked.
    ///
    /// Returns [`INVALID`](SpaceIndex::INVALID) if `out` is not a valid dense
    /// position.
    #[must_use]
    pub fn source_index_safe(&self, out: Out) -> In {
        if out.idx() >= self.indices.len() {
            return In::INVALID;
        }
        self.source_index(out)
    }

    /// Returns the dense position of input index `input`.
    ///
    /// Returns [`INVALID`](SpaceIndex::INVALID) if `input` has no mapping.
    ///
    /// # Panics
    ///
    /// Panics if `input >= table_size()`. Use [`convert_safe`](Self::convert_safe)
    /// when that is not already established.
    #[must_use]
    pub fn convert(&self, input: In) -> Out {
        self.lookup[input.idx()]
    }

    /// Returns the dense position of input index `input`, bounds-checked.
    ///
    /// Returns [`INVALID`](SpaceIndex::INVALID) if `input` is out of range or
    /// has no mapping.
    #[must_use]
    pub fn convert_safe(&self, input: In) -> Out {
        if input < self.lim {
            self.convert(input)
        } else {
            Out::INVALID
        }
    }

    /// Returns `true` if input index `input` has a mapping.
    ///
    /// # Panics
    ///
    /// Panics if `input >= table_size()`. Use
    /// [`is_valid_safe`](Self::is_valid_safe) when that is not already
    /// established.
    #[must_use]
    pub fn is_valid(&self, input: In) -> bool {
        self.lookup[input.idx()] != Out::INVALID
    }

    /// Returns `true` if input index `input` has a mapping, bounds-checked.
    ///
    /// Out-of-range arguments simply have no mapping and yield `false`.
    #[must_use]
    pub fn is_valid_safe(&self, input: In) -> bool {
        input < self.lim && self.is_valid(input)
    }

    /// Checks that no input index occurs twice.
    ///
    /// A duplicate overwrites an earlier lookup entry without adding a new
    /// one, so the count of mapped lookup entries falls short of the input
    /// count. Recomputed from scratch in O(`table_size`); meant for
    /// assertions and tests, not hot paths.
    #[must_use]
    pub fn indices_are_unique(&self) -> bool {
        let valid_count = self.lookup.iter().filter(|&&x| x != Out::INVALID).count();
        valid_count == self.indices.len()
    }

    /// Checks that every lookup entry points back at its defining position.
    ///
    /// Recomputed from scratch in O(N); meant for assertions and tests, not
    /// hot paths.
    #[must_use]
    pub fn lookups_are_correct(&self) -> bool {
        self.indices
            .iter()
            .enumerate()
            .all(|(k, &input)| self.lookup[input.idx()] == Out::from(k))
    }

    /// Checks every structural invariant of the table.
    ///
    /// Holds for any table built from a duplicate-free input sequence through
    /// the public constructors.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        self.indices_are_unique()
            && self.lookups_are_correct()
            && self.lim.idx() == self.lookup.len()
    }

    /// Returns the table's dynamic memory footprint in bytes.
    #[must_use]
    pub fn memory_load(&self) -> usize {
        self.indices.len() * size_of::<In>() + self.lookup.len() * size_of::<Out>()
    }

    /// Exchanges the contents of two tables in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<In: SpaceIndex, Out: SpaceIndex> Default for IndexConversion<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: SpaceIndex, Out: SpaceIndex> From<Vec<In>> for IndexConversion<In, Out> {
    fn from(indices: Vec<In>) -> Self {
        Self::from_indices(indices)
    }
}

impl<In: SpaceIndex, Out: SpaceIndex> FromIterator<In> for IndexConversion<In, Out> {
    fn from_iter<T: IntoIterator<Item = In>>(iter: T) -> Self {
        Self::from_indices(iter.into_iter().collect())
    }
}
