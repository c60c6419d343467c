//! Strongly-typed index spaces and dense/sparse index conversion.
//!
//! This crate is a small foundation layer for systems that address entities
//! by small unsigned integers and frequently need to remap a sparse subset of
//! those identifiers onto compact, contiguous array positions — and back.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Index spaces** - Nominal, mutually incompatible integer identifiers
//!    - [`index`]: the [`SpaceIndex`] contract and the
//!      [`define_index!`] macro that stamps out one zero-cost `usize` newtype
//!      per semantic index space, plus the ready-made [`GenericIndex`] space.
//!
//! 2. **Index ranges** - Lazy iteration over contiguous index spans
//!    - [`range`]: [`IndexRange`], a `Copy`, allocation-free, half-open
//!      `[start, end)` span of one index family.
//!
//! 3. **Index conversion** - Bidirectional sparse/dense remapping
//!    - [`conversion`]: [`IndexConversion`], a table projecting an ordered
//!      sequence of sparse input indices onto the dense space `[0, N)` with
//!      constant-time lookup in both directions.
//!    - [`seq`]: slice predicates ([`elements_are_unique`],
//!      [`same_elements`]) for validating conversion input up front.
//!
//! [`elements_are_unique`]: seq::elements_are_unique
//! [`same_elements`]: seq::same_elements
//!
//! # Examples
//!
//! ```
//! use renumber_core::{IndexConversion, SpaceIndex, define_index, seq};
//!
//! define_index! {
//!     /// Identifier of an entity in the host system.
//!     struct EntityId;
//!     /// Dense storage slot assigned to an active entity.
//!     struct SlotIndex;
//! }
//!
//! // Project a sparse set of entity identifiers onto dense storage slots.
//! let active: Vec<EntityId> = [162, 508, 896, 212].map(EntityId::new).to_vec();
//! assert!(seq::elements_are_unique(&active));
//! let slots = IndexConversion::<EntityId, SlotIndex>::from_indices(active);
//!
//! // Forward: which slot holds entity 896?
//! assert_eq!(slots.convert(EntityId::new(896)), SlotIndex::new(2));
//!
//! // Backward: which entity occupies each slot?
//! for slot in slots.output_indices() {
//!     assert_eq!(slots.convert(slots.source_index(slot)), slot);
//! }
//!
//! // Externally supplied identifiers go through the bounds-checked tier.
//! assert_eq!(slots.convert_safe(EntityId::new(999_999)), SlotIndex::INVALID);
//! ```

pub mod conversion;
pub mod index;
pub mod range;
pub mod seq;

pub use self::{
    conversion::IndexConversion,
    index::{GenericIndex, SpaceIndex},
    range::{IndexRange, IndexRangeIter},
};
