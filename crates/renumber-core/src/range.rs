//! Lazy iteration over contiguous spans of one index space.
//!
//! This module provides [`IndexRange`], a half-open `[start, end)` span of a
//! single index family, and [`IndexRangeIter`], its iterator. Ranges are
//! `Copy` and never allocate, so they can be stored, passed around, and
//! iterated any number of times; every call to [`IndexRange::iter`] starts a
//! fresh, independent traversal.
//!
//! The main producer of ranges is
//! [`IndexConversion::output_indices`](crate::conversion::IndexConversion::output_indices),
//! which spans every dense position of a conversion table.
//!
//! # Examples
//!
//! ```
//! use renumber_core::{GenericIndex, IndexRange};
//!
//! let range = IndexRange::new(GenericIndex::new(2), GenericIndex::new(7));
//!
//! let values: Vec<usize> = range.iter().map(GenericIndex::idx).collect();
//! assert_eq!(values, [2, 3, 4, 5, 6]);
//!
//! // Ranges are `Copy`: iterating does not consume them.
//! assert_eq!(range.len(), 5);
//! for i in range {
//!     assert!(range.contains(i));
//! }
//! ```

use std::{iter::FusedIterator, marker::PhantomData, ops::Range};

use crate::index::SpaceIndex;

/// A half-open `[start, end)` span of one index space.
///
/// Produces the indices `start, start + 1, ..., end - 1` in strictly
/// increasing order. A range whose `start` is not below its `end` is empty;
/// that is an ordinary value, not an error.
///
/// # Examples
///
/// ```
/// use renumber_core::{GenericIndex, IndexRange};
///
/// // `[0, end)` spans, the common case:
/// let all = IndexRange::up_to(GenericIndex::new(4));
/// let values: Vec<_> = all.iter().map(GenericIndex::idx).collect();
/// assert_eq!(values, [0, 1, 2, 3]);
///
/// // Default-constructed ranges are empty:
/// let empty = IndexRange::<GenericIndex>::default();
/// assert!(empty.is_empty());
/// assert_eq!(empty.iter().next(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange<I> {
    start: I,
    end: I,
}

impl<I: SpaceIndex> IndexRange<I> {
    /// Creates the span `[start, end)`.
    ///
    /// If `start >= end` the range is empty; no error is raised.
    pub const fn new(start: I, end: I) -> Self {
        Self { start, end }
    }

    /// Creates the span `[0, end)`.
    #[must_use]
    pub fn up_to(end: I) -> Self {
        Self {
            start: I::default(),
            end,
        }
    }

    /// Returns the inclusive lower bound of the span.
    #[must_use]
    pub const fn start(self) -> I {
        self.start
    }

    /// Returns the exclusive upper bound of the span.
    #[must_use]
    pub const fn end(self) -> I {
        self.end
    }

    /// Returns the number of indices the span produces.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.idx().saturating_sub(self.start.idx())
    }

    /// Returns `true` if the span produces no indices.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` lies within the span.
    #[must_use]
    pub fn contains(self, index: I) -> bool {
        self.start <= index && index < self.end
    }

    /// Starts a fresh traversal of the span.
    ///
    /// Iterators obtained from the same range are fully independent, so a
    /// range can be traversed repeatedly or by several iterators at once.
    pub fn iter(self) -> IndexRangeIter<I> {
        IndexRangeIter {
            inner: self.start.idx()..self.end.idx(),
            _phantom: PhantomData,
        }
    }
}

impl<I: SpaceIndex> IntoIterator for IndexRange<I> {
    type Item = I;
    type IntoIter = IndexRangeIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the indices of an [`IndexRange`].
#[derive(Debug, Default, Clone)]
pub struct IndexRangeIter<I> {
    inner: Range<usize>,
    _phantom: PhantomData<I>,
}

impl<I: SpaceIndex> Iterator for IndexRangeIter<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(I::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: SpaceIndex> DoubleEndedIterator for IndexRangeIter<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(I::from)
    }
}

impl<I: SpaceIndex> ExactSizeIterator for IndexRangeIter<I> {}
impl<I: SpaceIndex> FusedIterator for IndexRangeIter<I> {}
