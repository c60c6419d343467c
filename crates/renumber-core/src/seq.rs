//! Order-insensitive sequence predicates.
//!
//! Two small validation helpers over slices: [`elements_are_unique`] and
//! [`same_elements`]. The first is the documented gate for callers that want
//! to reject duplicate inputs before building an
//! [`IndexConversion`](crate::conversion::IndexConversion) — construction
//! itself never fails, so uniqueness has to be enforced up front.
//!
//! Both predicates sort owned copies, so they need only [`Ord`] and run in
//! O(n log n); order-sensitive equality is already covered by slice `==`.

/// Returns `true` if no element of `elements` occurs twice.
///
/// Empty and single-element slices are trivially unique.
///
/// # Examples
///
/// ```
/// use renumber_core::{GenericIndex, seq};
///
/// let unique = [5, 1, 8, 11].map(GenericIndex::new);
/// let duplicated = [1, 5, 8, 1].map(GenericIndex::new);
///
/// assert!(seq::elements_are_unique(&unique));
/// assert!(!seq::elements_are_unique(&duplicated));
/// ```
#[must_use]
pub fn elements_are_unique<T: Ord + Clone>(elements: &[T]) -> bool {
    let mut sorted = elements.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}

/// Returns `true` if `a` and `b` contain the same elements, in any order.
///
/// This is multiset equality: multiplicities matter, positions do not.
///
/// # Examples
///
/// ```
/// use renumber_core::{GenericIndex, seq};
///
/// let a = [5, 1, 8, 11].map(GenericIndex::new);
/// let b = [1, 5, 8, 11].map(GenericIndex::new);
///
/// assert!(seq::same_elements(&a, &b));
/// assert!(!seq::same_elements(&a, &b[..3]));
/// ```
#[must_use]
pub fn same_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton_are_unique() {
        assert!(elements_are_unique::<u32>(&[]));
        assert!(elements_are_unique(&[7]));
    }

    #[test]
    fn test_detects_duplicates_anywhere() {
        assert!(elements_are_unique(&[5, 1, 8, 11]));
        assert!(!elements_are_unique(&[1, 1, 8, 11]));
        assert!(!elements_are_unique(&[1, 5, 8, 1]));
        assert!(!elements_are_unique(&[1, 5, 8, 8]));
    }

    #[test]
    fn test_same_elements_ignores_order() {
        assert!(same_elements(&[5, 1, 8, 11], &[1, 5, 8, 11]));
        assert!(same_elements(&[11, 8, 5, 1], &[1, 5, 8, 11]));
        assert!(same_elements::<u32>(&[], &[]));
    }

    #[test]
    fn test_same_elements_respects_multiplicity() {
        assert!(!same_elements(&[1, 1, 2], &[1, 2, 2]));
        assert!(same_elements(&[1, 1, 2], &[2, 1, 1]));
        assert!(!same_elements(&[1, 2], &[1, 2, 3]));
        assert!(!same_elements(&[1, 2, 3], &[1, 2, 4]));
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn shuffling_preserves_same_elements(
                (original, shuffled) in prop::collection::vec(0_u32..100, 0..50)
                    .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            ) {
                prop_assert!(same_elements(&original, &shuffled));
            }

            #[test]
            fn uniqueness_is_order_independent(
                mut elements in prop::collection::vec(0_u32..100, 0..50),
            ) {
                let before = elements_are_unique(&elements);
                elements.reverse();
                prop_assert_eq!(elements_are_unique(&elements), before);
            }

            #[test]
            fn appending_an_existing_element_breaks_uniqueness(
                mut elements in prop::collection::vec(0_u32..100, 1..50),
            ) {
                elements.push(elements[0]);
                prop_assert!(!elements_are_unique(&elements));
            }
        }
    }
}
