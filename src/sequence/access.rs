//! Positional accessors.
//!
//! Every accessor borrows the sequence and reports a missing position with
//! `None` instead of panicking.

use crate::control::{Step, tail_rec};

/// Returns the final element of a sequence.
///
/// Returns `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last(&[1]), Some(&1));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(elements: &[T]) -> Option<&T> {
    match elements {
        [] => None,
        [.., final_element] => Some(final_element),
    }
}

/// Returns the second-to-last element of a sequence.
///
/// Returns `None` if the sequence has fewer than two elements.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::second_last;
///
/// assert_eq!(second_last(&[1, 2, 3]), Some(&2));
/// assert_eq!(second_last(&[1]), None);
/// assert_eq!(second_last::<i32>(&[]), None);
/// ```
#[inline]
pub fn second_last<T>(elements: &[T]) -> Option<&T> {
    match elements {
        [.., penultimate, _] => Some(penultimate),
        _ => None,
    }
}

/// Returns the element at the 1-indexed position `k`.
///
/// Returns `None` when `k` is zero, when `k` exceeds the length, or when the
/// sequence is empty.
///
/// # Arguments
///
/// * `elements` - The sequence to index
/// * `k` - 1-indexed position
///
/// # Complexity
///
/// O(k), walking the sequence one element at a time
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::kth_element;
///
/// assert_eq!(kth_element(&[1, 2, 3], 2), Some(&2));
/// assert_eq!(kth_element(&[1], 1), Some(&1));
/// assert_eq!(kth_element(&[1, 2, 3], 0), None);
/// assert_eq!(kth_element(&[1, 2, 3], 4), None);
/// assert_eq!(kth_element::<i32>(&[], 1), None);
/// ```
pub fn kth_element<T>(elements: &[T], k: usize) -> Option<&T> {
    if k == 0 {
        return None;
    }
    tail_rec((elements, k), |(remaining, position)| match remaining {
        [] => Step::Done(None),
        [head, ..] if position == 1 => Step::Done(Some(head)),
        [_, tail @ ..] => Step::Continue((tail, position - 1)),
    })
}

/// Counts the elements of a sequence.
///
/// The count is accumulated by walking the sequence.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::len;
///
/// assert_eq!(len(&[1]), 1);
/// assert_eq!(len(&[1, 2]), 2);
/// assert_eq!(len::<i32>(&[]), 0);
/// ```
#[inline]
pub fn len<T>(elements: &[T]) -> usize {
    elements.iter().fold(0, |count, _| count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], None)]
    #[case(&[1], Some(&1))]
    #[case(&[1, 2, 3], Some(&3))]
    fn test_last(#[case] elements: &[i32], #[case] expected: Option<&i32>) {
        assert_eq!(last(elements), expected);
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[1], None)]
    #[case(&[1, 2], Some(&1))]
    #[case(&[1, 2, 3], Some(&2))]
    fn test_second_last(#[case] elements: &[i32], #[case] expected: Option<&i32>) {
        assert_eq!(second_last(elements), expected);
    }

    #[rstest]
    #[case(&[], 1, None)]
    #[case(&[1], 1, Some(&1))]
    #[case(&[1, 2, 3], 0, None)]
    #[case(&[1, 2, 3], 2, Some(&2))]
    #[case(&[1, 2, 3], 3, Some(&3))]
    #[case(&[1, 2, 3], 4, None)]
    fn test_kth_element(#[case] elements: &[i32], #[case] k: usize, #[case] expected: Option<&i32>) {
        assert_eq!(kth_element(elements, k), expected);
    }

    #[rstest]
    fn test_kth_element_long_sequence() {
        let elements: Vec<usize> = (0..1_000_000).collect();
        assert_eq!(kth_element(&elements, 1_000_000), Some(&999_999));
    }

    #[rstest]
    fn test_len_matches_slice_len() {
        let elements = vec!['x'; 37];
        assert_eq!(len(&elements), elements.len());
    }
}
