//! Reversal and palindrome testing.

use super::access::len;

/// Returns the elements of a sequence in reverse order.
///
/// `rev(&rev(xs)) == xs` holds for every finite sequence.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::rev;
///
/// assert_eq!(rev(&[1]), vec![1]);
/// assert_eq!(rev(&[1, 2]), vec![2, 1]);
/// assert_eq!(rev::<i32>(&[]), Vec::<i32>::new());
/// ```
#[must_use]
pub fn rev<T: Clone>(elements: &[T]) -> Vec<T> {
    let mut accumulator = Vec::with_capacity(elements.len());
    for element in elements.iter().rev() {
        accumulator.push(element.clone());
    }
    accumulator
}

/// Returns `true` if a sequence reads the same forwards and backwards.
///
/// The first half is compared element by element against the reversed
/// second half. For an odd length the middle element belongs to neither
/// half. The empty sequence is a palindrome.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::is_palindrome;
///
/// assert!(!is_palindrome(&[1, 2, 3]));
/// assert!(is_palindrome(&[1, 2, 4, 8, 16, 8, 4, 2, 1]));
/// assert!(is_palindrome(&[1, 2, 2, 1]));
/// assert!(is_palindrome(&["m", "a", "d", "a", "m", "i", "m", "a", "d", "a", "m"]));
/// ```
pub fn is_palindrome<T: PartialEq>(elements: &[T]) -> bool {
    let length = len(elements);
    let first_half_end = length / 2;
    let second_half_start = if length % 2 == 0 {
        first_half_end
    } else {
        first_half_end + 1
    };

    elements[..first_half_end]
        .iter()
        .zip(elements[second_half_start..].iter().rev())
        .all(|(front, back)| front == back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[1])]
    #[case(&[1, 2], &[2, 1])]
    #[case(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1])]
    fn test_rev(#[case] elements: &[i32], #[case] expected: &[i32]) {
        assert_eq!(rev(elements), expected);
    }

    #[rstest]
    fn test_rev_does_not_modify_input() {
        let elements = vec![1, 2, 3];
        let reversed = rev(&elements);
        assert_eq!(elements, vec![1, 2, 3]);
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[7], true)]
    #[case(&[1, 2, 3], false)]
    #[case(&[1, 2, 1], true)]
    #[case(&[1, 2, 2, 1], true)]
    #[case(&[1, 2, 3, 1], false)]
    #[case(&[1, 2, 4, 8, 16, 8, 4, 2, 1], true)]
    fn test_is_palindrome(#[case] elements: &[i32], #[case] expected: bool) {
        assert_eq!(is_palindrome(elements), expected);
    }

    #[rstest]
    fn test_is_palindrome_ignores_middle_element() {
        assert!(is_palindrome(&["a", "b", "zzz", "b", "a"]));
    }
}
