//! Element repetition.

/// Returns a sequence with every element appearing twice in a row.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::duplicate;
///
/// assert_eq!(duplicate(&[1, 2, 3]), vec![1, 1, 2, 2, 3, 3]);
/// assert_eq!(
///     duplicate(&["a", "b", "c", "c", "d"]),
///     vec!["a", "a", "b", "b", "c", "c", "c", "c", "d", "d"]
/// );
/// assert!(duplicate::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn duplicate<T: Clone>(elements: &[T]) -> Vec<T> {
    replicate(elements, 2)
}

/// Returns a sequence with every element appearing `count` times in a row.
///
/// A `count` of zero, or an empty input, gives an empty result.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::replicate;
///
/// assert_eq!(replicate(&["a", "b", "c"], 3), vec!["a", "a", "a", "b", "b", "b", "c", "c", "c"]);
/// assert!(replicate(&[1, 2], 0).is_empty());
/// ```
#[must_use]
pub fn replicate<T: Clone>(elements: &[T], count: usize) -> Vec<T> {
    let mut result = Vec::with_capacity(elements.len().saturating_mul(count));
    for element in elements {
        result.extend(std::iter::repeat_n(element, count).cloned());
    }
    result
}

/// Returns `count` copies of `element`.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::fill;
///
/// assert_eq!(fill('x', 3), vec!['x', 'x', 'x']);
/// assert!(fill('x', 0).is_empty());
/// ```
#[must_use]
pub fn fill<T: Clone>(element: T, count: usize) -> Vec<T> {
    vec![element; count]
}
