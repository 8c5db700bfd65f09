//! Structural utilities: insertion, ranges, splitting and slicing.
//!
//! None of these functions fail on out-of-range arguments. Positions are
//! clamped to the sequence and empty windows produce empty results.

/// Inserts `element` at position `index`.
///
/// - `index == 0` inserts at the front.
/// - A positive `index` counts from the front; an index beyond the end
///   appends.
/// - A negative `index` counts from the end: `-1` appends, `-2` inserts
///   before the last element, and so on; an index beyond the front
///   prepends.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::insert_at;
///
/// assert_eq!(insert_at("a", &[], 0), vec!["a"]);
/// assert_eq!(insert_at("a", &["b", "c"], 0), vec!["a", "b", "c"]);
/// assert_eq!(insert_at("b", &["a", "c"], 1), vec!["a", "b", "c"]);
/// assert_eq!(insert_at("c", &["a", "b"], 4), vec!["a", "b", "c"]);
/// assert_eq!(insert_at("c", &["a", "b"], -1), vec!["a", "b", "c"]);
/// assert_eq!(insert_at("b", &["a", "c"], -2), vec!["a", "b", "c"]);
/// assert_eq!(insert_at("a", &["b", "c"], -4), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn insert_at<T: Clone>(element: T, elements: &[T], index: isize) -> Vec<T> {
    let length = elements.len();
    let position = if index >= 0 {
        index.unsigned_abs().min(length)
    } else {
        length.saturating_sub(index.unsigned_abs() - 1)
    };

    let mut result = Vec::with_capacity(length + 1);
    result.extend_from_slice(&elements[..position]);
    result.push(element);
    result.extend_from_slice(&elements[position..]);
    result
}

/// Returns the integers from `start` to `end`, both inclusive.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::range;
///
/// assert_eq!(range(4, 3), Vec::<i64>::new());
/// assert_eq!(range(4, 4), vec![4]);
/// assert_eq!(range(1, 3), vec![1, 2, 3]);
/// assert_eq!(range(4, 9), vec![4, 5, 6, 7, 8, 9]);
/// ```
#[must_use]
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

/// Splits a sequence after its first `count` elements.
///
/// Returns `None` for an empty sequence. Otherwise the first part holds
/// `min(count, len)` elements and the second part the rest.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::split;
///
/// assert_eq!(split(&[1, 2, 3, 4, 5], 2), Some((vec![1, 2], vec![3, 4, 5])));
/// assert_eq!(split(&[1, 2], 5), Some((vec![1, 2], vec![])));
/// assert_eq!(split::<i32>(&[], 2), None);
/// ```
#[must_use]
pub fn split<T: Clone>(elements: &[T], count: usize) -> Option<(Vec<T>, Vec<T>)> {
    if elements.is_empty() {
        return None;
    }
    Some((take(elements, count), drop_first(elements, count)))
}

/// Returns the elements at zero-based positions `start..end`.
///
/// The window is clamped to the sequence. An empty window (`start >= end`)
/// or a window past the end gives an empty result.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::slice;
///
/// let letters = ["a", "b", "c", "d", "e", "f", "g"];
/// assert_eq!(slice(&letters, 2, 5), vec!["c", "d", "e"]);
/// assert_eq!(slice(&letters, 5, 100), vec!["f", "g"]);
/// assert!(slice(&letters, 4, 4).is_empty());
/// assert!(slice(&letters, 10, 12).is_empty());
/// ```
#[must_use]
pub fn slice<T: Clone>(elements: &[T], start: usize, end: usize) -> Vec<T> {
    if start >= end {
        return Vec::new();
    }
    let end = end.min(elements.len());
    let start = start.min(end);
    elements[start..end].to_vec()
}

/// Returns the first `count` elements, or the whole sequence if it is
/// shorter.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::take;
///
/// assert_eq!(take(&[1, 2, 3, 4, 5], 3), vec![1, 2, 3]);
/// assert_eq!(take(&[1, 2], 10), vec![1, 2]);
/// assert!(take(&[1, 2], 0).is_empty());
/// ```
#[must_use]
pub fn take<T: Clone>(elements: &[T], count: usize) -> Vec<T> {
    elements[..count.min(elements.len())].to_vec()
}

/// Returns the sequence without its first `count` elements.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::drop_first;
///
/// assert_eq!(drop_first(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5]);
/// assert!(drop_first(&[1, 2], 10).is_empty());
/// assert_eq!(drop_first(&[1, 2], 0), vec![1, 2]);
/// ```
#[must_use]
pub fn drop_first<T: Clone>(elements: &[T], count: usize) -> Vec<T> {
    elements[count.min(elements.len())..].to_vec()
}

/// Removes every `n`-th element.
///
/// Positions are counted from 1 within each block of `n` elements, so the
/// elements at positions `n, 2n, 3n, ...` are removed. `n == 1` removes
/// everything and `n == 0` removes nothing.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::drop_nth;
///
/// let letters = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "k"];
/// assert_eq!(drop_nth(&letters, 3), vec!["a", "b", "d", "e", "g", "h", "k"]);
/// assert!(drop_nth(&letters, 1).is_empty());
/// assert_eq!(drop_nth(&letters, 0), letters.to_vec());
/// ```
#[must_use]
pub fn drop_nth<T: Clone>(elements: &[T], n: usize) -> Vec<T> {
    if n == 0 {
        return elements.to_vec();
    }
    elements
        .iter()
        .enumerate()
        .filter(|(index, _)| (index + 1) % n != 0)
        .map(|(_, element)| element.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, &[9, 1, 2, 3])]
    #[case(1, &[1, 9, 2, 3])]
    #[case(3, &[1, 2, 3, 9])]
    #[case(100, &[1, 2, 3, 9])]
    #[case(-1, &[1, 2, 3, 9])]
    #[case(-2, &[1, 2, 9, 3])]
    #[case(-4, &[9, 1, 2, 3])]
    #[case(-100, &[9, 1, 2, 3])]
    #[case(isize::MIN, &[9, 1, 2, 3])]
    #[case(isize::MAX, &[1, 2, 3, 9])]
    fn test_insert_at(#[case] index: isize, #[case] expected: &[i32]) {
        assert_eq!(insert_at(9, &[1, 2, 3], index), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(-1)]
    #[case(-7)]
    fn test_insert_at_empty_sequence(#[case] index: isize) {
        assert_eq!(insert_at('x', &[], index), vec!['x']);
    }

    #[rstest]
    fn test_range_negative_bounds() {
        assert_eq!(range(-2, 1), vec![-2, -1, 0, 1]);
    }

    #[rstest]
    #[case(0, &[], &[1, 2, 3])]
    #[case(1, &[1], &[2, 3])]
    #[case(3, &[1, 2, 3], &[])]
    fn test_split(#[case] count: usize, #[case] first: &[i32], #[case] rest: &[i32]) {
        assert_eq!(split(&[1, 2, 3], count), Some((first.to_vec(), rest.to_vec())));
    }

    #[rstest]
    #[case(0, 3, &[1, 2, 3])]
    #[case(1, 2, &[2])]
    #[case(2, 1, &[])]
    #[case(3, 3, &[])]
    #[case(0, 10, &[1, 2, 3, 4])]
    #[case(4, 10, &[])]
    fn test_slice(#[case] start: usize, #[case] end: usize, #[case] expected: &[i32]) {
        assert_eq!(slice(&[1, 2, 3, 4], start, end), expected);
    }

    #[rstest]
    fn test_take_and_drop_first_partition() {
        let elements = [1, 2, 3, 4, 5];
        for count in 0..=7 {
            let mut joined = take(&elements, count);
            joined.extend(drop_first(&elements, count));
            assert_eq!(joined, elements);
        }
    }

    #[rstest]
    #[case(2, &[1, 3, 5])]
    #[case(5, &[1, 2, 3, 4])]
    #[case(6, &[1, 2, 3, 4, 5])]
    fn test_drop_nth(#[case] n: usize, #[case] expected: &[i32]) {
        assert_eq!(drop_nth(&[1, 2, 3, 4, 5], n), expected);
    }
}
