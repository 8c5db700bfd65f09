//! Predicate-driven helpers: leading spans and fixed-point iteration.

use crate::control::{Step, tail_rec};

/// Counts the leading elements that satisfy a predicate.
///
/// Returns the count together with the first element that does not satisfy
/// the predicate, or `None` if every element does.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::count_while;
///
/// assert_eq!(count_while(&[2, 4, 6, 10], |x| *x < 10), (3, Some(&10)));
/// assert_eq!(count_while(&["a", "a", "a", "b"], |x| *x == "a"), (3, Some(&"b")));
/// assert_eq!(count_while(&[1, 2], |_| true), (2, None));
/// assert_eq!(count_while::<i32, _>(&[], |_| true), (0, None));
/// ```
pub fn count_while<T, P>(elements: &[T], mut predicate: P) -> (usize, Option<&T>)
where
    P: FnMut(&T) -> bool,
{
    tail_rec((elements, 0), |(remaining, count)| match remaining {
        [] => Step::Done((count, None)),
        [head, tail @ ..] => {
            if predicate(head) {
                Step::Continue((tail, count + 1))
            } else {
                Step::Done((count, Some(head)))
            }
        }
    })
}

/// Returns the leading elements that satisfy a predicate.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::take_while;
///
/// assert_eq!(take_while(&[1, 3, 5, 6, 7], |x| x % 2 == 1), vec![1, 3, 5]);
/// assert_eq!(take_while(&[2, 4], |x| x % 2 == 1), Vec::<i32>::new());
/// assert_eq!(take_while(&[1, 3], |x| x % 2 == 1), vec![1, 3]);
/// ```
#[must_use]
pub fn take_while<T, P>(elements: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (count, _) = count_while(elements, predicate);
    elements[..count].to_vec()
}

/// Applies `function` repeatedly until `predicate` holds.
///
/// Starting from `initial`, returns the first value in the sequence
/// `initial, f(initial), f(f(initial)), ...` that satisfies `predicate`.
/// If `initial` already satisfies it, `function` is never called.
///
/// The loop runs in constant stack space but does not terminate unless the
/// iteration eventually reaches a value satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::do_until;
///
/// // Collatz: every tested start reaches 1
/// let collatz = |n: u64| if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
/// assert_eq!(do_until(collatz, |n| *n == 1, 27), 1);
///
/// assert_eq!(do_until(|x: i32| x * 2, |x| *x > 100, 1), 128);
/// assert_eq!(do_until(|x: i32| x + 1, |_| true, 7), 7);
/// ```
pub fn do_until<A, F, P>(mut function: F, mut predicate: P, initial: A) -> A
where
    F: FnMut(A) -> A,
    P: FnMut(&A) -> bool,
{
    tail_rec(initial, |value| {
        if predicate(&value) {
            Step::Done(value)
        } else {
            Step::Continue(function(value))
        }
    })
}
