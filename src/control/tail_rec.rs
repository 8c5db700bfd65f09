//! Stack-safe tail recursion.
//!
//! This module provides [`Step`] and [`tail_rec`] for expressing
//! tail-recursive computations in a stack-safe manner. Instead of calling
//! itself, a recursive definition returns the arguments of its next call as
//! data, and [`tail_rec`] interprets those steps in a loop.
//!
//! # Motivation
//!
//! Rust does not guarantee tail call optimization (TCO). A definition such
//! as "the kth element of `xs` is the (k-1)th element of the tail of `xs`"
//! overflows the stack for long inputs when written with plain recursion.
//! Because every step here is a plain value, no boxing and no `'static`
//! bound is needed, so the step function may borrow from its environment.
//!
//! # Examples
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use lambars_lists::control::{Step, tail_rec};
//!
//! #[derive(Clone, Copy)]
//! enum Parity {
//!     Even(u64),
//!     Odd(u64),
//! }
//!
//! let is_even = |n: u64| {
//!     tail_rec(Parity::Even(n), |state| match state {
//!         Parity::Even(0) => Step::Done(true),
//!         Parity::Odd(0) => Step::Done(false),
//!         Parity::Even(k) => Step::Continue(Parity::Odd(k - 1)),
//!         Parity::Odd(k) => Step::Continue(Parity::Even(k - 1)),
//!     })
//! };
//!
//! assert!(is_even(1_000_000));
//! assert!(!is_even(999_999));
//! ```

/// One step of a tail-recursive computation.
///
/// # Type Parameters
///
/// * `S` - The state carried into the next step (the "arguments" of the
///   recursive call)
/// * `A` - The type of the final result
///
/// # Examples
///
/// ```rust
/// use lambars_lists::control::Step;
///
/// let next: Step<u32, &str> = Step::Continue(1);
/// let finished: Step<u32, &str> = Step::Done("finished");
/// assert_ne!(next, finished);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<S, A> {
    /// The computation continues with the given state.
    Continue(S),
    /// The computation has completed with value `A`.
    Done(A),
}

/// Runs a tail-recursive step function to completion.
///
/// Starting from `initial`, `step` is applied repeatedly; every
/// `Step::Continue(next)` feeds `next` into the following iteration and the
/// first `Step::Done(value)` ends the loop with `value`. Evaluation uses
/// constant stack space.
///
/// Termination is the caller's responsibility: a step function that never
/// returns `Done` loops forever.
///
/// # Arguments
///
/// * `initial` - The state of the first call
/// * `step` - One unrolled level of the recursive definition
///
/// # Examples
///
/// ```rust
/// use lambars_lists::control::{Step, tail_rec};
///
/// fn count_down(n: u64) -> u64 {
///     tail_rec(n, |k| if k == 0 { Step::Done(0) } else { Step::Continue(k - 1) })
/// }
///
/// // This would overflow the stack with regular recursion
/// assert_eq!(count_down(1_000_000), 0);
/// ```
#[inline]
pub fn tail_rec<S, A, F>(initial: S, mut step: F) -> A
where
    F: FnMut(S) -> Step<S, A>,
{
    let mut state = initial;
    loop {
        match step(state) {
            Step::Continue(next) => state = next,
            Step::Done(value) => return value,
        }
    }
}

static_assertions::assert_impl_all!(Step<Vec<i32>, String>: Send, Sync);
