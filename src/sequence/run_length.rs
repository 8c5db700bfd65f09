//! Run-length packing, compression, encoding and decoding.
//!
//! A *run* is a maximal span of equal adjacent elements. Every sequence
//! decomposes uniquely into an ordered list of runs, and the functions in
//! this module are different views of that decomposition:
//!
//! | Function            | Output for `a a a b c c`                   |
//! |---------------------|--------------------------------------------|
//! | [`pack`]            | `[[a, a, a], [b], [c, c]]`                 |
//! | [`compress`]        | `[a, b, c]`                                |
//! | [`encode`]          | `[(3, a), (1, b), (2, c)]`                 |
//! | [`encode_modified`] | `[Run(3, a), Single(b), Run(2, c)]`        |
//! | [`encode_direct`]   | same as `encode_modified`, in a single pass |
//!
//! Only *adjacent* equal elements merge: in `a a c a a` the two runs of `a`
//! stay separate.

use super::error::RunLengthError;
use super::predicate::count_while;
use super::replicate::fill;
use crate::control::{Step, tail_rec};

/// One item of a modified run-length encoding.
///
/// A run of length one is stored as the bare element; longer runs carry
/// their repetition count.
///
/// # Serde
///
/// With the `serde` feature an item is stored untagged: `Single(v)` as `v`
/// and `Run(n, v)` as the pair `[n, v]`. Deserialization tries `Single`
/// first, so `T` must not itself deserialize from a sequence. For a `T` such
/// as `serde_json::Value`, a serialized run comes back as `Single([n, v])`.
///
/// # Type Parameters
///
/// * `T` - The type of the encoded elements
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::Encoded;
///
/// let single = Encoded::Single("b");
/// let run = Encoded::Run(4, "a");
///
/// assert_eq!(single.count(), 1);
/// assert_eq!(run.count(), 4);
/// assert_eq!(run.value(), &"a");
/// assert_eq!(run.expand(), vec!["a", "a", "a", "a"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Encoded<T> {
    /// A run of exactly one element.
    Single(T),
    /// A run of `count` copies of an element.
    Run(usize, T),
}

impl<T> Encoded<T> {
    /// Creates a run, rejecting a count of zero.
    ///
    /// A count of one is normalized to `Single`.
    ///
    /// # Errors
    ///
    /// Returns [`RunLengthError::ZeroCount`] if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::sequence::{Encoded, RunLengthError};
    ///
    /// assert_eq!(Encoded::try_run(3, 'x'), Ok(Encoded::Run(3, 'x')));
    /// assert_eq!(Encoded::try_run(1, 'x'), Ok(Encoded::Single('x')));
    /// assert_eq!(Encoded::try_run(0, 'x'), Err(RunLengthError::ZeroCount));
    /// ```
    pub fn try_run(count: usize, value: T) -> Result<Self, RunLengthError> {
        match count {
            0 => Err(RunLengthError::ZeroCount),
            1 => Ok(Self::Single(value)),
            _ => Ok(Self::Run(count, value)),
        }
    }

    /// Returns the number of elements this item stands for.
    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Run(count, _) => *count,
        }
    }

    /// Returns a reference to the repeated element.
    #[inline]
    pub const fn value(&self) -> &T {
        match self {
            Self::Single(value) | Self::Run(_, value) => value,
        }
    }

    /// Consumes the item and returns the repeated element.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Single(value) | Self::Run(_, value) => value,
        }
    }

    /// Applies a function to the element, keeping the count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::sequence::Encoded;
    ///
    /// assert_eq!(Encoded::Run(2, 'a').map(|c| c.to_ascii_uppercase()), Encoded::Run(2, 'A'));
    /// assert_eq!(Encoded::Single(3).map(|x| x + 1), Encoded::Single(4));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Encoded<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Single(value) => Encoded::Single(function(value)),
            Self::Run(count, value) => Encoded::Run(count, function(value)),
        }
    }

    /// Expands the item into `count()` copies of its element.
    #[must_use]
    pub fn expand(&self) -> Vec<T>
    where
        T: Clone,
    {
        fill(self.value().clone(), self.count())
    }
}

impl<T> From<(usize, T)> for Encoded<T> {
    /// Converts a `(count, value)` pair, storing a count of one as `Single`.
    fn from((count, value): (usize, T)) -> Self {
        if count == 1 {
            Self::Single(value)
        } else {
            Self::Run(count, value)
        }
    }
}

/// Splits a sequence into its runs of equal adjacent elements.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::pack;
///
/// let letters = ["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"];
/// assert_eq!(
///     pack(&letters),
///     vec![
///         vec!["a", "a", "a", "a"],
///         vec!["b"],
///         vec!["c", "c"],
///         vec!["a", "a"],
///         vec!["d"],
///         vec!["e", "e", "e", "e"],
///     ]
/// );
/// assert_eq!(pack(&["a", "b"]), vec![vec!["a"], vec!["b"]]);
/// assert!(pack::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn pack<T: Clone + PartialEq>(elements: &[T]) -> Vec<Vec<T>> {
    let mut runs: Vec<Vec<T>> = Vec::new();
    for element in elements {
        match runs.last_mut() {
            Some(run) if run.last() == Some(element) => run.push(element.clone()),
            _ => runs.push(vec![element.clone()]),
        }
    }
    runs
}

/// Replaces every run of equal adjacent elements with a single copy.
///
/// Each element is compared with its predecessor in the input, so no runs
/// are materialized.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::compress;
///
/// let letters = ["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"];
/// assert_eq!(compress(&letters), vec!["a", "b", "c", "a", "d", "e"]);
/// assert_eq!(compress(&["a", "a", "c", "a", "a"]), vec!["a", "c", "a"]);
/// ```
#[must_use]
pub fn compress<T: Clone + PartialEq>(elements: &[T]) -> Vec<T> {
    let mut result = Vec::new();
    let mut previous: Option<&T> = None;
    for element in elements {
        if previous != Some(element) {
            result.push(element.clone());
        }
        previous = Some(element);
    }
    result
}

/// Encodes a sequence as `(count, value)` pairs, one per run.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::encode;
///
/// assert_eq!(
///     encode(&["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"]),
///     vec![(4, "a"), (1, "b"), (2, "c"), (2, "a"), (1, "d"), (4, "e")]
/// );
/// assert_eq!(
///     encode(&["a", "b", "c", "d"]),
///     vec![(1, "a"), (1, "b"), (1, "c"), (1, "d")]
/// );
/// ```
#[must_use]
pub fn encode<T: Clone + PartialEq>(elements: &[T]) -> Vec<(usize, T)> {
    pack(elements)
        .into_iter()
        .filter_map(|run| {
            let count = run.len();
            run.into_iter().next().map(|value| (count, value))
        })
        .collect()
}

/// Expands `(count, value)` pairs back into a sequence.
///
/// Inverse of [`encode`]. A pair with a count of zero contributes nothing.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::decode;
///
/// assert_eq!(decode(&[(2, 'x'), (1, 'y'), (0, 'z')]), vec!['x', 'x', 'y']);
/// ```
#[must_use]
pub fn decode<T: Clone>(pairs: &[(usize, T)]) -> Vec<T> {
    let mut result = Vec::with_capacity(expanded_len(pairs.iter().map(|(count, _)| *count)));
    for (count, value) in pairs {
        result.extend(fill(value.clone(), *count));
    }
    result
}

/// Total number of elements a list of run counts expands to.
///
/// Saturates at `usize::MAX`; the result is only a capacity hint.
fn expanded_len<I: IntoIterator<Item = usize>>(counts: I) -> usize {
    counts.into_iter().fold(0, usize::saturating_add)
}

/// Encodes a sequence, storing runs of length one as bare elements.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::{Encoded, encode_modified};
///
/// assert_eq!(
///     encode_modified(&["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"]),
///     vec![
///         Encoded::Run(4, "a"),
///         Encoded::Single("b"),
///         Encoded::Run(2, "c"),
///         Encoded::Run(2, "a"),
///         Encoded::Single("d"),
///         Encoded::Run(4, "e"),
///     ]
/// );
/// ```
#[must_use]
pub fn encode_modified<T: Clone + PartialEq>(elements: &[T]) -> Vec<Encoded<T>> {
    encode(elements).into_iter().map(Encoded::from).collect()
}

/// Decodes a modified run-length encoding.
///
/// `Single(v)` expands to one `v` and `Run(n, v)` to `n` copies of `v`, in
/// order. `decode_modified(&encode_modified(xs)) == xs` for every `xs`.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::{Encoded, decode_modified};
///
/// let encoded = [Encoded::Run(4, "a"), Encoded::Single("b"), Encoded::Run(2, "c")];
/// assert_eq!(decode_modified(&encoded), vec!["a", "a", "a", "a", "b", "c", "c"]);
/// assert_eq!(decode_modified(&[Encoded::Single(1), Encoded::Single(2)]), vec![1, 2]);
/// ```
#[must_use]
pub fn decode_modified<T: Clone>(encoded: &[Encoded<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(expanded_len(encoded.iter().map(Encoded::count)));
    for item in encoded {
        match item {
            Encoded::Single(value) => result.push(value.clone()),
            Encoded::Run(count, value) => result.extend(fill(value.clone(), *count)),
        }
    }
    result
}

/// Produces the same result as [`encode_modified`] in a single pass.
///
/// Each run is measured in place with [`count_while`] and emitted
/// immediately; no intermediate list of runs is built.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::{Encoded, encode_direct, encode_modified};
///
/// let letters = ["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"];
/// assert_eq!(encode_direct(&letters), encode_modified(&letters));
/// assert_eq!(
///     encode_direct(&["a", "b", "c", "d"]),
///     vec![Encoded::Single("a"), Encoded::Single("b"), Encoded::Single("c"), Encoded::Single("d")]
/// );
/// ```
#[must_use]
pub fn encode_direct<T: Clone + PartialEq>(elements: &[T]) -> Vec<Encoded<T>> {
    tail_rec((elements, Vec::new()), |(remaining, mut encoded)| match remaining {
        [] => Step::Done(encoded),
        [head, ..] => {
            // an element unequal to itself (NaN) is a run of one
            let (count, _) = count_while(remaining, |element| element == head);
            let count = count.max(1);
            encoded.push(Encoded::from((count, head.clone())));
            Step::Continue((&remaining[count..], encoded))
        }
    })
}

static_assertions::assert_impl_all!(Encoded<String>: Send, Sync, Clone);
