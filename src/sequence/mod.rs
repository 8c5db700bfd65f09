//! Sequence algorithms.
//!
//! This module provides pure transformations over ordered sequences. Every
//! function borrows its input as a slice and returns a newly built result;
//! the input is never mutated.
//!
//! - Positional accessors: [`last`], [`second_last`], [`kth_element`], [`len`]
//! - Reversal: [`rev`], [`is_palindrome`]
//! - Nested sequences: [`Nested`], [`flatten`]
//! - Run-length encoding: [`pack`], [`compress`], [`encode`], [`decode`],
//!   [`encode_modified`], [`decode_modified`], [`encode_direct`], [`Encoded`]
//! - Repetition: [`duplicate`], [`replicate`], [`fill`]
//! - Structural utilities: [`insert_at`], [`range`], [`split`], [`slice`],
//!   [`take`], [`drop_first`], [`drop_nth`]
//! - Predicate helpers: [`count_while`], [`take_while`], [`do_until`]
//!
//! # Absent Values
//!
//! Accessors that may find nothing return `Option<&T>`. Sequence-returning
//! functions return an empty `Vec` for empty inputs or empty windows. The
//! one exception is [`split`], which returns `None` for an empty input
//! rather than a pair of empty sequences.
//!
//! # Examples
//!
//! ```rust
//! use lambars_lists::sequence::{drop_nth, insert_at, last, rev};
//!
//! assert_eq!(last(&[1, 2, 3]), Some(&3));
//! assert_eq!(rev(&rev(&[1, 2, 3])), vec![1, 2, 3]);
//! assert_eq!(insert_at("c", &["a", "b"], 4), vec!["a", "b", "c"]);
//!
//! let letters = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "k"];
//! assert_eq!(drop_nth(&letters, 3), vec!["a", "b", "d", "e", "g", "h", "k"]);
//! ```

mod access;
mod error;
mod nested;
mod predicate;
mod replicate;
mod reverse;
mod run_length;
mod structure;

pub use access::{kth_element, last, len, second_last};
pub use error::RunLengthError;
pub use nested::{Nested, flatten};
pub use predicate::{count_while, do_until, take_while};
pub use replicate::{duplicate, fill, replicate};
pub use reverse::{is_palindrome, rev};
pub use run_length::{
    Encoded, compress, decode, decode_modified, encode, encode_direct, encode_modified, pack,
};
pub use structure::{drop_first, drop_nth, insert_at, range, slice, split, take};
