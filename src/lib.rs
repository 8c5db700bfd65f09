//! # lambars-lists
//!
//! Classic list-manipulation algorithms for Rust, written in the same
//! immutable style as the rest of lambars.
//!
//! ## Overview
//!
//! Every operation borrows its input sequence and returns a freshly built
//! result; nothing is mutated in place. The library includes:
//!
//! - **Positional Accessors**: `last`, `second_last`, `kth_element`, `len`
//! - **Reversal**: `rev`, `is_palindrome`
//! - **Nested Sequences**: [`Nested`](sequence::Nested) trees and `flatten`
//! - **Run-Length Encoding**: `pack`, `compress`, `encode`, `encode_modified`,
//!   `decode_modified`, `encode_direct`
//! - **Structural Utilities**: `insert_at`, `range`, `split`, `slice`,
//!   `take`, `drop_first`, `drop_nth`, `duplicate`, `replicate`, `fill`
//! - **Control Structures**: [`tail_rec`](control::tail_rec) for stack-safe
//!   iteration of tail-recursive definitions
//!
//! Absent values are reported with `Option`, never with a panic.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence algorithms (implies `control`)
//! - `control`: Control structures (`Step`, `tail_rec`)
//! - `serde`: `Serialize`/`Deserialize` for `Nested` and `Encoded`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_lists::prelude::*;
//!
//! let letters = ["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"];
//! assert_eq!(compress(&letters), vec!["a", "b", "c", "a", "d", "e"]);
//!
//! let encoded = encode_modified(&letters);
//! assert_eq!(encoded[0], Encoded::Run(4, "a"));
//! assert_eq!(encoded[1], Encoded::Single("b"));
//! assert_eq!(decode_modified(&encoded), letters.to_vec());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the enabled modules.
///
/// # Usage
///
/// ```rust
/// use lambars_lists::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
