//! Control structures for stack-safe iteration.
//!
//! This module provides the building blocks the sequence algorithms use to
//! express "step until done" definitions without growing the call stack:
//!
//! - [`Step`]: One step of a tail-recursive computation
//! - [`tail_rec`]: Drives a step function in a loop until it is done
//!
//! # Examples
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use lambars_lists::control::{Step, tail_rec};
//!
//! // sum_to(n, accumulator) = if n == 0 { accumulator } else { sum_to(n - 1, accumulator + n) }
//! let sum = tail_rec((100_000_u64, 0_u64), |(n, accumulator)| {
//!     if n == 0 {
//!         Step::Done(accumulator)
//!     } else {
//!         Step::Continue((n - 1, accumulator + n))
//!     }
//! });
//! assert_eq!(sum, 5_000_050_000);
//! ```

mod tail_rec;

pub use tail_rec::{Step, tail_rec};
