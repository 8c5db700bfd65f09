//! Error types for the sequence algorithms.
//!
//! The algorithms themselves never fail; absent positions are `None` and
//! out-of-range arguments produce empty or clamped results. Errors only
//! arise from the checked constructors of the run-length types.

/// Represents an invalid run in a run-length encoding.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::{Encoded, RunLengthError};
///
/// let error = Encoded::try_run(0, "a").unwrap_err();
/// assert_eq!(error, RunLengthError::ZeroCount);
/// assert_eq!(format!("{error}"), "run length must be at least 1, got 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunLengthError {
    /// A run was given a repetition count of zero.
    ZeroCount,
}

impl std::fmt::Display for RunLengthError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCount => write!(formatter, "run length must be at least 1, got 0"),
        }
    }
}

impl std::error::Error for RunLengthError {}

static_assertions::assert_impl_all!(RunLengthError: Send, Sync, Copy);
