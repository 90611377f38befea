use thiserror::Error;

/// The error type for fallible operations on a
/// [`Sequence`](crate::Sequence).
///
/// Every error is raised synchronously at the call boundary, before any
/// work is done; no operation ever returns a partial result alongside an
/// error. Operations are deterministic, so retrying a failed call with the
/// same inputs reproduces the same error.
///
/// # Examples
///
/// ```
/// use cleave::{Error, Sequence};
///
/// let s = Sequence::from(["foo", "bar", "baz"]);
/// assert_eq!(s.splice(0, -1), Err(Error::NegativeCount { count: -1 }));
///
/// let empty: Sequence<&str> = Sequence::new();
/// assert_eq!(empty.pop_back(), Err(Error::EmptySequence));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A counted operation (`partition`, `splice`, `splice_with`,
    /// `take_front`, `take_back`) was handed a negative count.
    ///
    /// This is rejected before any index normalization takes place, for
    /// sequences of every length (empty sequences included). An oversized
    /// count, by contrast, is never an error: it clamps to the available
    /// remainder.
    #[error("invalid argument `count`: expected a non-negative count, got {count}")]
    NegativeCount {
        /// The offending count, as supplied by the caller.
        count: isize,
    },

    /// A single-element convenience form ([`pop_front`], [`pop_back`]) was
    /// invoked on an empty sequence.
    ///
    /// The counted forms ([`take_front`], [`take_back`]) never raise this;
    /// they clamp and return empty segments instead.
    ///
    /// [`pop_front`]: crate::Sequence::pop_front
    /// [`pop_back`]: crate::Sequence::pop_back
    /// [`take_front`]: crate::Sequence::take_front
    /// [`take_back`]: crate::Sequence::take_back
    #[error("invalid operation: cannot take an element from an empty sequence")]
    EmptySequence,
}

/// A specialized [`Result`](core::result::Result) type for sequence
/// operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
