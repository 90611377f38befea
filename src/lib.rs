//! Pure splice, take, and append primitives over immutable shared sequences.
//!
//! [`Sequence<T>`] is an ordered, fixed-length collection that is immutable
//! once created. Every transformation ([`splice`], [`take_front`],
//! [`take_back`], [`append`], [`prepend`], and friends) is a pure function:
//! it never mutates its input and returns a *new* sequence reflecting the
//! requested change. Because nothing is ever mutated in place, sequences can
//! be shared freely across threads with no synchronization.
//!
//! The engine behind the removal operations is a single two-way segmentation
//! primitive, [`partition`]: given a position and a span length it produces
//! the *kept* segment (everything outside the span) and the *removed* segment
//! (the span itself). Negative positions count back from the end, oversized
//! spans clamp to the available remainder, and allocations the caller cannot
//! observe are skipped.
//!
//! [`splice`]: Sequence::splice
//! [`partition`]: Sequence::partition
//! [`take_front`]: Sequence::take_front
//! [`take_back`]: Sequence::take_back
//! [`append`]: Sequence::append
//! [`prepend`]: Sequence::prepend
//!
//! ## Examples
//!
//! ### Splicing
//!
//! ```rust
//! use cleave::Sequence;
//!
//! let s = Sequence::from(["foo", "bar", "baz"]);
//!
//! // remove one element at position 1, keeping what was removed
//! let p = s.partition(1, 1, true)?;
//! assert_eq!(p.kept, ["foo", "baz"]);
//! assert_eq!(p.removed.unwrap(), ["bar"]);
//!
//! // negative positions count back from the end
//! let kept = s.splice(-1, 1)?;
//! assert_eq!(kept, ["foo", "bar"]);
//!
//! // the source is untouched throughout
//! assert_eq!(s, ["foo", "bar", "baz"]);
//! # Ok::<(), cleave::Error>(())
//! ```
//!
//! ### Taking from either end
//!
//! ```rust
//! use cleave::Sequence;
//!
//! let s = Sequence::from([1, 2, 3, 4]);
//!
//! let front = s.take_front(2)?;
//! assert_eq!(front.taken, [1, 2]);
//! assert_eq!(front.rest, [3, 4]);
//!
//! let back = s.take_back(2)?;
//! assert_eq!(back.taken, [3, 4]);
//! assert_eq!(back.rest, [1, 2]);
//!
//! // single-element convenience forms detach one element
//! let (first, rest) = s.pop_front()?;
//! assert_eq!(first, 1);
//! assert_eq!(rest, [2, 3, 4]);
//! # Ok::<(), cleave::Error>(())
//! ```
//!
//! ### Identity fast paths
//!
//! Some no-op transformations hand back the original sequence handle instead
//! of an equal copy. This is part of the contract, observable through
//! [`Sequence::same_instance`], and lets callers detect a no-op without
//! comparing elements:
//!
//! ```rust
//! use cleave::Sequence;
//!
//! let s = Sequence::from([1, 2, 3]);
//!
//! // appending nothing is a no-op and allocates nothing
//! assert!(s.append_all(&[]).same_instance(&s));
//!
//! // appending something allocates a fresh sequence
//! assert!(!s.append(4).same_instance(&s));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod error;

pub use error::{Error, Result};

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, Range};

/// An ordered, fixed-length, immutable sequence of elements.
///
/// A `Sequence<T>` owns a shared, immutable buffer. Cloning a sequence is
/// `O(1)` and yields a handle to the *same* buffer; every transforming
/// operation returns a newly allocated sequence (except the documented
/// identity fast paths, which return the original handle).
///
/// The element type is opaque to the library: operations only ever copy
/// elements positionally, so transformations require `T: Clone` but never
/// compare, hash, or construct elements.
///
/// # Examples
///
/// ```
/// use cleave::Sequence;
///
/// let s = Sequence::from([10, 20, 30]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s[1], 20);
///
/// // transformations leave the source untouched
/// let grown = s.append(40);
/// assert_eq!(grown, [10, 20, 30, 40]);
/// assert_eq!(s, [10, 20, 30]);
/// ```
pub struct Sequence<T> {
    items: Arc<[T]>,
}

/// The result of [`Sequence::partition`]: the two disjoint, order-preserving
/// segments of a sequence.
///
/// `removed` is `None` exactly when the caller opted out of computing the
/// removed segment (`compute_removed = false`); an empty `Some` means the
/// segment was computed and nothing fell inside the removal span. Whenever
/// `removed` is present, `kept.len() + removed.len()` equals the length of
/// the source sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    /// Everything outside the removal span, in source order.
    pub kept: Sequence<T>,
    /// The removal span itself, in source order, if it was requested.
    pub removed: Option<Sequence<T>>,
}

/// The result of [`Sequence::take_front`] and [`Sequence::take_back`].
///
/// # Examples
///
/// ```
/// use cleave::Sequence;
///
/// let s = Sequence::from(["a", "b", "c"]);
/// let t = s.take_back(1)?;
/// assert_eq!(t.taken, ["c"]);
/// assert_eq!(t.rest, ["a", "b"]);
/// # Ok::<(), cleave::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Take<T> {
    /// The elements taken from the end in question, in source order.
    pub taken: Sequence<T>,
    /// Everything else, in source order.
    pub rest: Sequence<T>,
}

/// A removal span normalized against a concrete sequence length:
/// `start <= seq_len` and `start + len <= seq_len` always hold.
#[derive(Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// Normalizes `(index, count)` against a sequence of length `seq_len`.
    ///
    /// A negative index counts back from the end and saturates at the start;
    /// a start past the end yields an empty span; a count overshooting the
    /// end clamps to the remainder. The result never reaches outside the
    /// sequence.
    fn normalize(seq_len: usize, index: isize, count: usize) -> Span {
        let start = if index < 0 {
            seq_len.saturating_sub(index.unsigned_abs())
        } else {
            seq_len.min(index as usize)
        };
        Span {
            start,
            len: count.min(seq_len - start),
        }
    }

    fn is_empty(self) -> bool {
        self.len == 0
    }

    fn end(self) -> usize {
        self.start + self.len
    }

    fn range(self) -> Range<usize> {
        self.start..self.end()
    }
}

fn checked_count(count: isize) -> Result<usize> {
    usize::try_from(count).map_err(|_| Error::NegativeCount { count })
}

impl<T> Sequence<T> {
    /// Constructs a new, empty `Sequence<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s: Sequence<i32> = Sequence::new();
    /// assert!(s.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            items: Vec::new().into(),
        }
    }

    /// Returns the number of elements in the sequence, also referred to
    /// as its 'length'.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3]);
    /// assert_eq!(s.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s: Sequence<i32> = Sequence::new();
    /// assert!(s.is_empty());
    /// assert!(!Sequence::from([1]).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Extracts a slice containing the entire sequence.
    ///
    /// Equivalent to `&s[..]`.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` if `self` and `other` are handles to the *same*
    /// underlying buffer, as opposed to equal copies.
    ///
    /// The identity fast paths in this library are specified in terms of
    /// this check: an operation that documents "returns the original
    /// sequence" returns something for which `same_instance` holds, and one
    /// that documents "returns a copy" returns something for which it does
    /// not, even when the two compare equal element for element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3]);
    ///
    /// // clones share the buffer
    /// assert!(s.clone().same_instance(&s));
    ///
    /// // equal but independently built sequences do not
    /// let other = Sequence::from([1, 2, 3]);
    /// assert_eq!(s, other);
    /// assert!(!s.same_instance(&other));
    /// ```
    pub fn same_instance(&self, other: &Sequence<T>) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> Sequence<T> {
    /// Splits the sequence into the segment outside the removal span
    /// (`kept`) and the span itself (`removed`).
    ///
    /// This is the primitive underneath [`splice`], [`splice_with`],
    /// [`take_front`], and [`take_back`]. The removal span starts at
    /// `index` and covers up to `count` elements:
    ///
    /// * a negative `index` counts back from the end, saturating at the
    ///   start (`-1` is the last element);
    /// * an `index` at or past the end removes nothing;
    /// * a `count` overshooting the end clamps silently to the available
    ///   remainder; it never errors and never reads out of bounds.
    ///
    /// Both segments preserve the relative order of the source, and
    /// `kept.len() + removed.len()` equals `self.len()` whenever `removed`
    /// is present.
    ///
    /// When `compute_removed` is `false` the removed segment is not
    /// allocated at all and the result's `removed` field is `None`; callers
    /// that only need the surviving elements should prefer [`splice`],
    /// which is exactly this opt-out.
    ///
    /// Two allocation rules are part of the contract:
    ///
    /// * partitioning an *empty* sequence hands back the original handle as
    ///   `kept` ([`same_instance`] holds), with no allocation at all;
    /// * a removal span that misses the sequence entirely (`count == 0` or
    ///   `index` past the end) produces a fresh *copy* as `kept`, never the
    ///   original handle, so callers may always treat a non-trivial result
    ///   as independently owned.
    ///
    /// [`splice`]: Sequence::splice
    /// [`splice_with`]: Sequence::splice_with
    /// [`take_front`]: Sequence::take_front
    /// [`take_back`]: Sequence::take_back
    /// [`same_instance`]: Sequence::same_instance
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `count` is negative. This is
    /// checked before anything else, so it fires for sequences of every
    /// length, including empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from(["foo", "bar", "baz"]);
    ///
    /// let p = s.partition(1, 1, true)?;
    /// assert_eq!(p.kept, ["foo", "baz"]);
    /// assert_eq!(p.removed.unwrap(), ["bar"]);
    ///
    /// // opting out of the removed segment skips its allocation
    /// let p = s.partition(1, 1, false)?;
    /// assert_eq!(p.kept, ["foo", "baz"]);
    /// assert!(p.removed.is_none());
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn partition(
        &self,
        index: isize,
        count: isize,
        compute_removed: bool,
    ) -> Result<Partitioned<T>> {
        let count = checked_count(count)?;
        Ok(self.partition_at(index, count, compute_removed))
    }

    /// Partitions with a count already known to be non-negative.
    fn partition_at(&self, index: isize, count: usize, compute_removed: bool) -> Partitioned<T> {
        if self.is_empty() {
            // identity fast path: hand back the same buffer untouched
            return Partitioned {
                kept: self.clone(),
                removed: compute_removed.then(Sequence::new),
            };
        }

        let span = Span::normalize(self.len(), index, count);

        if span.is_empty() {
            // nothing removed, but the caller still gets a copy it owns
            // outright rather than the original handle
            return Partitioned {
                kept: Sequence::from(self.as_slice()),
                removed: compute_removed.then(Sequence::new),
            };
        }

        if span.len == self.len() {
            // the span swallows the whole sequence
            return Partitioned {
                kept: Sequence::new(),
                removed: compute_removed.then(|| Sequence::from(self.as_slice())),
            };
        }

        // stitch the prefix and suffix around the span into one
        // exact-capacity buffer
        let mut kept = Vec::with_capacity(self.len() - span.len);
        kept.extend_from_slice(&self.items[..span.start]);
        kept.extend_from_slice(&self.items[span.end()..]);

        let removed = compute_removed.then(|| Sequence::from(&self.items[span.range()]));

        Partitioned {
            kept: kept.into(),
            removed,
        }
    }

    /// Removes up to `count` elements starting at `index` and returns the
    /// surviving sequence.
    ///
    /// The removed segment is never allocated; use
    /// [`partition`](Sequence::partition) or
    /// [`splice_with`](Sequence::splice_with) to obtain it. Index
    /// normalization and clamping follow the rules documented on
    /// [`partition`](Sequence::partition).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `count` is negative, for
    /// sequences of every length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from(["foo", "bar", "baz"]);
    /// assert_eq!(s.splice(1, 1)?, ["foo", "baz"]);
    /// assert_eq!(s.splice(-1, 1)?, ["foo", "bar"]);
    ///
    /// // oversized counts clamp instead of erroring
    /// assert_eq!(s.splice(1, 100)?, ["foo"]);
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn splice(&self, index: isize, count: isize) -> Result<Sequence<T>> {
        let count = checked_count(count)?;
        Ok(self.partition_at(index, count, false).kept)
    }

    /// Removes everything from `index` to the end and returns the surviving
    /// prefix.
    ///
    /// Equivalent to [`splice`](Sequence::splice) with a count covering the
    /// whole remainder; since there is no count to validate, this form is
    /// infallible.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(s.splice_from(2), [1, 2]);
    /// assert_eq!(s.splice_from(-1), [1, 2, 3]);
    /// assert!(s.splice_from(0).is_empty());
    /// ```
    pub fn splice_from(&self, index: isize) -> Sequence<T> {
        self.partition_at(index, self.len(), false).kept
    }

    /// Removes up to `count` elements starting at `index` and folds the two
    /// segments through `combine`.
    ///
    /// Both segments are computed; `combine` receives `(kept, removed)` and
    /// its return value becomes the result of the call. This is the hook
    /// for layering richer shapes on top of the pure partition, e.g.
    /// concatenating replacement elements into the removed segment's
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `count` is negative; `combine`
    /// is not invoked in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3, 4]);
    /// let summary = s.splice_with(1, 2, |kept, removed| {
    ///     (kept.len(), removed.len())
    /// })?;
    /// assert_eq!(summary, (2, 2));
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn splice_with<R, F>(&self, index: isize, count: isize, combine: F) -> Result<R>
    where
        F: FnOnce(Sequence<T>, Sequence<T>) -> R,
    {
        let count = checked_count(count)?;
        let partitioned = self.partition_at(index, count, true);
        // removed was requested, so it is always present here
        let removed = partitioned.removed.unwrap_or_default();
        Ok(combine(partitioned.kept, removed))
    }

    /// Takes up to `count` elements from the front of the sequence.
    ///
    /// A `count` beyond the length clamps without error: the entire
    /// sequence is taken and the rest is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from(["foo", "bar", "baz"]);
    ///
    /// let t = s.take_front(2)?;
    /// assert_eq!(t.taken, ["foo", "bar"]);
    /// assert_eq!(t.rest, ["baz"]);
    ///
    /// let t = s.take_front(100)?;
    /// assert_eq!(t.taken, ["foo", "bar", "baz"]);
    /// assert!(t.rest.is_empty());
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn take_front(&self, count: isize) -> Result<Take<T>> {
        let count = checked_count(count)?.min(self.len());
        Ok(self.take_span(0, count))
    }

    /// Takes up to `count` elements from the back of the sequence.
    ///
    /// A `count` beyond the length clamps without error: the entire
    /// sequence is taken and the rest is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from(["foo", "bar", "baz"]);
    ///
    /// let t = s.take_back(2)?;
    /// assert_eq!(t.taken, ["bar", "baz"]);
    /// assert_eq!(t.rest, ["foo"]);
    ///
    /// let t = s.take_back(100)?;
    /// assert_eq!(t.taken, ["foo", "bar", "baz"]);
    /// assert!(t.rest.is_empty());
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn take_back(&self, count: isize) -> Result<Take<T>> {
        let count = checked_count(count)?.min(self.len());
        Ok(self.take_span((self.len() - count) as isize, count))
    }

    fn take_span(&self, start: isize, count: usize) -> Take<T> {
        let partitioned = self.partition_at(start, count, true);
        Take {
            // removed was requested, so it is always present here
            taken: partitioned.removed.unwrap_or_default(),
            rest: partitioned.kept,
        }
    }

    /// Detaches the first element, returning it together with the rest of
    /// the sequence.
    ///
    /// This is the single-element convenience form of
    /// [`take_front`](Sequence::take_front); unlike the counted form, it
    /// fails on an empty sequence instead of clamping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3]);
    /// let (first, rest) = s.pop_front()?;
    /// assert_eq!(first, 1);
    /// assert_eq!(rest, [2, 3]);
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn pop_front(&self) -> Result<(T, Sequence<T>)> {
        let first = self.items.first().cloned().ok_or(Error::EmptySequence)?;
        Ok((first, Sequence::from(&self.items[1..])))
    }

    /// Detaches the last element, returning it together with the rest of
    /// the sequence.
    ///
    /// This is the single-element convenience form of
    /// [`take_back`](Sequence::take_back); unlike the counted form, it
    /// fails on an empty sequence instead of clamping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2, 3]);
    /// let (last, rest) = s.pop_back()?;
    /// assert_eq!(last, 3);
    /// assert_eq!(rest, [1, 2]);
    /// # Ok::<(), cleave::Error>(())
    /// ```
    pub fn pop_back(&self) -> Result<(T, Sequence<T>)> {
        let last = self.items.last().cloned().ok_or(Error::EmptySequence)?;
        Ok((last, Sequence::from(&self.items[..self.len() - 1])))
    }

    /// Returns a new sequence with `item` appended after the existing
    /// elements.
    ///
    /// Always allocates; a single-element append can never be a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2]);
    /// assert_eq!(s.append(3), [1, 2, 3]);
    /// assert_eq!(s, [1, 2]);
    /// ```
    pub fn append(&self, item: T) -> Sequence<T> {
        let mut combined = Vec::with_capacity(self.len() + 1);
        combined.extend_from_slice(&self.items);
        combined.push(item);
        combined.into()
    }

    /// Returns a new sequence with all of `items` appended after the
    /// existing elements.
    ///
    /// When `items` is empty nothing would change, and the *original
    /// handle* is returned instead of a copy
    /// ([`same_instance`](Sequence::same_instance) holds, zero
    /// allocations). This identity fast path is part of the contract, not
    /// merely an optimization.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([1, 2]);
    /// assert_eq!(s.append_all(&[3, 4]), [1, 2, 3, 4]);
    ///
    /// // appending nothing returns the same handle
    /// assert!(s.append_all(&[]).same_instance(&s));
    /// ```
    pub fn append_all(&self, items: &[T]) -> Sequence<T> {
        if items.is_empty() {
            return self.clone();
        }
        let mut combined = Vec::with_capacity(self.len() + items.len());
        combined.extend_from_slice(&self.items);
        combined.extend_from_slice(items);
        combined.into()
    }

    /// Returns a new sequence with `item` inserted before the existing
    /// elements.
    ///
    /// Always allocates; a single-element prepend can never be a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([2, 3]);
    /// assert_eq!(s.prepend(1), [1, 2, 3]);
    /// ```
    pub fn prepend(&self, item: T) -> Sequence<T> {
        let mut combined = Vec::with_capacity(self.len() + 1);
        combined.push(item);
        combined.extend_from_slice(&self.items);
        combined.into()
    }

    /// Returns a new sequence with all of `items` inserted before the
    /// existing elements.
    ///
    /// When `items` is empty the *original handle* is returned, exactly as
    /// for [`append_all`](Sequence::append_all).
    ///
    /// # Examples
    ///
    /// ```
    /// use cleave::Sequence;
    ///
    /// let s = Sequence::from([3, 4]);
    /// assert_eq!(s.prepend_all(&[1, 2]), [1, 2, 3, 4]);
    ///
    /// // prepending nothing returns the same handle
    /// assert!(s.prepend_all(&[]).same_instance(&s));
    /// ```
    pub fn prepend_all(&self, items: &[T]) -> Sequence<T> {
        if items.is_empty() {
            return self.clone();
        }
        let mut combined = Vec::with_capacity(self.len() + items.len());
        combined.extend_from_slice(items);
        combined.extend_from_slice(&self.items);
        combined.into()
    }
}

impl<T> Clone for Sequence<T> {
    /// Returns a handle to the same buffer; `O(1)`, no element is copied.
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Sequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Sequence<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Sequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
