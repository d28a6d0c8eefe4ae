//! The filtered view type.
//!
//! A [`Filtration`] pairs a shared sequence with an [`IndexFilter`] and
//! exposes only the filtered positions, in ascending order. It is immutable:
//! every set operation builds a new view over the same sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use crate::error::{FiltrError, Result};
use crate::filter::IndexFilter;
use crate::iter::Iter;
use crate::sequence::{self, Sequence};

/// A read-only, order-preserving view over a subset of a sequence.
///
/// The sequence is held through an [`Arc`] and compared by identity: two
/// filtrations are equal only if they view the *same* allocation and carry
/// equal filters. Equal-valued copies of a sequence are different sequences.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use filtr::Filtration;
///
/// let seq = Arc::new(vec!['a', 'b', 'c', 'd', 'e']);
/// let view = Filtration::with_filter(Arc::clone(&seq), [1, 3, 5]);
///
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.to_vec(), vec!['b', 'd']);
/// assert_eq!(view.get(1), Ok(&'d'));
/// assert!(view.get(2).is_err());
/// ```
///
/// # Negative indices
///
/// Construction drops only indices at or past the end of the sequence.
/// Negative indices are kept, sort before the non-negative ones, and read
/// from the end of the sequence, so `-1` shows the last element:
///
/// ```
/// use std::sync::Arc;
/// use filtr::Filtration;
///
/// let view = Filtration::with_filter(Arc::new(vec!['a', 'b', 'c']), [-1, 0]);
/// assert_eq!(view.indices(), &[-1, 0]);
/// assert_eq!(view.to_vec(), vec!['c', 'a']);
/// ```
///
/// A negative index reaching before the start of the sequence is kept as
/// well; reading it fails with [`FiltrError::SequenceIndexOutOfRange`].
///
/// # Combining views
///
/// The binary set operations take their sequence from the left operand and
/// do not verify that both operands view the same sequence. Combining views
/// of different sequences is accepted, but the result only makes sense for
/// views of one sequence.
pub struct Filtration<S: ?Sized> {
    seq: Arc<S>,
    filter: IndexFilter,
}

impl<S: Sequence + ?Sized> Filtration<S> {
    /// Creates the full view of `seq`, exposing every element.
    pub fn new(seq: Arc<S>) -> Self {
        let filter = IndexFilter::full(seq.len());
        Filtration { seq, filter }
    }

    /// Creates a view of `seq` restricted to `indices`.
    ///
    /// Indices past the end of `seq` are dropped silently. The remaining
    /// indices, negative ones included, are sorted and deduplicated.
    pub fn with_filter<I>(seq: Arc<S>, indices: I) -> Self
    where
        I: IntoIterator,
        I::Item: TryInto<isize>,
    {
        let filter = IndexFilter::new(indices, seq.len());
        Filtration { seq, filter }
    }

    /// Creates a view of `seq` from an already normalized filter.
    ///
    /// Indices of `filter` at or past the end of `seq` are dropped.
    pub fn from_filter(seq: Arc<S>, filter: IndexFilter) -> Self {
        let len = seq.len();
        let overshoots = filter
            .as_slice()
            .last()
            .is_some_and(|&last| usize::try_from(last).is_ok_and(|last| last >= len));
        let filter = if overshoots {
            IndexFilter::new(filter.iter(), len)
        } else {
            filter
        };
        Filtration { seq, filter }
    }

    /// Starts building a view, for callers that supply the sequence later.
    pub fn builder() -> FiltrationBuilder<S> {
        FiltrationBuilder::new()
    }

    /// The shared sequence this view reads from.
    pub fn seq(&self) -> &Arc<S> {
        &self.seq
    }

    /// The visible indices.
    pub fn filter(&self) -> &IndexFilter {
        &self.filter
    }

    /// The visible indices as an ascending slice.
    pub fn indices(&self) -> &[isize] {
        self.filter.as_slice()
    }

    /// Number of visible elements.
    pub fn len(&self) -> usize {
        self.filter.len()
    }

    /// Returns `true` if no element is visible.
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }

    /// Returns `true` if at least one element is visible.
    ///
    /// Depends only on the filter, never on the length of the sequence.
    pub fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    /// Iterates the visible elements in ascending filter order.
    ///
    /// Each call starts a fresh iteration; `.rev()` walks them in descending
    /// order.
    ///
    /// # Panics
    ///
    /// The iterator panics on reaching an index the sequence cannot produce.
    /// Use [`get`](Filtration::get) to receive that case as an error.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(&self.seq, self.filter.as_slice())
    }

    /// Collects the visible elements into a new vector.
    ///
    /// Panics under the same condition as [`iter`](Filtration::iter).
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the `index`-th visible element.
    ///
    /// Resolves `index` against the filter first, then reads the resulting
    /// index from the sequence. Each stage reports its own error:
    ///
    /// - [`FiltrError::InvalidIndex`] if `index` is not a valid `usize`
    /// - [`FiltrError::FilterIndexOutOfRange`] if `index >= self.len()`
    /// - [`FiltrError::SequenceIndexOutOfRange`] if the sequence lacks the
    ///   resolved index
    ///
    /// A negative `index` is rejected rather than counted from the end of the
    /// filter. A negative index stored in the filter counts from the end of
    /// the sequence.
    pub fn get<I>(&self, index: I) -> Result<&S::Item>
    where
        I: TryInto<usize>,
        I::Error: fmt::Display,
    {
        let index = <I as TryInto<usize>>::try_into(index).map_err(|e| {
            FiltrError::InvalidIndex {
                reason: e.to_string(),
            }
        })?;

        let seq_index = self
            .filter
            .get(index)
            .ok_or(FiltrError::FilterIndexOutOfRange {
                index,
                len: self.filter.len(),
            })?;

        sequence::resolve(&*self.seq, seq_index)
    }

    /// Returns `true` if some visible element equals `value`.
    ///
    /// Panics under the same condition as [`iter`](Filtration::iter).
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns `true` if both views read from the same sequence allocation.
    pub fn shares_sequence(&self, other: &Filtration<S>) -> bool {
        Arc::ptr_eq(&self.seq, &other.seq)
    }

    /// Elements visible in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Filtration<S>) -> Filtration<S> {
        self.combine(other, "difference", IndexFilter::difference)
    }

    /// Elements visible in both `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: &Filtration<S>) -> Filtration<S> {
        self.combine(other, "intersection", IndexFilter::intersection)
    }

    /// Elements visible in either `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Filtration<S>) -> Filtration<S> {
        self.combine(other, "union", IndexFilter::union)
    }

    /// Elements of the sequence that `self` hides.
    ///
    /// `view.union(&view.complement())` is always the full view, and
    /// complementing twice gives back an equal view.
    #[must_use]
    pub fn complement(&self) -> Filtration<S> {
        Filtration::new(Arc::clone(&self.seq)).difference(self)
    }

    /// Returns `true` if the two views have no visible position in common.
    pub fn is_disjoint(&self, other: &Filtration<S>) -> bool {
        self.filter.is_disjoint(&other.filter)
    }

    fn combine(
        &self,
        other: &Filtration<S>,
        op: &str,
        f: impl FnOnce(&IndexFilter, &IndexFilter) -> IndexFilter,
    ) -> Filtration<S> {
        if !self.shares_sequence(other) {
            log::debug!("{op} of filtrations over different sequences, keeping the left sequence");
        }
        Filtration {
            seq: Arc::clone(&self.seq),
            filter: f(&self.filter, &other.filter),
        }
    }
}

impl<S: ?Sized> Clone for Filtration<S> {
    fn clone(&self) -> Self {
        Filtration {
            seq: Arc::clone(&self.seq),
            filter: self.filter.clone(),
        }
    }
}

impl<S: ?Sized> PartialEq for Filtration<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.seq, &other.seq) && self.filter == other.filter
    }
}

impl<S: ?Sized> Eq for Filtration<S> {}

impl<S: ?Sized> Hash for Filtration<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.seq) as *const ()).hash(state);
        self.filter.hash(state);
    }
}

impl<S: fmt::Debug + ?Sized> fmt::Display for Filtration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filtration(seq={:?}, filter={:?})",
            &*self.seq, self.filter
        )
    }
}

impl<S: fmt::Debug + ?Sized> fmt::Debug for Filtration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<S: Sequence + ?Sized> Index<usize> for Filtration<S> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &S::Item {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, S: Sequence + ?Sized> IntoIterator for &'a Filtration<S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`Filtration`].
///
/// A sequence is required; [`build`](FiltrationBuilder::build) fails with
/// [`FiltrError::MissingSequence`] without one. Leaving the filter unset
/// builds the full view.
///
/// ```
/// use std::sync::Arc;
/// use filtr::{Filtration, FiltrError};
///
/// let view = Filtration::builder()
///     .seq(Arc::new(vec![0, 1, 2, 3]))
///     .filter([3, 1])
///     .build()
///     .unwrap();
/// assert_eq!(view.to_vec(), vec![1, 3]);
///
/// let missing = Filtration::<Vec<i32>>::builder().filter([0]).build();
/// assert_eq!(missing, Err(FiltrError::MissingSequence));
/// ```
pub struct FiltrationBuilder<S: ?Sized> {
    seq: Option<Arc<S>>,
    indices: Option<Vec<isize>>,
}

impl<S: Sequence + ?Sized> FiltrationBuilder<S> {
    /// Creates a builder with neither sequence nor filter.
    pub fn new() -> Self {
        FiltrationBuilder {
            seq: None,
            indices: None,
        }
    }

    /// Sets the sequence to view.
    pub fn seq(mut self, seq: Arc<S>) -> Self {
        self.seq = Some(seq);
        self
    }

    /// Sets the indices to expose.
    ///
    /// The bounds check against the sequence happens in
    /// [`build`](FiltrationBuilder::build). Values too large for an `isize`
    /// can never pass it and are dropped here.
    pub fn filter<I>(mut self, indices: I) -> Self
    where
        I: IntoIterator,
        I::Item: TryInto<isize>,
    {
        let indices = indices
            .into_iter()
            .filter_map(|index| <I::Item as TryInto<isize>>::try_into(index).ok())
            .collect();
        self.indices = Some(indices);
        self
    }

    /// Builds the view.
    pub fn build(self) -> Result<Filtration<S>> {
        let seq = self.seq.ok_or(FiltrError::MissingSequence)?;
        Ok(match self.indices {
            Some(indices) => Filtration::with_filter(seq, indices),
            None => Filtration::new(seq),
        })
    }
}

impl<S: Sequence + ?Sized> Default for FiltrationBuilder<S> {
    fn default() -> Self {
        FiltrationBuilder::new()
    }
}
