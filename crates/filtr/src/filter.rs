//! Normalized index sets.
//!
//! An [`IndexFilter`] is the set of indices a [`Filtration`](crate::Filtration)
//! exposes. It is always strictly ascending, so set operations run as
//! two-pointer merges over the sorted indices.
//!
//! Indices are signed. Construction only rejects indices at or past the end
//! of the sequence; negative indices are kept and count from the end when
//! the sequence is read.

use std::cmp::Ordering;
use std::fmt;

/// A strictly ascending set of indices into a sequence.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexFilter {
    indices: Vec<isize>,
}

impl IndexFilter {
    /// Creates a filter from arbitrary indices for a sequence of length `len`.
    ///
    /// Indices that are `>= len` are dropped without error, as are values too
    /// large for an `isize`. Negative indices are kept. The rest are sorted
    /// and deduplicated by value, so `-1` and `len - 1` are distinct entries.
    ///
    /// ```
    /// use filtr::IndexFilter;
    ///
    /// let filter = IndexFilter::new([7, 3, -1, 3, 12, 0], 10);
    /// assert_eq!(filter.as_slice(), &[-1, 0, 3, 7]);
    /// ```
    pub fn new<I>(indices: I, len: usize) -> Self
    where
        I: IntoIterator,
        I::Item: TryInto<isize>,
    {
        let bound = isize::try_from(len).unwrap_or(isize::MAX);
        let mut seen = 0usize;
        let mut kept: Vec<isize> = indices
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(|index| <I::Item as TryInto<isize>>::try_into(index).ok())
            .filter(|&index| index < bound)
            .collect();

        let dropped = seen - kept.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} of {seen} indices not below {len}");
        }

        kept.sort_unstable();
        kept.dedup();
        IndexFilter { indices: kept }
    }

    /// Creates the filter covering every position `0..len`.
    pub fn full(len: usize) -> Self {
        let bound = isize::try_from(len).unwrap_or(isize::MAX);
        IndexFilter {
            indices: (0..bound).collect(),
        }
    }

    /// Creates an empty filter.
    pub fn empty() -> Self {
        IndexFilter::default()
    }

    fn from_sorted(indices: Vec<isize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        IndexFilter { indices }
    }

    /// Number of indices in the filter.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the filter holds no indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the sequence index stored at `position` within the filter.
    pub fn get(&self, position: usize) -> Option<isize> {
        self.indices.get(position).copied()
    }

    /// Returns `true` if `index` is part of the filter.
    pub fn contains(&self, index: isize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The indices as an ascending slice.
    pub fn as_slice(&self) -> &[isize] {
        &self.indices
    }

    /// Iterates the indices in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, isize>> {
        self.indices.iter().copied()
    }

    /// Indices in `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &IndexFilter) -> IndexFilter {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        let mut left = self.indices.iter().peekable();
        let mut right = other.indices.iter().peekable();
        let mut result = Vec::with_capacity(self.len());

        while let (Some(&&l), Some(&&r)) = (left.peek(), right.peek()) {
            match l.cmp(&r) {
                Ordering::Less => {
                    result.push(l);
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    left.next();
                    right.next();
                }
            }
        }

        result.extend(left);
        IndexFilter::from_sorted(result)
    }

    /// Indices present in both filters.
    #[must_use]
    pub fn intersection(&self, other: &IndexFilter) -> IndexFilter {
        if self.is_empty() || other.is_empty() {
            return IndexFilter::empty();
        }

        let mut left = self.indices.iter().peekable();
        let mut right = other.indices.iter().peekable();
        let mut result = Vec::with_capacity(self.len().min(other.len()));

        while let (Some(&&l), Some(&&r)) = (left.peek(), right.peek()) {
            match l.cmp(&r) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    result.push(l);
                    left.next();
                    right.next();
                }
            }
        }

        IndexFilter::from_sorted(result)
    }

    /// Indices present in either filter.
    #[must_use]
    pub fn union(&self, other: &IndexFilter) -> IndexFilter {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut left = self.indices.iter().peekable();
        let mut right = other.indices.iter().peekable();
        let mut result = Vec::with_capacity(self.len() + other.len());

        while let (Some(&&l), Some(&&r)) = (left.peek(), right.peek()) {
            match l.cmp(&r) {
                Ordering::Less => {
                    result.push(l);
                    left.next();
                }
                Ordering::Greater => {
                    result.push(r);
                    right.next();
                }
                Ordering::Equal => {
                    result.push(l);
                    left.next();
                    right.next();
                }
            }
        }

        result.extend(left);
        result.extend(right);
        IndexFilter::from_sorted(result)
    }

    /// Indices in `0..len` that are not in `self`.
    ///
    /// Negative indices never appear in the result, so complementing a filter
    /// with negative indices twice does not give it back.
    #[must_use]
    pub fn complement(&self, len: usize) -> IndexFilter {
        IndexFilter::full(len).difference(self)
    }

    /// Returns `true` if the two filters share no index.
    pub fn is_disjoint(&self, other: &IndexFilter) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => return false,
            }
        }
        true
    }
}

impl fmt::Debug for IndexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.indices).finish()
    }
}

impl<'a> IntoIterator for &'a IndexFilter {
    type Item = isize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, isize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
