//! The host sequence abstraction.
//!
//! A [`Filtration`](crate::Filtration) can view anything implementing
//! [`Sequence`]: a finite, ordered collection with bounds-checked random
//! access by position.

use std::collections::VecDeque;

use crate::error::{FiltrError, Result};

/// Ordered, finite, randomly accessible storage.
///
/// Implemented for slices, arrays, `Vec`, `Box<[T]>` and `VecDeque`. Custom
/// containers can implement it manually:
///
/// ```
/// use filtr::Sequence;
///
/// struct Readings(Vec<f64>);
///
/// impl Sequence for Readings {
///     type Item = f64;
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn get(&self, index: usize) -> Option<&f64> {
///         self.0.get(index)
///     }
/// }
///
/// let readings = Readings(vec![0.5, 1.5, 2.5]);
/// assert_eq!(readings.len(), 3);
/// assert_eq!(readings.get(1), Some(&1.5));
/// assert_eq!(readings.get(3), None);
/// ```
///
/// `get` must return `Some` for every index below `len`. A
/// [`Filtration`](crate::Filtration) panics while iterating over a position
/// the sequence cannot produce.
pub trait Sequence {
    /// Element type yielded by the sequence.
    type Item;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if it is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads the element at a filter index.
///
/// Negative indices count from the end of the sequence, so `-1` is the last
/// element.
pub(crate) fn resolve<S: Sequence + ?Sized>(seq: &S, index: isize) -> Result<&S::Item> {
    let len = seq.len();
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };
    position
        .and_then(|position| seq.get(position))
        .ok_or(FiltrError::SequenceIndexOutOfRange { index, len })
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}
