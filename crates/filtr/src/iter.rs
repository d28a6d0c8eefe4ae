//! Iteration over the visible elements of a filtration.

use std::iter::FusedIterator;
use std::slice;

use crate::sequence::{self, Sequence};

/// Borrowing iterator over the elements a [`Filtration`](crate::Filtration)
/// exposes, in ascending filter order.
///
/// Created by [`Filtration::iter`](crate::Filtration::iter). Use `.rev()` for
/// descending order. Negative filter indices read from the end of the
/// sequence.
///
/// # Panics
///
/// Yields exactly one element per filter index. An index the sequence cannot
/// produce (a negative index reaching before the start, or a hole in a custom
/// [`Sequence`]) panics with [`FiltrError::SequenceIndexOutOfRange`]'s
/// message instead of ending the iteration early.
///
/// [`FiltrError::SequenceIndexOutOfRange`]: crate::FiltrError::SequenceIndexOutOfRange
pub struct Iter<'a, S: ?Sized> {
    seq: &'a S,
    indices: slice::Iter<'a, isize>,
}

impl<'a, S: ?Sized> Iter<'a, S> {
    pub(crate) fn new(seq: &'a S, indices: &'a [isize]) -> Self {
        Iter {
            seq,
            indices: indices.iter(),
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    fn element(&self, index: isize) -> &'a S::Item {
        let seq: &'a S = self.seq;
        match sequence::resolve(seq, index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            seq: self.seq,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let &index = self.indices.next()?;
        Some(self.element(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &index = self.indices.next_back()?;
        Some(self.element(index))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {
    fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}
