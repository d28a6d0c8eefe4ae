//! Operator overloads for [`Filtration`].
//!
//! | Operator | Method |
//! |----------|--------|
//! | `a - b` | [`Filtration::difference`] |
//! | `a & b` | [`Filtration::intersection`] |
//! | `a \| b` | [`Filtration::union`] |
//! | `-a`, `!a` | [`Filtration::complement`] |
//!
//! Every operator accepts owned and borrowed operands and returns a new view
//! over the left operand's sequence.

use std::ops::{BitAnd, BitOr, Neg, Not, Sub};

use crate::filtration::Filtration;
use crate::sequence::Sequence;

macro_rules! binary_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl<S: Sequence + ?Sized> $trait<&Filtration<S>> for &Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self, other: &Filtration<S>) -> Filtration<S> {
                self.$method(other)
            }
        }

        impl<S: Sequence + ?Sized> $trait<Filtration<S>> for &Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self, other: Filtration<S>) -> Filtration<S> {
                self.$method(&other)
            }
        }

        impl<S: Sequence + ?Sized> $trait<&Filtration<S>> for Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self, other: &Filtration<S>) -> Filtration<S> {
                self.$method(other)
            }
        }

        impl<S: Sequence + ?Sized> $trait<Filtration<S>> for Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self, other: Filtration<S>) -> Filtration<S> {
                self.$method(&other)
            }
        }
    };
}

binary_op!(Sub, sub, difference);
binary_op!(BitAnd, bitand, intersection);
binary_op!(BitOr, bitor, union);

macro_rules! complement_op {
    ($trait:ident, $fn:ident) => {
        impl<S: Sequence + ?Sized> $trait for &Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self) -> Filtration<S> {
                self.complement()
            }
        }

        impl<S: Sequence + ?Sized> $trait for Filtration<S> {
            type Output = Filtration<S>;

            fn $fn(self) -> Filtration<S> {
                self.complement()
            }
        }
    };
}

complement_op!(Neg, neg);
complement_op!(Not, not);
