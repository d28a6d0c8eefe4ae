//! Filtr - Filtered, order-preserving views over shared sequences.
//!
//! A [`Filtration`] exposes a subset of the positions of a sequence, in
//! ascending order, without copying or mutating the sequence. Views over the
//! same sequence combine with set operators into new views:
//!
//! - `a - b`: positions in `a` but not in `b`
//! - `a & b`: positions in both
//! - `a | b`: positions in either
//! - `-a` / `!a`: positions of the sequence not in `a`
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use filtr::Filtration;
//!
//! let seq = Arc::new((0..10).collect::<Vec<u32>>());
//!
//! let odd = Filtration::with_filter(Arc::clone(&seq), (1..10).step_by(2));
//! let small = Filtration::with_filter(Arc::clone(&seq), 0..4);
//!
//! assert_eq!((&odd & &small).to_vec(), vec![1, 3]);
//! assert_eq!((&small - &odd).to_vec(), vec![0, 2]);
//! assert_eq!((!&odd).to_vec(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(&odd | &!&odd, Filtration::new(seq));
//! ```
//!
//! # Identity
//!
//! The sequence is shared through an [`Arc`](std::sync::Arc). Equality and
//! hashing use the identity of that allocation plus the filter, so views of
//! two equal-valued but separate sequences are never equal.
//!
//! # Index Handling
//!
//! Construction never fails on bad indices: indices past the end of the
//! sequence are dropped, and the rest are sorted and deduplicated. Negative
//! indices are kept and read from the end of the sequence, so `-1` is the
//! last element. Reading with [`Filtration::get`] returns a [`FiltrError`]
//! for positions the view does not have.

mod error;
mod filter;
mod filtration;
mod iter;
mod ops;
mod sequence;

// Re-export public API
pub use error::{FiltrError, Result};
pub use filter::IndexFilter;
pub use filtration::{Filtration, FiltrationBuilder};
pub use iter::Iter;
pub use sequence::Sequence;
