//! # lazyseq
//!
//! Lazy, pull-driven sequence combinators.
//!
//! ## Overview
//!
//! A [`Sequence`](sequence::Sequence) is a lazy producer of elements that is
//! driven by a step consumer: every produced element is offered to a callback
//! which answers whether production should continue. Combinators wrap one or
//! two sequences in a new sequence, so pipelines never materialize
//! intermediate collections and infinite sources are safe as long as
//! something bounds the work.
//!
//! - **Single-value operators**: `filter`, `map`, `take`, `skip`, `flat_map`,
//!   `filter_map`, `flatten`, `reduce`
//! - **Keyed operators**: the same family over `(key, value)` pairs, see
//!   [`keyed`]
//! - **Zip**: lockstep pairing of two sequences through [`PullHandle`]s
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events when pull handles are released
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let total = from_iter(1..)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .take(3)
//!     .reduce(0, |accumulator, n| accumulator + n);
//!
//! assert_eq!(total, 4 + 16 + 36);
//! ```
//!
//! [`PullHandle`]: sequence::PullHandle

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

pub mod error;
pub mod fallible;
pub mod keyed;
pub mod sequence;

/// Prelude module for convenient imports.
///
/// Re-exports the sequence traits and the source constructors.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::PullError;
    pub use crate::fallible::Fallible;
    pub use crate::keyed::{KeyedSequence, from_pairs};
    pub use crate::sequence::{
        Drive, Nested, Sequence, empty, from_fn, from_iter, once, repeat_with, successors,
    };
}
