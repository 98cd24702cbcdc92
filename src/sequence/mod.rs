//! Lazy, resumable sequences and their single-value operators.
//!
//! A [`Sequence`] produces elements on demand and hands each one to a step
//! consumer, a callback returning `true` to continue or `false` to stop. The
//! sequence keeps its position in its own state, so a stopped sequence can be
//! resumed later and continues with the element after the last one delivered.
//! This suspension/resumption protocol is what lets operators be stacked
//! without buffering, and what [`PullHandle`] builds on to turn a sequence
//! into an external iterator.
//!
//! # Examples
//!
//! ## Composing Operators
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let page = from_iter(1..=100)
//!     .filter(|n| n % 3 == 0)
//!     .skip(2)
//!     .take(3)
//!     .to_vec();
//!
//! assert_eq!(page, vec![9, 12, 15]);
//! ```
//!
//! ## Suspending and Resuming
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut sequence = from_iter(1..=5).map(|n| n * 10);
//! let mut seen = Vec::new();
//!
//! let drive = sequence.resume(|n| {
//!     seen.push(n);
//!     n < 20
//! });
//! assert_eq!(drive, Drive::Stopped);
//! assert_eq!(seen, vec![10, 20]);
//!
//! let drive = sequence.resume(|n| {
//!     seen.push(n);
//!     true
//! });
//! assert_eq!(drive, Drive::Exhausted);
//! assert_eq!(seen, vec![10, 20, 30, 40, 50]);
//! ```

mod boxed;
mod filter;
mod filter_map;
mod flat_map;
mod flatten;
mod map;
mod pull;
mod skip;
mod source;
mod take;

pub use boxed::BoxedSequence;
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flat_map::FlatMap;
pub use flatten::{Flatten, Nested, Unrolled};
pub use map::Map;
pub use pull::PullHandle;
pub use skip::Skip;
pub use source::{
    Empty, FromFn, Once, RepeatWith, Successors, Values, empty, from_fn, from_iter, once,
    repeat_with, successors,
};
pub use take::Take;

use crate::fallible::Fallible;
use crate::keyed::{Enumerate, Paired, Zip};

/// How a drive of a sequence ended.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(from_iter([1, 2]).drive(|_| true), Drive::Exhausted);
/// assert_eq!(from_iter([1, 2]).drive(|_| false), Drive::Stopped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drive {
    /// The sequence has no more elements.
    Exhausted,
    /// The consumer asked to stop; the sequence may be resumed.
    Stopped,
}

impl Drive {
    /// Returns `true` if the sequence ran out of elements.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns `true` if the consumer stopped the drive.
    #[inline]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// A lazy, pull-driven, possibly infinite source of elements.
///
/// Implementors provide [`resume`](Sequence::resume); every other method is
/// derived from it.
///
/// # Contract
///
/// - Each element is passed to the consumer exactly once, in order.
/// - When the consumer returns `false`, production ceases immediately and
///   `resume` returns [`Drive::Stopped`]. The next call to `resume` continues
///   with the following element.
/// - When the source runs out, `resume` returns [`Drive::Exhausted`], and every
///   later call returns [`Drive::Exhausted`] without calling the consumer.
/// - No element is produced before the consumer asks for it.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn resume<C>(&mut self, mut consumer: C) -> Drive
///     where
///         C: FnMut(u32) -> bool,
///     {
///         while self.0 > 0 {
///             self.0 -= 1;
///             if !consumer(self.0 + 1) {
///                 return Drive::Stopped;
///             }
///         }
///         Drive::Exhausted
///     }
/// }
///
/// assert_eq!(Countdown(3).to_vec(), vec![3, 2, 1]);
/// ```
pub trait Sequence {
    /// The type of the elements produced.
    type Item;

    /// Produces elements into `consumer` until it returns `false` or the
    /// sequence is exhausted.
    fn resume<C>(&mut self, consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool;

    /// Drives the sequence once and releases it.
    ///
    /// The sequence is dropped before this returns, so any pull handles it
    /// holds are closed on every exit path.
    fn drive<C>(mut self, consumer: C) -> Drive
    where
        Self: Sized,
        C: FnMut(Self::Item) -> bool,
    {
        self.resume(consumer)
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let even = from_iter(1..=10).filter(|n| n % 2 == 0).to_vec();
    /// assert_eq!(even, vec![2, 4, 6, 8, 10]);
    /// ```
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms each element as it is visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let squared = from_iter(1..=5).map(|n| n * n).to_vec();
    /// assert_eq!(squared, vec![1, 4, 9, 16, 25]);
    /// ```
    #[inline]
    fn map<R, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, transform)
    }

    /// Yields at most the first `count` elements.
    ///
    /// The source is never asked for an element past the limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(from_iter(1..).take(3).to_vec(), vec![1, 2, 3]);
    /// assert!(from_iter(1..).take(0).to_vec().is_empty());
    /// ```
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Discards the first `count` elements and yields the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(from_iter(1..=10).skip(7).to_vec(), vec![8, 9, 10]);
    /// ```
    #[inline]
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Replaces each element by a sequence and yields those sequences back to
    /// back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let nested = from_iter(vec![vec![1, 2], vec![], vec![3, 4]]);
    /// assert_eq!(nested.flat_map(from_iter).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    fn flat_map<I, F>(self, transform: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        I: Sequence,
        F: FnMut(Self::Item) -> I,
    {
        FlatMap::new(self, transform)
    }

    /// Unrolls [`Nested`] items in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    /// use lazyseq::sequence::BoxedSequence;
    ///
    /// let items: Vec<Nested<i32, BoxedSequence<'static, i32>>> = vec![
    ///     Nested::List(vec![1, 2]),
    ///     Nested::Sequence(from_iter(3..=4).boxed()),
    ///     Nested::Value(5),
    ///     Nested::MaybeList(None),
    /// ];
    /// assert_eq!(from_iter(items).flatten().to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    fn flatten<T, I>(self) -> Flatten<Self, T, I>
    where
        Self: Sized + Sequence<Item = Nested<T, I>>,
        I: Sequence<Item = T>,
    {
        FlatMap::new(self, Nested::unroll as fn(Nested<T, I>) -> Unrolled<T, I>)
    }

    /// Applies a fallible transform and keeps only the successes.
    ///
    /// The transform may return an `Option` or a `Result`; failures are
    /// dropped without a trace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let squared = from_iter(1..=5)
    ///     .filter_map(|n| if n == 3 { Err("skipping 3") } else { Ok(n * n) })
    ///     .to_vec();
    /// assert_eq!(squared, vec![1, 4, 16, 25]);
    /// ```
    #[inline]
    fn filter_map<O, F>(self, transform: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        O: Fallible,
        F: FnMut(Self::Item) -> O,
    {
        FilterMap::new(self, transform)
    }

    /// Pairs this sequence with `other` element by element.
    ///
    /// Stops as soon as either side is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let zipped = from_iter([1, 2, 3, 4, 5]).zip(from_iter(["a", "b", "c"]));
    /// assert_eq!(zipped.pairs().to_vec(), vec![(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    #[inline]
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence,
    {
        Zip::new(self, other)
    }

    /// Keys every element by its zero-based position.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Views a sequence of pairs as a keyed sequence.
    #[inline]
    fn keyed<K, V>(self) -> Paired<Self>
    where
        Self: Sized + Sequence<Item = (K, V)>,
    {
        Paired::new(self)
    }

    /// Erases the concrete type of the sequence.
    #[inline]
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedSequence::new(self)
    }

    /// Converts the sequence into an external cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut handle = from_iter(1..).map(|n| n * 2).into_pull();
    /// assert_eq!(handle.pull(), Some(2));
    /// assert_eq!(handle.pull(), Some(4));
    /// handle.close();
    /// assert_eq!(handle.pull(), None);
    /// ```
    #[inline]
    fn into_pull(self) -> PullHandle<Self>
    where
        Self: Sized,
    {
        PullHandle::new(self)
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Folds every element left to right, starting from `initial`.
    ///
    /// Drains the whole sequence, so it never returns for an infinite one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let sum = from_iter(1..=5).reduce(0, |accumulator, n| accumulator + n);
    /// assert_eq!(sum, 15);
    /// ```
    #[inline]
    fn reduce<R, F>(self, initial: R, reducer: F) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        self.into_pull().fold(initial, reducer)
    }

    /// Calls `action` on every element.
    #[inline]
    fn for_each<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.drive(|item| {
            action(item);
            true
        });
    }

    /// Counts the elements.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.reduce(0, |count, _| count + 1)
    }

    /// Collects the elements into any [`FromIterator`] collection.
    #[inline]
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<Self::Item>,
    {
        self.into_pull().collect()
    }

    /// Collects the elements into a `Vec`.
    #[inline]
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }
}

impl<S: Sequence> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn resume<C>(&mut self, consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        (**self).resume(consumer)
    }
}
