//! Keyed sequences: sequences that yield two values per step.
//!
//! A [`KeyedSequence`] follows exactly the same suspension/resumption
//! protocol as [`Sequence`], but its consumer receives a key and a value
//! instead of a single element. The operators here mirror the single-value
//! ones in [`crate::sequence`]; they are kept as a parallel family so the
//! common single-value path never pays for building pairs.
//!
//! [`Zip`] is the natural producer of keyed sequences: it pairs the elements
//! of two independent sequences.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let scores = from_pairs([("ann", 7), ("bob", 3), ("cid", 9)])
//!     .filter(|_, score| *score > 5)
//!     .map(|name, score| (name.to_uppercase(), score * 10))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(scores, vec![("ANN".to_string(), 70), ("CID".to_string(), 90)]);
//! ```

mod convert;
mod filter;
mod filter_map;
mod flat_map;
mod map;
mod skip;
mod take;
mod zip;

pub use convert::{Enumerate, Keys, Pairs, Paired, Values, from_pairs};
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flat_map::FlatMap;
pub use map::Map;
pub use skip::Skip;
pub use take::Take;
pub use zip::Zip;

use crate::fallible::Fallible;
use crate::sequence::{BoxedSequence, Drive, PullHandle, Sequence};

/// Pull handle over a keyed sequence, yielding `(key, value)` tuples.
pub type KeyedPullHandle<S> = PullHandle<Pairs<S>>;

/// A keyed sequence whose concrete type has been erased.
pub type BoxedKeyedSequence<'a, K, V> = Paired<BoxedSequence<'a, (K, V)>>;

/// A lazy, pull-driven, possibly infinite source of key/value pairs.
///
/// The contract is the one of [`Sequence`], with a two-argument consumer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seen = Vec::new();
/// let drive = from_pairs([(1, 'a'), (2, 'b'), (3, 'c')]).drive(|key, value| {
///     seen.push((key, value));
///     key < 2
/// });
///
/// assert_eq!(drive, Drive::Stopped);
/// assert_eq!(seen, vec![(1, 'a'), (2, 'b')]);
/// ```
pub trait KeyedSequence {
    /// The type of the first value of each step.
    type Key;
    /// The type of the second value of each step.
    type Value;

    /// Produces pairs into `consumer` until it returns `false` or the sequence
    /// is exhausted.
    fn resume<C>(&mut self, consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool;

    /// Drives the sequence once and releases it.
    fn drive<C>(mut self, consumer: C) -> Drive
    where
        Self: Sized,
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        self.resume(consumer)
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Keeps only the pairs for which `predicate` returns `true`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms each pair into a new pair, possibly with a different key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let swapped = from_pairs([(1, "one"), (2, "two")])
    ///     .map(|number, name| (name, number))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(swapped, vec![("one", 1), ("two", 2)]);
    /// ```
    #[inline]
    fn map<K, V, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value) -> (K, V),
    {
        Map::new(self, transform)
    }

    /// Yields at most the first `count` pairs.
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Discards the first `count` pairs and yields the rest.
    #[inline]
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Replaces each pair by a keyed sequence and yields those back to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let expanded = from_pairs([("x", 2), ("y", 1)])
    ///     .flat_map(|name, times| from_iter(0..times).map(move |index| (name, index)).keyed())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(expanded, vec![("x", 0), ("x", 1), ("y", 0)]);
    /// ```
    #[inline]
    fn flat_map<I, F>(self, transform: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        I: KeyedSequence,
        F: FnMut(Self::Key, Self::Value) -> I,
    {
        FlatMap::new(self, transform)
    }

    /// Applies a fallible pair transform and keeps only the successes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let parsed = from_pairs([("a", "1"), ("b", "x"), ("c", "3")])
    ///     .filter_map(|key, text| text.parse::<i32>().map(|number| (key, number)))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(parsed, vec![("a", 1), ("c", 3)]);
    /// ```
    #[inline]
    fn filter_map<O, F>(self, transform: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        O: Fallible,
        F: FnMut(Self::Key, Self::Value) -> O,
    {
        FilterMap::new(self, transform)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Views the keyed sequence as a sequence of tuples.
    #[inline]
    fn pairs(self) -> Pairs<Self>
    where
        Self: Sized,
    {
        Pairs::new(self)
    }

    /// Keeps only the keys.
    #[inline]
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }

    /// Keeps only the values.
    #[inline]
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Erases the concrete type of the sequence.
    #[inline]
    fn boxed<'a>(self) -> BoxedKeyedSequence<'a, Self::Key, Self::Value>
    where
        Self: Sized + 'a,
    {
        Paired::new(self.pairs().boxed())
    }

    /// Converts the keyed sequence into an external cursor over tuples.
    #[inline]
    fn into_pull(self) -> KeyedPullHandle<Self>
    where
        Self: Sized,
    {
        self.pairs().into_pull()
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Folds every pair left to right, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let weighted = from_pairs([(2, 10), (3, 100)])
    ///     .reduce(0, |total, weight, amount| total + weight * amount);
    /// assert_eq!(weighted, 320);
    /// ```
    #[inline]
    fn reduce<R, F>(self, initial: R, mut reducer: F) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Key, Self::Value) -> R,
    {
        self.into_pull()
            .fold(initial, |accumulator, (key, value)| {
                reducer(accumulator, key, value)
            })
    }

    /// Calls `action` on every pair.
    #[inline]
    fn for_each<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value),
    {
        self.drive(|key, value| {
            action(key, value);
            true
        });
    }

    /// Counts the pairs.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.reduce(0, |count, _, _| count + 1)
    }

    /// Collects the pairs into any collection of tuples.
    #[inline]
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<(Self::Key, Self::Value)>,
    {
        self.into_pull().collect()
    }
}

impl<S: KeyedSequence> KeyedSequence for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn resume<C>(&mut self, consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        (**self).resume(consumer)
    }
}
