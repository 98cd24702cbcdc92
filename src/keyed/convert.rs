//! Conversions between single-value and keyed sequences.

use crate::keyed::KeyedSequence;
use crate::sequence::{self, Drive, Sequence};

/// Keyed view of a sequence of tuples.
///
/// Created by [`Sequence::keyed`] and [`from_pairs`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Paired<S> {
    source: S,
}

impl<S> Paired<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<K, V, S> KeyedSequence for Paired<S>
where
    S: Sequence<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(K, V) -> bool,
    {
        self.source.resume(|(key, value)| consumer(key, value))
    }
}

/// Creates a keyed sequence over an iterable of tuples.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
/// use std::collections::BTreeMap;
///
/// let ages = BTreeMap::from([("ann", 31), ("bob", 27)]);
/// let names = from_pairs(ages).keys().to_vec();
/// assert_eq!(names, vec!["ann", "bob"]);
/// ```
pub fn from_pairs<K, V, I>(pairs: I) -> Paired<sequence::Values<I::IntoIter>>
where
    I: IntoIterator<Item = (K, V)>,
{
    Paired::new(sequence::from_iter(pairs))
}

/// Sequence of `(key, value)` tuples. Created by [`KeyedSequence::pairs`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Pairs<S> {
    source: S,
}

impl<S> Pairs<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: KeyedSequence> Sequence for Pairs<S> {
    type Item = (S::Key, S::Value);

    #[inline]
    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        self.source.resume(|key, value| consumer((key, value)))
    }
}

/// Sequence of the keys of a keyed sequence. Created by [`KeyedSequence::keys`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Keys<S> {
    source: S,
}

impl<S> Keys<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: KeyedSequence> Sequence for Keys<S> {
    type Item = S::Key;

    #[inline]
    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        self.source.resume(|key, _| consumer(key))
    }
}

/// Sequence of the values of a keyed sequence.
///
/// Created by [`KeyedSequence::values`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Values<S> {
    source: S,
}

impl<S> Values<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: KeyedSequence> Sequence for Values<S> {
    type Item = S::Value;

    #[inline]
    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        self.source.resume(|_, value| consumer(value))
    }
}

/// Keyed sequence of `(position, element)`. Created by [`Sequence::enumerate`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Enumerate<S> {
    source: S,
    position: usize,
}

impl<S> Enumerate<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self {
            source,
            position: 0,
        }
    }
}

impl<S: Sequence> KeyedSequence for Enumerate<S> {
    type Key = usize;
    type Value = S::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(usize, S::Item) -> bool,
    {
        let position = &mut self.position;
        self.source.resume(|item| {
            let current = *position;
            *position += 1;
            consumer(current, item)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::from_iter;
    use rstest::rstest;

    #[rstest]
    fn test_pairs_and_keyed_are_inverse() {
        let pairs = from_iter([(1, 'a'), (2, 'b')]).keyed().pairs().to_vec();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    }

    #[rstest]
    fn test_keys_and_values() {
        let keys = from_pairs([(1, 'a'), (2, 'b')]).keys().to_vec();
        let values = from_pairs([(1, 'a'), (2, 'b')]).values().to_vec();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(values, vec!['a', 'b']);
    }

    #[rstest]
    fn test_enumerate_counts_across_resumes() {
        let mut enumerated = from_iter(["x", "y", "z"]).enumerate();
        let mut seen = Vec::new();

        enumerated.resume(|position, item| {
            seen.push((position, item));
            false
        });
        enumerated.resume(|position, item| {
            seen.push((position, item));
            true
        });
        assert_eq!(seen, vec![(0, "x"), (1, "y"), (2, "z")]);
    }
}
