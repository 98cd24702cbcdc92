//! Keyed [`Skip`].

use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Keyed sequence without its first `count` pairs.
///
/// Created by [`KeyedSequence::skip`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Skip<S> {
    source: S,
    remaining: usize,
}

impl<S> Skip<S> {
    pub(crate) const fn new(source: S, count: usize) -> Self {
        Self {
            source,
            remaining: count,
        }
    }
}

impl<S: KeyedSequence> KeyedSequence for Skip<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        let remaining = &mut self.remaining;
        self.source.resume(|key, value| {
            if *remaining > 0 {
                *remaining -= 1;
                true
            } else {
                consumer(key, value)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::keyed::{KeyedSequence, from_pairs};
    use rstest::rstest;

    #[rstest]
    fn test_keyed_skip_then_take_is_a_page() {
        let page = from_pairs((0..10).map(|n| (n, n * n)))
            .skip(3)
            .take(2)
            .collect::<Vec<_>>();
        assert_eq!(page, vec![(3, 9), (4, 16)]);
    }
}
