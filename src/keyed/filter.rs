//! Keyed [`Filter`].

use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Keyed sequence of the pairs that satisfy a predicate.
///
/// Created by [`KeyedSequence::filter`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> KeyedSequence for Filter<S, P>
where
    S: KeyedSequence,
    P: FnMut(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        let predicate = &mut self.predicate;
        self.source.resume(|key, value| {
            if predicate(&key, &value) {
                consumer(key, value)
            } else {
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::keyed::{KeyedSequence, from_pairs};
    use rstest::rstest;

    #[rstest]
    fn test_keyed_filter_sees_both_values() {
        let kept = from_pairs([(1, 1), (2, 3), (3, 3), (4, 0)])
            .filter(|key, value| key == value)
            .collect::<Vec<_>>();
        assert_eq!(kept, vec![(1, 1), (3, 3)]);
    }
}
