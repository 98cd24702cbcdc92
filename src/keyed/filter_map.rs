//! Keyed [`FilterMap`].

use crate::fallible::Fallible;
use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Keyed sequence of the successful results of a fallible pair transform.
///
/// Created by [`KeyedSequence::filter_map`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct FilterMap<S, F> {
    source: S,
    transform: F,
}

impl<S, F> FilterMap<S, F> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<K, V, O, S, F> KeyedSequence for FilterMap<S, F>
where
    S: KeyedSequence,
    O: Fallible<Success = (K, V)>,
    F: FnMut(S::Key, S::Value) -> O,
{
    type Key = K;
    type Value = V;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(K, V) -> bool,
    {
        let transform = &mut self.transform;
        self.source.resume(|key, value| {
            transform(key, value)
                .into_success()
                .is_none_or(|(key, value)| consumer(key, value))
        })
    }
}
