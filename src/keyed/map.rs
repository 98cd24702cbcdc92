//! Keyed [`Map`].

use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Keyed sequence of transformed pairs. Created by [`KeyedSequence::map`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<K, V, S, F> KeyedSequence for Map<S, F>
where
    S: KeyedSequence,
    F: FnMut(S::Key, S::Value) -> (K, V),
{
    type Key = K;
    type Value = V;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(K, V) -> bool,
    {
        let transform = &mut self.transform;
        self.source.resume(|key, value| {
            let (key, value) = transform(key, value);
            consumer(key, value)
        })
    }
}
