//! Keyed [`FlatMap`].

use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Concatenation of the keyed sequences produced from each source pair.
///
/// Created by [`KeyedSequence::flat_map`]. Same stop and resume behavior as
/// the single-value [`FlatMap`](crate::sequence::FlatMap).
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct FlatMap<S, F, I> {
    source: S,
    transform: F,
    current: Option<I>,
}

impl<S, F, I> FlatMap<S, F, I> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            current: None,
        }
    }
}

impl<S, F, I> KeyedSequence for FlatMap<S, F, I>
where
    S: KeyedSequence,
    I: KeyedSequence,
    F: FnMut(S::Key, S::Value) -> I,
{
    type Key = I::Key;
    type Value = I::Value;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        if let Some(inner) = self.current.as_mut() {
            if inner.resume(&mut consumer).is_stopped() {
                return Drive::Stopped;
            }
            self.current = None;
        }

        let Self {
            source,
            transform,
            current,
        } = self;
        source.resume(|key, value| {
            let mut inner = transform(key, value);
            if inner.resume(&mut consumer).is_stopped() {
                *current = Some(inner);
                false
            } else {
                true
            }
        })
    }
}
