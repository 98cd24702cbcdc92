//! Keyed [`Take`].

use crate::keyed::KeyedSequence;
use crate::sequence::Drive;

/// Keyed sequence of at most the first `count` pairs.
///
/// Created by [`KeyedSequence::take`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) const fn new(source: S, count: usize) -> Self {
        Self {
            source,
            remaining: count,
        }
    }
}

impl<S: KeyedSequence> KeyedSequence for Take<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Key, Self::Value) -> bool,
    {
        if self.remaining == 0 {
            return Drive::Exhausted;
        }

        let remaining = &mut self.remaining;
        let mut stopped = false;
        self.source.resume(|key, value| {
            *remaining -= 1;
            if !consumer(key, value) {
                stopped = true;
                return false;
            }
            *remaining > 0
        });

        if stopped {
            Drive::Stopped
        } else {
            Drive::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::keyed::KeyedSequence;
    use crate::sequence::{Sequence, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_keyed_take_stops_infinite_source() {
        let taken = from_iter(10..).enumerate().take(2).collect::<Vec<_>>();
        assert_eq!(taken, vec![(0, 10), (1, 11)]);
    }
}
