//! [`Take`] and related items.

use super::{Drive, Sequence};

/// Sequence of at most the first `count` source elements.
///
/// Created by [`Sequence::take`]. Once the limit is reached the source is not
/// driven again, so no element past the limit is ever produced.
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

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        if self.remaining == 0 {
            return Drive::Exhausted;
        }

        let remaining = &mut self.remaining;
        let mut stopped = false;
        self.source.resume(|item| {
            *remaining -= 1;
            if !consumer(item) {
                stopped = true;
                return false;
            }
            *remaining > 0
        });

        // The source reports `Stopped` both when the consumer stopped and when
        // the limit was hit; only the former is a stop for our caller.
        if stopped {
            Drive::Stopped
        } else {
            Drive::Exhausted
        }
    }
}
