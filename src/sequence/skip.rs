//! [`Skip`] and related items.

use super::{Drive, Sequence};

/// Sequence without its first `count` elements. Created by [`Sequence::skip`].
///
/// Skipped elements are still produced by the source, then discarded.
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

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        let remaining = &mut self.remaining;
        self.source.resume(|item| {
            if *remaining > 0 {
                *remaining -= 1;
                true
            } else {
                consumer(item)
            }
        })
    }
}
