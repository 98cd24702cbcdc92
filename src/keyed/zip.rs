//! [`Zip`]: lockstep pairing of two sequences.

use crate::keyed::KeyedSequence;
use crate::sequence::{Drive, PullHandle, Sequence};

/// Keyed sequence pairing the elements of two sequences.
///
/// Created by [`Sequence::zip`] or [`Zip::new`]. Both inputs are converted to
/// [`PullHandle`]s and advanced alternately, one element from the left, then
/// one from the right. The zip ends as soon as either side is exhausted; a
/// left element already pulled when the right side runs out is discarded.
///
/// Both handles are closed as soon as either side is exhausted, and in any
/// case when the `Zip` is dropped. [`KeyedSequence::drive`] drops it before
/// returning, so a driven zip never leaves an input open.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::keyed::Zip;
///
/// let zipped = Zip::new(from_iter([1, 2, 3, 4, 5]), from_iter(["a", "b", "c"]));
/// assert_eq!(zipped.collect::<Vec<_>>(), vec![(1, "a"), (2, "b"), (3, "c")]);
/// ```
#[derive(Debug)]
#[must_use = "sequences do nothing unless driven"]
pub struct Zip<A, B> {
    left: PullHandle<A>,
    right: PullHandle<B>,
}

impl<A: Sequence, B: Sequence> Zip<A, B> {
    /// Pairs `left` with `right`.
    pub const fn new(left: A, right: B) -> Self {
        Self {
            left: PullHandle::new(left),
            right: PullHandle::new(right),
        }
    }

    /// Returns `true` once both inputs have been released.
    pub const fn is_released(&self) -> bool {
        self.left.is_closed() && self.right.is_closed()
    }

    fn release(&mut self) {
        if !self.is_released() {
            trace!("zip exhausted, releasing both inputs");
        }
        self.left.close();
        self.right.close();
    }
}

impl<A: Sequence, B: Sequence> KeyedSequence for Zip<A, B> {
    type Key = A::Item;
    type Value = B::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(A::Item, B::Item) -> bool,
    {
        loop {
            let Some(left) = self.left.pull() else {
                self.release();
                return Drive::Exhausted;
            };
            let Some(right) = self.right.pull() else {
                self.release();
                return Drive::Exhausted;
            };
            if !consumer(left, right) {
                return Drive::Stopped;
            }
        }
    }
}
