//! [`PullHandle`]: an external cursor over a sequence.
//!
//! A sequence is driven from the inside: it calls its consumer. A pull handle
//! turns that around by resuming the sequence with a consumer that captures a
//! single element and immediately asks to stop. The sequence keeps its place,
//! so the next pull continues from there. This is the only form in which two
//! sequences can be advanced in lockstep, which is what
//! [`Zip`](crate::keyed::Zip) needs.

use std::iter::FusedIterator;

use super::{Drive, Sequence};
use crate::error::PullError;

/// A stateful "next element or end" cursor over a sequence.
///
/// Created by [`Sequence::into_pull`]. The handle owns the sequence; closing
/// the handle, or dropping it, releases the sequence and everything it owns.
/// After exhaustion or close, every pull returns `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut handle = from_iter(["a", "b"]).into_pull();
/// assert_eq!(handle.pull(), Some("a"));
/// assert_eq!(handle.pull(), Some("b"));
/// assert_eq!(handle.pull(), None);
/// assert!(handle.is_closed());
/// ```
#[derive(Debug)]
#[must_use = "pull handles do nothing unless pulled"]
pub struct PullHandle<S> {
    source: Option<S>,
    closed_explicitly: bool,
}

impl<S: Sequence> PullHandle<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self {
            source: Some(source),
            closed_explicitly: false,
        }
    }

    /// Produces the next element, or `None` once the sequence is exhausted or
    /// the handle is closed.
    ///
    /// Exhaustion releases the underlying sequence right away.
    pub fn pull(&mut self) -> Option<S::Item> {
        let source = self.source.as_mut()?;
        let mut slot = None;
        let drive = source.resume(|item| {
            slot = Some(item);
            false
        });
        if drive == Drive::Exhausted {
            self.release();
        }
        slot
    }

    /// Like [`pull`](Self::pull), but tells exhaustion and closing apart.
    ///
    /// # Errors
    ///
    /// Returns [`PullError::Closed`] if [`close`](Self::close) was called, and
    /// [`PullError::Exhausted`] if the sequence has no more elements.
    pub fn try_pull(&mut self) -> Result<S::Item, PullError> {
        if self.closed_explicitly {
            return Err(PullError::Closed);
        }
        self.pull().ok_or(PullError::Exhausted)
    }

    /// Releases the underlying sequence. Further pulls return `None`.
    ///
    /// Closing an already released handle does nothing.
    pub fn close(&mut self) {
        self.closed_explicitly = true;
        self.release();
    }

    /// Returns `true` once the underlying sequence has been released, either
    /// by exhaustion or by [`close`](Self::close).
    pub const fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    fn release(&mut self) {
        if self.source.take().is_some() {
            trace!("pull handle released");
        }
    }
}

impl<S: Sequence> Iterator for PullHandle<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.pull()
    }
}

impl<S: Sequence> FusedIterator for PullHandle<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{from_iter, repeat_with};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[rstest]
    fn test_pull_advances_one_element_at_a_time() {
        let produced = Cell::new(0);
        let mut handle = repeat_with(|| {
            produced.set(produced.get() + 1);
            produced.get()
        })
        .into_pull();

        assert_eq!(handle.pull(), Some(1));
        assert_eq!(produced.get(), 1);
        assert_eq!(handle.pull(), Some(2));
        assert_eq!(produced.get(), 2);
    }

    #[rstest]
    fn test_exhaustion_releases_source() {
        let dropped = Rc::new(Cell::new(false));
        let flag = DropFlag(Rc::clone(&dropped));
        let mut handle = from_iter([1])
            .map(move |n| {
                let _owned = &flag;
                n
            })
            .into_pull();

        assert_eq!(handle.pull(), Some(1));
        assert!(!dropped.get());
        assert_eq!(handle.pull(), None);
        assert!(dropped.get());
        assert!(handle.is_closed());
    }

    #[rstest]
    fn test_close_releases_source_early() {
        let dropped = Rc::new(Cell::new(false));
        let flag = DropFlag(Rc::clone(&dropped));
        let mut handle = from_iter(1..)
            .map(move |n| {
                let _owned = &flag;
                n
            })
            .into_pull();

        assert_eq!(handle.pull(), Some(1));
        handle.close();
        assert!(dropped.get());
        assert_eq!(handle.pull(), None);
    }

    #[rstest]
    fn test_try_pull_distinguishes_close_from_exhaustion() {
        let mut exhausted = from_iter([1]).into_pull();
        assert_eq!(exhausted.try_pull(), Ok(1));
        assert_eq!(exhausted.try_pull(), Err(PullError::Exhausted));

        let mut closed = from_iter([1]).into_pull();
        closed.close();
        assert_eq!(closed.try_pull(), Err(PullError::Closed));
    }

    #[rstest]
    fn test_pull_handle_is_an_iterator() {
        let handle = from_iter(1..=4).filter(|n| n % 2 == 0).into_pull();
        assert_eq!(handle.collect::<Vec<_>>(), vec![2, 4]);
    }
}
