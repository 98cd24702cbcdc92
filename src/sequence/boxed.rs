//! [`BoxedSequence`]: type erasure for sequences.

use super::{Drive, Sequence};

/// Object-safe view of [`Sequence`], used only behind [`BoxedSequence`].
///
/// `Sequence::resume` is generic over the consumer, so it cannot be called
/// through a trait object; this trait takes the consumer as `&mut dyn FnMut`.
trait ErasedSequence<T> {
    fn resume_erased(&mut self, consumer: &mut dyn FnMut(T) -> bool) -> Drive;
}

impl<S: Sequence> ErasedSequence<S::Item> for S {
    fn resume_erased(&mut self, consumer: &mut dyn FnMut(S::Item) -> bool) -> Drive {
        self.resume(consumer)
    }
}

/// A sequence whose concrete type has been erased.
///
/// Useful when sequences of different types must be stored together, for
/// example as the nested sequences of a [`Nested`](super::Nested) source.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::sequence::BoxedSequence;
///
/// let sources: Vec<BoxedSequence<'static, i32>> = vec![
///     from_iter(vec![1, 2]).boxed(),
///     once(3).boxed(),
///     from_iter(4..).take(2).boxed(),
/// ];
/// let all = from_iter(sources).flat_map(|sequence| sequence).to_vec();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
#[must_use = "sequences do nothing unless driven"]
pub struct BoxedSequence<'a, T> {
    inner: Box<dyn ErasedSequence<T> + 'a>,
}

impl<'a, T> BoxedSequence<'a, T> {
    /// Boxes `sequence`.
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'a,
    {
        Self {
            inner: Box::new(sequence),
        }
    }
}

impl<T> Sequence for BoxedSequence<'_, T> {
    type Item = T;

    #[inline]
    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        self.inner.resume_erased(&mut consumer)
    }
}

impl<T> std::fmt::Debug for BoxedSequence<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("BoxedSequence").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Drive, Sequence, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_boxed_sequence_resumes() {
        let mut boxed = from_iter(1..=3).map(|n| n * 2).boxed();
        let mut seen = Vec::new();

        assert_eq!(
            boxed.resume(|n| {
                seen.push(n);
                false
            }),
            Drive::Stopped
        );
        assert_eq!(
            boxed.resume(|n| {
                seen.push(n);
                true
            }),
            Drive::Exhausted
        );
        assert_eq!(seen, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_boxed_sequence_borrows_local_state() {
        let offset = 10;
        let shifted = from_iter([1, 2]).map(|n| n + offset).boxed().to_vec();
        assert_eq!(shifted, vec![11, 12]);
    }
}
