//! Sequence sources: conversions from collections and generator functions.
//!
//! Every source here is fused: once it reports [`Drive::Exhausted`] it never
//! calls a consumer again.

use std::iter::Fuse;

use super::{Drive, Sequence};

/// Sequence over the elements of an iterator. Created by [`from_iter`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Values<I> {
    iterator: Fuse<I>,
}

/// Creates a sequence over anything that can be iterated.
///
/// Replaying a collection means calling `from_iter` again; the returned
/// sequence itself never rewinds.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let letters = vec!["a", "b", "c"];
/// assert_eq!(from_iter(letters.iter().copied()).count(), 3);
/// assert_eq!(from_iter(letters).to_vec(), vec!["a", "b", "c"]);
/// ```
pub fn from_iter<I: IntoIterator>(iterable: I) -> Values<I::IntoIter> {
    Values {
        iterator: iterable.into_iter().fuse(),
    }
}

impl<I: Iterator> Sequence for Values<I> {
    type Item = I::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        for item in self.iterator.by_ref() {
            if !consumer(item) {
                return Drive::Stopped;
            }
        }
        Drive::Exhausted
    }
}

/// Sequence with no elements. Created by [`empty`].
#[derive(Debug, Clone, Copy)]
#[must_use = "sequences do nothing unless driven"]
pub struct Empty<T> {
    _marker: std::marker::PhantomData<fn() -> T>,
}

/// Creates a sequence that is exhausted from the start.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: std::marker::PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn resume<C>(&mut self, _consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        Drive::Exhausted
    }
}

/// Sequence with exactly one element. Created by [`once`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Once<T> {
    value: Option<T>,
}

/// Creates a sequence yielding `value` once.
pub const fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        if let Some(value) = self.value.take()
            && !consumer(value)
        {
            return Drive::Stopped;
        }
        Drive::Exhausted
    }
}

/// Sequence produced by a generator closure. Created by [`from_fn`].
#[must_use = "sequences do nothing unless driven"]
pub struct FromFn<F> {
    generator: Option<F>,
}

/// Creates a sequence that calls `generator` for each element until it
/// returns `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut state = 1;
/// let doubling = from_fn(move || {
///     state *= 2;
///     (state <= 16).then_some(state)
/// });
/// assert_eq!(doubling.to_vec(), vec![2, 4, 8, 16]);
/// ```
pub const fn from_fn<T, F>(generator: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn {
        generator: Some(generator),
    }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        while let Some(generator) = self.generator.as_mut() {
            match generator() {
                Some(item) => {
                    if !consumer(item) {
                        return Drive::Stopped;
                    }
                }
                None => self.generator = None,
            }
        }
        Drive::Exhausted
    }
}

/// Infinite sequence produced by a closure. Created by [`repeat_with`].
#[must_use = "sequences do nothing unless driven"]
pub struct RepeatWith<F> {
    generator: F,
}

/// Creates an infinite sequence of `generator()` results.
///
/// Bound it with [`take`](Sequence::take) or an early-stopping consumer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut next = 0;
/// let naturals = repeat_with(move || {
///     next += 1;
///     next
/// });
/// assert_eq!(naturals.take(4).to_vec(), vec![1, 2, 3, 4]);
/// ```
pub const fn repeat_with<T, F>(generator: F) -> RepeatWith<F>
where
    F: FnMut() -> T,
{
    RepeatWith { generator }
}

impl<T, F> Sequence for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        loop {
            if !consumer((self.generator)()) {
                return Drive::Stopped;
            }
        }
    }
}

/// Sequence where each element is computed from the previous one. Created by
/// [`successors`].
#[must_use = "sequences do nothing unless driven"]
pub struct Successors<T, F> {
    next: Option<T>,
    successor: F,
}

/// Creates a sequence starting at `first` and continuing with
/// `successor(&previous)` until it returns `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let powers = successors(Some(1_u32), |n| n.checked_mul(10));
/// assert_eq!(powers.take(4).to_vec(), vec![1, 10, 100, 1000]);
/// ```
pub const fn successors<T, F>(first: Option<T>, successor: F) -> Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    Successors {
        next: first,
        successor,
    }
}

impl<T, F> Sequence for Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        while let Some(item) = self.next.take() {
            self.next = (self.successor)(&item);
            if !consumer(item) {
                return Drive::Stopped;
            }
        }
        Drive::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_values_resumes_after_stop() {
        let mut sequence = from_iter([1, 2, 3]);
        let mut seen = Vec::new();

        assert_eq!(
            sequence.resume(|n| {
                seen.push(n);
                false
            }),
            Drive::Stopped
        );
        assert_eq!(
            sequence.resume(|n| {
                seen.push(n);
                true
            }),
            Drive::Exhausted
        );
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_values_stays_exhausted() {
        let mut sequence = from_iter([1]);
        assert_eq!(sequence.resume(|_| true), Drive::Exhausted);
        assert_eq!(
            sequence.resume(|_| panic!("consumer called after exhaustion")),
            Drive::Exhausted
        );
    }

    #[rstest]
    fn test_empty_never_calls_consumer() {
        let drive = empty::<i32>().drive(|_| panic!("empty produced an element"));
        assert_eq!(drive, Drive::Exhausted);
    }

    #[rstest]
    #[case(true, Drive::Exhausted)]
    #[case(false, Drive::Stopped)]
    fn test_once_reports_consumer_answer(#[case] answer: bool, #[case] expected: Drive) {
        let mut sequence = once(7);
        assert_eq!(sequence.resume(|_| answer), expected);
        assert_eq!(sequence.resume(|_| true), Drive::Exhausted);
    }

    #[rstest]
    fn test_from_fn_does_not_call_generator_after_none() {
        let mut calls = 0;
        let mut sequence = from_fn(|| {
            calls += 1;
            None::<i32>
        });
        assert_eq!(sequence.resume(|_| true), Drive::Exhausted);
        assert_eq!(sequence.resume(|_| true), Drive::Exhausted);
        drop(sequence);
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_repeat_with_is_lazy() {
        let mut produced = 0;
        let mut sequence = repeat_with(|| {
            produced += 1;
            produced
        });
        let mut seen = Vec::new();
        sequence.resume(|n| {
            seen.push(n);
            seen.len() < 3
        });
        drop(sequence);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(produced, 3);
    }

    #[rstest]
    fn test_successors_ends_on_none() {
        let halving = successors(Some(40), |n| (*n > 5).then(|| n / 2));
        assert_eq!(halving.to_vec(), vec![40, 20, 10, 5]);
    }
}
