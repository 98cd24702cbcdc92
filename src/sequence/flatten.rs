//! [`Flatten`], [`Nested`] and related items.
//!
//! `Nested` lets a producer emit "a value, a run of values, or nothing" in a
//! single sequence without normalizing first. The set of shapes is closed:
//!
//! | Variant                 | Contributes                         |
//! |-------------------------|-------------------------------------|
//! | `Sequence(s)`           | every element of `s`                |
//! | `MaybeSequence(Some(s))`| every element of `s`                |
//! | `MaybeSequence(None)`   | nothing                             |
//! | `List(v)`               | every element of `v`                |
//! | `MaybeList(Some(v))`    | every element of `v`                |
//! | `MaybeList(None)`       | nothing                             |
//! | `Value(x)`              | `x`                                 |

use std::vec;

use super::{Drive, FlatMap, Sequence};

/// One item of a heterogeneous source: a nested sequence, an optional nested
/// sequence, a list, an optional list, or a single value.
///
/// Sources that mix different concrete sequence types should box them with
/// [`Sequence::boxed`] so they share the `S` parameter.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let items = vec![
///     Nested::List(vec![1, 2, 3]),
///     Nested::Sequence(from_iter(vec![4, 5])),
///     Nested::Value(6),
///     Nested::MaybeList(Some(vec![7, 8])),
///     Nested::MaybeSequence(None),
///     Nested::List(vec![9, 10]),
/// ];
/// let flattened = from_iter(items).flatten().to_vec();
/// assert_eq!(flattened, (1..=10).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T, S> {
    /// A nested sequence.
    Sequence(S),
    /// A nested sequence that may be absent.
    MaybeSequence(Option<S>),
    /// A bounded run of values.
    List(Vec<T>),
    /// A bounded run of values that may be absent.
    MaybeList(Option<Vec<T>>),
    /// A single value.
    Value(T),
}

impl<T, S> Nested<T, S>
where
    S: Sequence<Item = T>,
{
    /// Converts the item into the sequence of values it stands for.
    pub fn unroll(self) -> Unrolled<T, S> {
        match self {
            Self::Sequence(sequence) | Self::MaybeSequence(Some(sequence)) => {
                Unrolled::Sequence(sequence)
            }
            Self::List(values) | Self::MaybeList(Some(values)) => {
                Unrolled::List(values.into_iter())
            }
            Self::Value(value) => Unrolled::Value(Some(value)),
            Self::MaybeSequence(None) | Self::MaybeList(None) => Unrolled::Absent,
        }
    }
}

impl<T, S> From<T> for Nested<T, S> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// The values of one [`Nested`] item, as a sequence.
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub enum Unrolled<T, S> {
    /// Elements of a nested sequence.
    Sequence(S),
    /// Remaining elements of a list.
    List(vec::IntoIter<T>),
    /// A single value, until it has been produced.
    Value(Option<T>),
    /// No elements.
    Absent,
}

impl<T, S> Sequence for Unrolled<T, S>
where
    S: Sequence<Item = T>,
{
    type Item = T;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(T) -> bool,
    {
        match self {
            Self::Sequence(sequence) => sequence.resume(consumer),
            Self::List(values) => {
                for value in values.by_ref() {
                    if !consumer(value) {
                        return Drive::Stopped;
                    }
                }
                Drive::Exhausted
            }
            Self::Value(value) => {
                if let Some(value) = value.take()
                    && !consumer(value)
                {
                    return Drive::Stopped;
                }
                Drive::Exhausted
            }
            Self::Absent => Drive::Exhausted,
        }
    }
}

/// Sequence of the unrolled [`Nested`] items of a source.
///
/// Created by [`Sequence::flatten`].
pub type Flatten<S, T, I> = FlatMap<S, fn(Nested<T, I>) -> Unrolled<T, I>, Unrolled<T, I>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{BoxedSequence, from_iter};
    use rstest::rstest;

    type Item = Nested<i32, BoxedSequence<'static, i32>>;

    #[rstest]
    fn test_flatten_mixed_shapes() {
        let items: Vec<Item> = vec![
            Nested::List(vec![1, 2, 3]),
            Nested::Sequence(from_iter(4..=5).boxed()),
            Nested::Value(6),
            Nested::MaybeList(Some(vec![7, 8])),
            Nested::List(vec![9, 10]),
        ];
        let flattened = from_iter(items).flatten().to_vec();
        assert_eq!(flattened, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[rstest]
    fn test_flatten_absent_items_contribute_nothing() {
        let items: Vec<Item> = vec![
            Nested::Value(1),
            Nested::MaybeSequence(None),
            Nested::MaybeList(None),
            Nested::MaybeSequence(Some(from_iter([2, 3]).map(|n| n).boxed())),
            Nested::List(Vec::new()),
            4.into(),
        ];
        let flattened = from_iter(items).flatten().to_vec();
        assert_eq!(flattened, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flatten_stop_inside_list_stops_outer() {
        let mut items_reached = 0;
        let mut seen = Vec::new();
        let items: Vec<Item> = vec![
            Nested::List(vec![1, 2]),
            Nested::List(vec![3, 4]),
            Nested::Value(5),
        ];
        let drive = from_iter(items)
            .map(|item| {
                items_reached += 1;
                item
            })
            .flatten()
            .drive(|n| {
                seen.push(n);
                n < 3
            });

        assert_eq!(drive, Drive::Stopped);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(items_reached, 2);
    }

    #[rstest]
    fn test_unroll_classification() {
        let unrolled: Vec<Vec<i32>> = vec![
            Item::Value(1),
            Item::List(vec![2, 3]),
            Item::MaybeList(None),
        ]
        .into_iter()
        .map(|item| item.unroll().to_vec())
        .collect();
        assert_eq!(unrolled, vec![vec![1], vec![2, 3], vec![]]);
    }
}
