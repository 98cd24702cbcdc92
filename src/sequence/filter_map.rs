//! [`FilterMap`] and related items.

use super::{Drive, Sequence};
use crate::fallible::Fallible;

/// Sequence of the successful results of a fallible transform.
///
/// Created by [`Sequence::filter_map`]. A single call decides both whether an
/// element is kept and what it becomes; failures leave no trace.
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct FilterMap<S, F> {
    source: S,
    transform: F,
}

impl<S, F> FilterMap<S, F> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<O, S, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    O: Fallible,
    F: FnMut(S::Item) -> O,
{
    type Item = O::Success;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        let transform = &mut self.transform;
        self.source
            .resume(|item| transform(item).into_success().is_none_or(&mut consumer))
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Sequence, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_filter_map_drops_failures() {
        let squared = from_iter([1, 2, 3, 4, 5])
            .filter_map(|n| {
                if n == 3 {
                    Err(format!("skipping {n}"))
                } else {
                    Ok(n * n)
                }
            })
            .to_vec();
        assert_eq!(squared, vec![1, 4, 16, 25]);
    }

    #[rstest]
    fn test_filter_map_accepts_option() {
        let parsed = from_iter(["1", "x", "3"])
            .filter_map(|text| text.parse::<i32>().ok())
            .to_vec();
        assert_eq!(parsed, vec![1, 3]);
    }

    #[rstest]
    fn test_filter_map_calls_transform_once_per_element() {
        let mut calls = 0;
        let kept = from_iter(1..=6)
            .filter_map(|n| {
                calls += 1;
                (n % 2 == 0).then_some(n)
            })
            .count();
        assert_eq!(kept, 3);
        assert_eq!(calls, 6);
    }
}
