//! [`Filter`] and related items.

use super::{Drive, Sequence};

/// Sequence of the source elements that satisfy a predicate.
///
/// Created by [`Sequence::filter`]. The predicate runs at most once per
/// source element, and only once the element has been reached.
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        let predicate = &mut self.predicate;
        self.source
            .resume(|item| if predicate(&item) { consumer(item) } else { true })
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Drive, Sequence, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_filter_keeps_order() {
        let odd = from_iter([5, 2, 7, 4, 1]).filter(|n| n % 2 == 1).to_vec();
        assert_eq!(odd, vec![5, 7, 1]);
    }

    #[rstest]
    fn test_filter_evaluates_predicate_once_per_reached_element() {
        let mut evaluated = Vec::new();
        let mut seen = Vec::new();
        let drive = from_iter(1..=10)
            .filter(|n| {
                evaluated.push(*n);
                n % 3 == 0
            })
            .drive(|n| {
                seen.push(n);
                false
            });

        assert_eq!(drive, Drive::Stopped);
        assert_eq!(seen, vec![3]);
        assert_eq!(evaluated, vec![1, 2, 3]);
    }
}
