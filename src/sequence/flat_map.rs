//! [`FlatMap`] and related items.

use super::{Drive, Sequence};

/// Concatenation of the sequences produced from each source element.
///
/// Created by [`Sequence::flat_map`]. Inner sequences are drained depth first,
/// in source order. A stop inside an inner sequence stops the outer drive too;
/// the partially consumed inner sequence is kept, and the next `resume`
/// continues inside it.
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct FlatMap<S, F, I> {
    source: S,
    transform: F,
    // Inner sequence suspended by a consumer stop.
    current: Option<I>,
}

impl<S, F, I> FlatMap<S, F, I> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            current: None,
        }
    }
}

impl<S, F, I> Sequence for FlatMap<S, F, I>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    type Item = I::Item;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(Self::Item) -> bool,
    {
        if let Some(inner) = self.current.as_mut() {
            if inner.resume(&mut consumer).is_stopped() {
                return Drive::Stopped;
            }
            self.current = None;
        }

        let Self {
            source,
            transform,
            current,
        } = self;
        source.resume(|item| {
            let mut inner = transform(item);
            if inner.resume(&mut consumer).is_stopped() {
                *current = Some(inner);
                false
            } else {
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Drive, Sequence, empty, from_iter, once};
    use rstest::rstest;

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let flattened = from_iter([vec![1, 2], vec![3, 4], vec![5, 6]])
            .flat_map(from_iter)
            .to_vec();
        assert_eq!(flattened, vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_flat_map_skips_empty_inner_sequences() {
        let flattened = from_iter([vec![], vec![1], vec![], vec![], vec![2, 3]])
            .flat_map(from_iter)
            .to_vec();
        assert_eq!(flattened, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flat_map_inner_stop_stops_outer() {
        let mut outer_visits = 0;
        let mut seen = Vec::new();
        let drive = from_iter([vec![1, 2], vec![3, 4], vec![5, 6]])
            .map(|inner| {
                outer_visits += 1;
                inner
            })
            .flat_map(from_iter)
            .drive(|n| {
                seen.push(n);
                n != 3
            });

        assert_eq!(drive, Drive::Stopped);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(outer_visits, 2);
    }

    #[rstest]
    fn test_flat_map_resumes_inside_inner_sequence() {
        let mut flattened = from_iter([vec![1, 2, 3], vec![4]]).flat_map(from_iter);
        let mut seen = Vec::new();

        let first = flattened.resume(|n| {
            seen.push(n);
            n < 2
        });
        let second = flattened.resume(|n| {
            seen.push(n);
            true
        });

        assert!(first.is_stopped());
        assert!(second.is_exhausted());
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flat_map_stop_on_last_inner_element() {
        let mut flattened = from_iter([1, 2]).flat_map(once);
        assert_eq!(flattened.resume(|_| false), Drive::Stopped);
        assert_eq!(flattened.resume(|_| false), Drive::Stopped);
        assert_eq!(flattened.resume(|_| true), Drive::Exhausted);
    }

    #[rstest]
    fn test_flat_map_over_empty_source() {
        let drive = empty::<Vec<i32>>()
            .flat_map(from_iter)
            .drive(|_| panic!("nothing to produce"));
        assert_eq!(drive, Drive::Exhausted);
    }
}
