//! [`Map`] and related items.

use super::{Drive, Sequence};

/// Sequence of transformed source elements. Created by [`Sequence::map`].
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless driven"]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<R, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    fn resume<C>(&mut self, mut consumer: C) -> Drive
    where
        C: FnMut(R) -> bool,
    {
        let transform = &mut self.transform;
        self.source.resume(|item| consumer(transform(item)))
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Sequence, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_map_changes_element_type() {
        let lengths = from_iter(["a", "bb", "ccc"]).map(str::len).to_vec();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_map_does_not_run_past_stop() {
        let mut transformed = 0;
        from_iter(1..=100)
            .map(|n| {
                transformed += 1;
                n
            })
            .drive(|n| n < 4);
        assert_eq!(transformed, 4);
    }
}
