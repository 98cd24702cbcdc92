//! Error types for pull handles.
//!
//! Combinators themselves never fail: a failed `filter_map` transform just
//! drops the element, and panics in caller code propagate unchanged. The only
//! error surfaced by the crate is the checked pull API, which tells apart a
//! handle that ran out of elements from one that was released.

/// Represents the reasons a [`PullHandle`](crate::sequence::PullHandle) can
/// fail to produce an element.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut handle = from_iter([1]).into_pull();
/// assert_eq!(handle.try_pull(), Ok(1));
/// assert_eq!(handle.try_pull(), Err(PullError::Exhausted));
///
/// handle.close();
/// assert_eq!(handle.try_pull(), Err(PullError::Closed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullError {
    /// The underlying sequence signalled exhaustion.
    Exhausted,
    /// The handle was closed explicitly before the pull.
    Closed,
}

impl std::fmt::Display for PullError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(formatter, "pull handle: sequence exhausted"),
            Self::Closed => write!(formatter, "pull handle: already closed"),
        }
    }
}

impl std::error::Error for PullError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PullError::Exhausted, "pull handle: sequence exhausted")]
    #[case(PullError::Closed, "pull handle: already closed")]
    fn test_pull_error_display(#[case] error: PullError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_pull_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(PullError::Closed);
        assert_eq!(error.to_string(), "pull handle: already closed");
    }
}
