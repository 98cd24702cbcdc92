//! Success/failure view over transform results.
//!
//! `filter_map` accepts any transform whose result implements [`Fallible`].
//! Only the success value is kept; the failure, and whatever reason it
//! carried, is discarded.

/// A result that either succeeded with a value or failed.
///
/// # Examples
///
/// ```rust
/// use lazyseq::fallible::Fallible;
///
/// assert_eq!(Some(3).into_success(), Some(3));
/// assert_eq!(Ok::<i32, String>(3).into_success(), Some(3));
/// assert_eq!(Err::<i32, &str>("boom").into_success(), None);
/// ```
pub trait Fallible {
    /// The value carried on success.
    type Success;

    /// Returns the success value, dropping any failure.
    fn into_success(self) -> Option<Self::Success>;
}

impl<T> Fallible for Option<T> {
    type Success = T;

    #[inline]
    fn into_success(self) -> Option<T> {
        self
    }
}

impl<T, E> Fallible for Result<T, E> {
    type Success = T;

    #[inline]
    fn into_success(self) -> Option<T> {
        self.ok()
    }
}
