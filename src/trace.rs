//! Lifecycle tracing that compiles away without the `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($argument:tt)*) => {};
}
