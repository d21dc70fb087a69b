//! Internal logging shims.
//!
//! `trace_event!` forwards to `tracing` when the `tracing` feature is enabled and
//! expands to nothing otherwise, so call sites never need their own `cfg`.

macro_rules! trace_event {
    (debug, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    }};
    (trace, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    }};
}
