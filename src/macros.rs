/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites stay free of `cfg` noise.
///
/// ```ignore
/// trace_event!(word_len = word.len(), inserted, "prefix index insert");
/// ```
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}
