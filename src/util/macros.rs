/// Forward to `tracing::debug!` if the `tracing` feature is enabled,
/// otherwise do nothing.
macro_rules! debug {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!( $( $arg )* );
    }};
}

/// Forward to `tracing::trace!` if the `tracing` feature is enabled,
/// otherwise do nothing.
macro_rules! trace {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!( $( $arg )* );
    }};
}
