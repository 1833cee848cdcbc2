//! Feature-gated logging macros
//!
//! Navigation events are logged through whichever backend the enabled
//! cargo feature selects: `log` (default) or `tracing`. The features are
//! mutually exclusive; with neither enabled the macros expand to nothing
//! beyond referencing their arguments, so call sites stay warning-free.
//!
//! Levels in use across the crate:
//!
//! - `warn_log!` for absorbed failures (unknown path, skipped registration)
//! - `debug_log!` for stack mutations (push, exit request, truncation)
//! - `trace_log!` for per-frame and timer noise

/// Trace-level logging, for per-frame and timer detail
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        { let _ = format_args!($($arg)*); }
    }};
}

/// Debug-level logging, for stack mutations
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        { let _ = format_args!($($arg)*); }
    }};
}

/// Info-level logging
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        { let _ = format_args!($($arg)*); }
    }};
}

/// Warn-level logging, for absorbed failures
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        { let _ = format_args!($($arg)*); }
    }};
}

/// Error-level logging, for misconfiguration the host can still survive
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        { let _ = format_args!($($arg)*); }
    }};
}
