//! Convenience macros for error handling and propagation

/// Add context to an error while preserving the error chain
///
/// # Examples
///
/// ```rust
/// use tagloc_common::{with_context, Result};
///
/// fn read_catalog() -> Result<String> {
///     std::fs::read_to_string("messages.fr.json")
///         .map_err(|e| with_context!(e, "Failed to read catalog"))
/// }
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $msg:literal $(,)?) => {
        $crate::TaglocError::with_source($msg, $err)
    };
    ($err:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::TaglocError::with_source(format!($fmt, $($arg)*), $err)
    };
}
