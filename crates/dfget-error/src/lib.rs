//! Error categories for the dfget runtime.
//!
//! Failures are raised as a [`TaggedError`]: a fixed [`ErrorCategory`] plus a message.
//! Layers above may wrap it ([`ContextError`], `thiserror` `#[source]`/`#[from]`, boxed
//! errors); the `is_*` predicates walk the `source()` chain to recover the category.
//!
//! ```rust
//! use dfget_error::{ErrorCategory, ResultExt, is_range_not_satisfiable, tagged_err, wrap};
//!
//! fn slice(len: u64, start: u64) -> Result<u64, dfget_error::TaggedError> {
//!     if start >= len {
//!         return tagged_err!(ErrorCategory::RangeNotSatisfiable, "start {start} beyond length {len}");
//!     }
//!     Ok(len - start)
//! }
//!
//! let err = wrap(slice(10, 20).unwrap_err(), "serve range request");
//! assert!(is_range_not_satisfiable(Some(&err)));
//! assert!(slice(10, 20).context("piece 3").is_range_not_satisfiable());
//! ```

// Tracing levels are not const-generic in `event!`, so dispatch per level.
#[cfg(feature = "tracing")]
macro_rules! event_at {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            ::tracing::Level::ERROR => ::tracing::event!(::tracing::Level::ERROR, $($rest)+),
            ::tracing::Level::WARN => ::tracing::event!(::tracing::Level::WARN, $($rest)+),
            ::tracing::Level::INFO => ::tracing::event!(::tracing::Level::INFO, $($rest)+),
            ::tracing::Level::DEBUG => ::tracing::event!(::tracing::Level::DEBUG, $($rest)+),
            _ => ::tracing::event!(::tracing::Level::TRACE, $($rest)+),
        }
    };
}

pub mod category;
pub mod chain;
pub mod classify;
pub mod context;
pub mod pretty;
pub mod result_ext;
pub mod tagged;

// public exports
pub use category::{ErrorCategory, UnknownCategory};
pub use classify::{
    category_of, is_category, is_convert_failed, is_invalid_value, is_nil, is_not_initialized,
    is_range_not_satisfiable,
};
pub use context::{ContextError, wrap, wrapf};
pub use result_ext::ResultExt;
pub use tagged::{
    ERR_CONVERT_FAILED, ERR_INVALID_VALUE, ERR_NOT_INITIALIZED, ERR_RANGE_NOT_SATISFIABLE,
    TaggedError,
};

pub type Result<T, E = TaggedError> = std::result::Result<T, E>;

/// Build a [`TaggedError`] with a formatted message.
///
/// ```rust
/// use dfget_error::{tagged, ErrorCategory, is_convert_failed};
///
/// let err = tagged!(ErrorCategory::ConvertFailed, "cannot convert {} to {}", "a", "b");
/// assert_eq!(err.message(), "cannot convert a to b");
/// assert!(is_convert_failed(Some(&err)));
/// ```
#[macro_export]
macro_rules! tagged {
    ($category:expr, $($arg:tt)+) => {
        $crate::TaggedError::newf($category, ::std::format_args!($($arg)+))
    };
}

/// `Err` of a [`tagged!`] error, converted into the caller's error type.
#[macro_export]
macro_rules! tagged_err {
    ($category:expr, $($arg:tt)+) => {
        ::std::result::Result::Err($crate::tagged!($category, $($arg)+).into())
    };
}
