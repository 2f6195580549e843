use std::error::Error;

use super::{ContextError, ErrorCategory, classify};

/// Extension trait for `Result` that adds context on the way up and classifies on the
/// way out, without callers converting the error to `&dyn Error` themselves.
///
/// Example
/// ```rust
/// use dfget_error::{ERR_RANGE_NOT_SATISFIABLE, ResultExt, TaggedError};
///
/// fn read_piece() -> Result<Vec<u8>, TaggedError> {
///     Err(ERR_RANGE_NOT_SATISFIABLE)
/// }
///
/// let res = read_piece().context("download piece 12");
/// assert!(res.is_range_not_satisfiable());
/// ```
pub trait ResultExt<T, E> {
    /// Wrap the error, if any, in a [`ContextError`].
    fn context(self, context: impl Into<String>) -> Result<T, ContextError>;

    /// Like [`ResultExt::context`], building the context only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, ContextError>
    where
        C: Into<String>,
        F: FnOnce() -> C;

    /// Category of the first tagged error in the error chain; `None` for `Ok`.
    fn category(&self) -> Option<ErrorCategory>;

    fn is_category(&self, category: ErrorCategory) -> bool {
        self.category() == Some(category)
    }

    fn is_invalid_value(&self) -> bool {
        self.is_category(ErrorCategory::InvalidValue)
    }

    fn is_not_initialized(&self) -> bool {
        self.is_category(ErrorCategory::NotInitialized)
    }

    fn is_convert_failed(&self) -> bool {
        self.is_category(ErrorCategory::ConvertFailed)
    }

    fn is_range_not_satisfiable(&self) -> bool {
        self.is_category(ErrorCategory::RangeNotSatisfiable)
    }

    /// Emit the error, if any, as a tracing event at `level` and return the result unchanged.
    #[cfg(feature = "tracing")]
    fn trace_err(self, level: tracing::Level) -> Self;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T, ContextError> {
        self.map_err(|e| ContextError::new(context, e))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ContextError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| ContextError::new(f(), e))
    }

    fn category(&self) -> Option<ErrorCategory> {
        match self {
            Ok(_) => None,
            Err(e) => classify::category_of(Some(e)),
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_err(self, level: tracing::Level) -> Self {
        if let Err(ref e) = self {
            match crate::chain::find_tagged(e) {
                Some(tagged) => tagged.emit(level),
                None => event_at!(level, error = %e, "untagged error"),
            }
        }
        self
    }
}
