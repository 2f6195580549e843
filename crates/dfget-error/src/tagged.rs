use std::borrow::Cow;
use std::fmt;

use super::ErrorCategory;

/// The value is invalid.
pub const ERR_INVALID_VALUE: TaggedError = TaggedError::sentinel(ErrorCategory::InvalidValue);

/// The object is not initialized.
pub const ERR_NOT_INITIALIZED: TaggedError = TaggedError::sentinel(ErrorCategory::NotInitialized);

/// A conversion failed.
pub const ERR_CONVERT_FAILED: TaggedError = TaggedError::sentinel(ErrorCategory::ConvertFailed);

/// The available length is insufficient for the requested range.
pub const ERR_RANGE_NOT_SATISFIABLE: TaggedError =
    TaggedError::sentinel(ErrorCategory::RangeNotSatisfiable);

/// An error raised by the dfget runtime: one [`ErrorCategory`] plus a human readable message.
///
/// Both parts are fixed at construction. Intermediate layers add context by wrapping
/// (see [`crate::ContextError`]); callers recover the category through the `is_*`
/// predicates, which look through any number of wrapping layers.
///
/// Layers must keep the tagged error reachable through `source()`: a field marked
/// `#[source]`/`#[from]` (held directly, boxed or in an `Arc`) or a [`crate::ContextError`].
/// A `#[error(transparent)]` wrapper forwards `source()` past the wrapped error, so
/// ```rust
/// use dfget_error::{ERR_NOT_INITIALIZED, TaggedError, is_not_initialized};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error(transparent)]
/// struct Opaque(TaggedError);
///
/// assert!(!is_not_initialized(Some(&Opaque(ERR_NOT_INITIALIZED))));
/// ```
/// does not classify; give such variants their own message instead.
///
/// `Display` renders the flat `{"Code":<int>,"Msg":"<string>"}` form. The message is
/// inserted as-is, so a message containing `"` does not render as valid JSON; enable
/// the `serde` feature and use `to_json` where a well-formed encoding matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedError {
    #[cfg_attr(feature = "serde", serde(rename = "Code"))]
    category: ErrorCategory,
    #[cfg_attr(feature = "serde", serde(rename = "Msg"))]
    message: Cow<'static, str>,
}

impl TaggedError {
    pub fn new(category: ErrorCategory, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Build an error whose message is rendered from `args`.
    ///
    /// Usually reached through the [`tagged!`](crate::tagged) macro:
    /// ```rust
    /// use dfget_error::{tagged, ErrorCategory};
    ///
    /// let err = tagged!(ErrorCategory::ConvertFailed, "cannot convert {} to {}", "a", "b");
    /// assert_eq!(err.message(), "cannot convert a to b");
    /// ```
    pub fn newf(category: ErrorCategory, args: fmt::Arguments<'_>) -> Self {
        let message = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(fmt::format(args)),
        };
        Self { category, message }
    }

    /// The shared error for `category`, carrying its default message.
    pub const fn sentinel(category: ErrorCategory) -> Self {
        Self {
            category,
            message: Cow::Borrowed(category.default_message()),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn code(&self) -> i32 {
        self.category.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is(&self, category: ErrorCategory) -> bool {
        self.category == category
    }

    /// Canonical textual form, identical to `Display`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Emit a tracing event at `level` carrying the code, category name and message.
    #[cfg(feature = "tracing")]
    pub fn emit(&self, level: tracing::Level) {
        event_at!(
            level,
            code = self.code(),
            category = self.category.name(),
            msg = self.message(),
            "tagged error"
        );
    }
}

impl fmt::Display for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"Code\":{},\"Msg\":\"{}\"}}", self.code(), self.message)
    }
}

impl std::error::Error for TaggedError {}

impl From<ErrorCategory> for TaggedError {
    fn from(category: ErrorCategory) -> Self {
        TaggedError::sentinel(category)
    }
}
