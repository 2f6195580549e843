//! Category predicates.
//!
//! Every predicate takes the error the same way callers usually hold it, as an optional
//! reference where `None` means "no error", and never fails: an error with no
//! [`TaggedError`](crate::TaggedError) anywhere in its chain simply does not match.

use std::error::Error;

use super::{ErrorCategory, chain::find_tagged};

/// Check whether there is an error at all.
pub fn is_nil(err: Option<&(dyn Error + 'static)>) -> bool {
    err.is_none()
}

/// Category of the first tagged error in the chain of `err`.
pub fn category_of(err: Option<&(dyn Error + 'static)>) -> Option<ErrorCategory> {
    err.and_then(find_tagged).map(|tagged| tagged.category())
}

/// Check whether the first tagged error in the chain has `category`.
pub fn is_category(err: Option<&(dyn Error + 'static)>, category: ErrorCategory) -> bool {
    category_of(err) == Some(category)
}

/// Check whether the error reports an invalid value.
pub fn is_invalid_value(err: Option<&(dyn Error + 'static)>) -> bool {
    is_category(err, ErrorCategory::InvalidValue)
}

/// Check whether the error reports an uninitialized object.
pub fn is_not_initialized(err: Option<&(dyn Error + 'static)>) -> bool {
    is_category(err, ErrorCategory::NotInitialized)
}

/// Check whether the error reports a failed conversion.
pub fn is_convert_failed(err: Option<&(dyn Error + 'static)>) -> bool {
    is_category(err, ErrorCategory::ConvertFailed)
}

/// Check whether the error reports a range the available length cannot satisfy.
pub fn is_range_not_satisfiable(err: Option<&(dyn Error + 'static)>) -> bool {
    is_category(err, ErrorCategory::RangeNotSatisfiable)
}
