//! The closed set of failure kinds an error can be tagged with.
//!
//! Codes follow declaration order and are part of the rendered form
//! (`{"Code":<code>,...}`), so existing members must never be reordered.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ErrorCategory {
    /// A supplied value failed validation.
    InvalidValue = 0,
    /// An object was used before its required setup.
    NotInitialized = 1,
    /// A type or format conversion failed.
    ConvertFailed = 2,
    /// A requested byte range cannot be satisfied by the available length.
    RangeNotSatisfiable = 3,
}

/// Returned when an integer code does not name any [`ErrorCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error category code: {0}")]
pub struct UnknownCategory(pub i32);

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 4] = [
        ErrorCategory::InvalidValue,
        ErrorCategory::NotInitialized,
        ErrorCategory::ConvertFailed,
        ErrorCategory::RangeNotSatisfiable,
    ];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorCategory::InvalidValue),
            1 => Some(ErrorCategory::NotInitialized),
            2 => Some(ErrorCategory::ConvertFailed),
            3 => Some(ErrorCategory::RangeNotSatisfiable),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ErrorCategory::InvalidValue => "InvalidValue",
            ErrorCategory::NotInitialized => "NotInitialized",
            ErrorCategory::ConvertFailed => "ConvertFailed",
            ErrorCategory::RangeNotSatisfiable => "RangeNotSatisfiable",
        }
    }

    /// Message carried by this category's sentinel error.
    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorCategory::InvalidValue => "invalid value",
            ErrorCategory::NotInitialized => "not initialized",
            ErrorCategory::ConvertFailed => "convert failed",
            ErrorCategory::RangeNotSatisfiable => "range not satisfiable",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ErrorCategory> for i32 {
    fn from(category: ErrorCategory) -> Self {
        category.code()
    }
}

impl TryFrom<i32> for ErrorCategory {
    type Error = UnknownCategory;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ErrorCategory::from_code(code).ok_or(UnknownCategory(code))
    }
}

// Categories travel as their integer code, matching the `Code` field.
#[cfg(feature = "serde")]
impl serde::Serialize for ErrorCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ErrorCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = <i32 as serde::Deserialize>::deserialize(deserializer)?;
        ErrorCategory::try_from(code).map_err(serde::de::Error::custom)
    }
}
