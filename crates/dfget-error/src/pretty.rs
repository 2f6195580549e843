//! Well-formed JSON encodings of [`TaggedError`].
//!
//! `describe()` builds its `{"Code":..,"Msg":".."}` string by plain formatting and does
//! not escape the message. The helpers here go through `serde_json` and produce the same
//! field names with proper escaping. Gated behind the `serde` feature.

#![cfg(feature = "serde")]

use super::TaggedError;

impl TaggedError {
    /// Compact JSON, `{"Code":<int>,"Msg":"<escaped string>"}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Indented JSON for humans.
    pub fn pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the `to_json` form back. Unknown codes are rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
