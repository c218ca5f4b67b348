//! Configuration item model

use serde::{Deserialize, Serialize};

/// Maximum key length in characters, matching the persisted schema.
pub const MAX_KEY_LEN: usize = 55;

/// Maximum serialized value length in characters.
pub const MAX_VALUE_LEN: usize = 255;

/// A unique key paired with an opaque serialized value.
///
/// The value holds a JSON-encoded payload produced by the API layer; the
/// store treats it as plain text and never re-parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    /// Unique key, 1-55 characters
    pub key: String,

    /// Serialized value, 1-255 characters
    pub value: String,
}

impl ConfigItem {
    /// Create a new configuration item
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
