//! Document identifier newtype.
//!
//! The storage layer assigns every document a 12-byte identifier whose wire
//! form is 24 lowercase hex characters. The domain keeps it as raw bytes so
//! that no driver type leaks past the storage adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of raw bytes in a [`DocumentId`].
pub const ID_LEN: usize = 12;

/// Unique identifier for a stored document.
///
/// Serializes to and parses from the 24-character hex form used in URLs and
/// JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId([u8; ID_LEN]);

impl DocumentId {
    /// Generate a random identifier.
    ///
    /// Real identifiers are assigned by the storage layer; this exists for
    /// in-process stores and tests.
    #[must_use]
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let mut bytes = [0u8; ID_LEN];
        bytes.copy_from_slice(&uuid.as_bytes()[..ID_LEN]);
        Self(bytes)
    }

    /// Wrap existing raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; ID_LEN] {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Failure to parse a [`DocumentId`] from its hex form.
#[derive(Debug, thiserror::Error)]
#[error("malformed document id: {value:?}")]
pub struct ParseIdError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for DocumentId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseIdError {
                value: s.to_string(),
            });
        }
        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // Slicing is safe: the input is exactly 24 ASCII characters.
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| ParseIdError {
                value: s.to_string(),
            })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for DocumentId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DocumentId::new();
        let text = id.to_string();
        let parsed: DocumentId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_render_as_24_hex_chars() {
        let id = DocumentId::from_bytes([0xab; 12]);
        assert_eq!(id.to_string(), "ab".repeat(12));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = DocumentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_wrong_length() {
        let result = DocumentId::from_str("abc123");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_error_when_parsing_non_hex() {
        let result = DocumentId::from_str("zzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(result.is_err());
    }

    #[test]
    fn should_accept_uppercase_hex() {
        let parsed = DocumentId::from_str("61AF0000000000000000FFFF").unwrap();
        assert_eq!(parsed.as_bytes()[0], 0x61);
        assert_eq!(parsed.as_bytes()[11], 0xff);
    }

    #[test]
    fn should_wrap_existing_bytes() {
        let bytes = [7u8; 12];
        let id = DocumentId::from_bytes(bytes);
        assert_eq!(id.as_bytes(), bytes);
    }
}
