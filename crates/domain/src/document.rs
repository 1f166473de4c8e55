//! Loosely-typed stored documents.
//!
//! The API imposes no schema: every collection holds arbitrary JSON objects
//! supplied by clients. A document is therefore a plain key-to-value map;
//! the handful of fields the system does interpret (`email`, `role`,
//! `status`) are read through helpers rather than struct fields.

use serde_json::Value;

/// An opaque stored document: an ordered mapping of string keys to JSON
/// values.
pub type Document = serde_json::Map<String, Value>;

/// Read a string-valued field, returning `None` when the field is absent or
/// not a string.
#[must_use]
pub fn str_field<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn should_read_string_field() {
        let d = doc(json!({"status": "shipped"}));
        assert_eq!(str_field(&d, "status"), Some("shipped"));
    }

    #[test]
    fn should_return_none_when_field_absent() {
        let d = doc(json!({}));
        assert_eq!(str_field(&d, "status"), None);
    }

    #[test]
    fn should_return_none_when_field_not_a_string() {
        let d = doc(json!({"status": 42}));
        assert_eq!(str_field(&d, "status"), None);
    }
}
