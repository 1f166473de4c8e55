//! User-document field conventions.
//!
//! Users are opaque documents like everything else, but two of their fields
//! carry meaning: `email` is the secondary lookup key and `role` marks
//! administrators. This is the only interpretation of stored data the
//! system performs.

use crate::document::{Document, str_field};

/// Value of the `role` field that marks an administrator.
pub const ADMIN_ROLE: &str = "admin";

/// Key of the secondary lookup field on user documents.
pub const EMAIL_FIELD: &str = "email";

/// Whether the user's `role` field equals [`ADMIN_ROLE`].
///
/// A missing or non-string `role` is not an admin.
#[must_use]
pub fn has_admin_role(user: &Document) -> bool {
    str_field(user, "role") == Some(ADMIN_ROLE)
}

/// The user's `email` field, when present and a string.
#[must_use]
pub fn email_of(user: &Document) -> Option<&str> {
    str_field(user, EMAIL_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn should_detect_admin_role() {
        let user = doc(json!({"email": "a@x.com", "role": "admin"}));
        assert!(has_admin_role(&user));
    }

    #[test]
    fn should_reject_other_roles() {
        let user = doc(json!({"email": "a@x.com", "role": "user"}));
        assert!(!has_admin_role(&user));
    }

    #[test]
    fn should_reject_missing_role() {
        let user = doc(json!({"email": "a@x.com"}));
        assert!(!has_admin_role(&user));
    }

    #[test]
    fn should_reject_non_string_role() {
        let user = doc(json!({"role": true}));
        assert!(!has_admin_role(&user));
    }

    #[test]
    fn should_extract_email() {
        let user = doc(json!({"email": "a@x.com"}));
        assert_eq!(email_of(&user), Some("a@x.com"));
    }

    #[test]
    fn should_return_none_when_email_missing() {
        let user = doc(json!({"name": "nobody"}));
        assert_eq!(email_of(&user), None);
    }
}
