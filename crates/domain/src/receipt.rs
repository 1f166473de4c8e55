//! Typed write acknowledgments.
//!
//! Every mutating endpoint returns the storage layer's acknowledgment
//! verbatim. These mirror the document driver's result shapes, in the
//! camelCase wire form clients of the original API expect.

use serde::{Deserialize, Serialize};

use crate::id::DocumentId;

/// Acknowledgment of a single-document insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    /// Identifier assigned to the new document.
    pub inserted_id: DocumentId,
}

/// Acknowledgment of a single-document update, possibly an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    /// Number of documents matched by the filter (0 or 1).
    pub matched_count: u64,
    /// Number of documents actually modified (0 or 1).
    pub modified_count: u64,
    /// Identifier of the document created by an upsert, when one was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<DocumentId>,
}

/// Acknowledgment of a single-document delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    /// Number of documents removed (0 or 1).
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_insert_receipt_in_camel_case() {
        let receipt = InsertReceipt {
            inserted_id: DocumentId::from_bytes([1; 12]),
        };
        let value = serde_json::to_value(receipt).unwrap();
        assert_eq!(value, json!({"insertedId": "01".repeat(12)}));
    }

    #[test]
    fn should_omit_upserted_id_when_absent() {
        let receipt = UpdateReceipt {
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };
        let value = serde_json::to_value(receipt).unwrap();
        assert_eq!(value, json!({"matchedCount": 1, "modifiedCount": 1}));
    }

    #[test]
    fn should_include_upserted_id_when_present() {
        let receipt = UpdateReceipt {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(DocumentId::from_bytes([2; 12])),
        };
        let value = serde_json::to_value(receipt).unwrap();
        assert_eq!(value["upsertedId"], json!("02".repeat(12)));
    }

    #[test]
    fn should_serialize_delete_receipt() {
        let receipt = DeleteReceipt { deleted_count: 1 };
        let value = serde_json::to_value(receipt).unwrap();
        assert_eq!(value, json!({"deletedCount": 1}));
    }
}
