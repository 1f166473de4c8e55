//! BSON ⇄ JSON document conversion.
//!
//! Clients speak plain JSON; the driver speaks BSON. The one lossy spot is
//! identifiers: stored `ObjectId`s are rendered as their 24-hex string on
//! the way out, matching what JSON clients of this API have always seen.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson};
use mongodb::results::UpdateResult;
use serde_json::Value;

use dronemart_domain::document::Document;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::UpdateReceipt;

use crate::error::StorageError;

/// Convert a domain id into the driver's `ObjectId`.
#[must_use]
pub fn object_id(id: DocumentId) -> ObjectId {
    ObjectId::from_bytes(id.as_bytes())
}

/// Extract a domain id from a BSON identifier returned by a write.
///
/// # Errors
///
/// Returns [`StorageError::UnexpectedId`] when the value is not an
/// `ObjectId` (possible when a client supplied its own `_id` on insert).
pub fn document_id(value: &Bson) -> Result<DocumentId, StorageError> {
    match value {
        Bson::ObjectId(oid) => Ok(DocumentId::from_bytes(oid.bytes())),
        other => Err(StorageError::UnexpectedId(other.to_string())),
    }
}

/// Encode a JSON document for storage.
///
/// # Errors
///
/// Returns [`StorageError::Bson`] when a value has no BSON representation.
pub fn to_bson_document(doc: Document) -> Result<bson::Document, StorageError> {
    Ok(bson::to_document(&doc)?)
}

/// Decode a stored document into its JSON wire form.
#[must_use]
pub fn to_json_document(doc: bson::Document) -> Document {
    doc.into_iter()
        .map(|(key, value)| (key, to_json_value(value)))
        .collect()
}

fn to_json_value(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(to_json_document(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json_value).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert the driver's update acknowledgment into a receipt.
///
/// # Errors
///
/// Returns [`StorageError::UnexpectedId`] when an upsert produced a
/// non-`ObjectId` identifier.
pub fn update_receipt(result: UpdateResult) -> Result<UpdateReceipt, StorageError> {
    let upserted_id = result.upserted_id.as_ref().map(document_id).transpose()?;
    Ok(UpdateReceipt {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id,
    })
}
