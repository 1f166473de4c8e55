//! MongoDB implementation of [`UserRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use dronemart_app::ports::UserRepository;
use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::receipt::{InsertReceipt, UpdateReceipt};
use dronemart_domain::user::{ADMIN_ROLE, EMAIL_FIELD};

use crate::client::Database;
use crate::codec;
use crate::error::StorageError;

/// MongoDB-backed user repository.
///
/// Users are addressed two ways: by `_id` like every other collection, and
/// by their `email` field for the upsert/admin operations. Email uniqueness
/// is not enforced here; the filters simply match the first document.
pub struct MongoUserRepository {
    collection: Collection<mongodb::bson::Document>,
}

impl MongoUserRepository {
    /// Create a new repository over the `users` collection.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.users(),
        }
    }
}

impl UserRepository for MongoUserRepository {
    fn insert(
        &self,
        user: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let encoded = codec::to_bson_document(user)?;
            let result = collection
                .insert_one(encoded)
                .await
                .map_err(StorageError::from)?;

            let inserted_id = codec::document_id(&result.inserted_id)?;
            Ok(InsertReceipt { inserted_id })
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Document>, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let cursor = collection
                .find(doc! {})
                .await
                .map_err(StorageError::from)?;
            let docs: Vec<mongodb::bson::Document> =
                cursor.try_collect().await.map_err(StorageError::from)?;

            Ok(docs.into_iter().map(codec::to_json_document).collect())
        }
    }

    fn find_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Document>, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let found = collection
                .find_one(doc! {EMAIL_FIELD: email})
                .await
                .map_err(StorageError::from)?;

            Ok(found.map(codec::to_json_document))
        }
    }

    fn upsert_by_email(
        &self,
        email: String,
        user: Document,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let encoded = codec::to_bson_document(user)?;
            let result = collection
                .update_one(doc! {EMAIL_FIELD: email}, doc! {"$set": encoded})
                .upsert(true)
                .await
                .map_err(StorageError::from)?;

            Ok(codec::update_receipt(result)?)
        }
    }

    fn grant_admin(
        &self,
        email: String,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            // No upsert: promoting an unknown email must stay a no-op.
            let result = collection
                .update_one(
                    doc! {EMAIL_FIELD: email},
                    doc! {"$set": {"role": ADMIN_ROLE}},
                )
                .await
                .map_err(StorageError::from)?;

            Ok(codec::update_receipt(result)?)
        }
    }
}
