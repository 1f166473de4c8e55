//! MongoDB implementation of [`OrderRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, doc};
use serde_json::Value;

use dronemart_app::ports::OrderRepository;
use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};

use crate::client::Database;
use crate::codec;
use crate::error::StorageError;

/// MongoDB-backed order repository.
pub struct MongoOrderRepository {
    collection: Collection<mongodb::bson::Document>,
}

impl MongoOrderRepository {
    /// Create a new repository over the `orders` collection.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.orders(),
        }
    }
}

impl OrderRepository for MongoOrderRepository {
    fn insert(
        &self,
        order: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let encoded = codec::to_bson_document(order)?;
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

    fn get_by_id(
        &self,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let found = collection
                .find_one(doc! {"_id": codec::object_id(id)})
                .await
                .map_err(StorageError::from)?;

            Ok(found.map(codec::to_json_document))
        }
    }

    fn set_status(
        &self,
        id: DocumentId,
        status: Value,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let status = bson::to_bson(&status).map_err(StorageError::from)?;
            let result = collection
                .update_one(
                    doc! {"_id": codec::object_id(id)},
                    doc! {"$set": {"status": status}},
                )
                .upsert(true)
                .await
                .map_err(StorageError::from)?;

            Ok(codec::update_receipt(result)?)
        }
    }

    fn delete(
        &self,
        id: DocumentId,
    ) -> impl Future<Output = Result<DeleteReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let result = collection
                .delete_one(doc! {"_id": codec::object_id(id)})
                .await
                .map_err(StorageError::from)?;

            Ok(DeleteReceipt {
                deleted_count: result.deleted_count,
            })
        }
    }
}
