//! MongoDB implementation of [`ProductRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use dronemart_app::ports::ProductRepository;
use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::InsertReceipt;

use crate::client::Database;
use crate::codec;
use crate::error::StorageError;

/// MongoDB-backed product repository.
pub struct MongoProductRepository {
    collection: Collection<mongodb::bson::Document>,
}

impl MongoProductRepository {
    /// Create a new repository over the `products` collection.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.products(),
        }
    }
}

impl ProductRepository for MongoProductRepository {
    fn insert(
        &self,
        product: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let encoded = codec::to_bson_document(product)?;
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
}
