//! MongoDB implementation of [`ReviewRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use dronemart_app::ports::ReviewRepository;
use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::receipt::InsertReceipt;

use crate::client::Database;
use crate::codec;
use crate::error::StorageError;

/// MongoDB-backed review repository.
pub struct MongoReviewRepository {
    collection: Collection<mongodb::bson::Document>,
}

impl MongoReviewRepository {
    /// Create a new repository over the `reviews` collection.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.reviews(),
        }
    }
}

impl ReviewRepository for MongoReviewRepository {
    fn insert(
        &self,
        review: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send {
        let collection = self.collection.clone();
        async move {
            let encoded = codec::to_bson_document(review)?;
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
}
