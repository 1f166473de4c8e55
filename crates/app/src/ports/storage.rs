//! Storage port — repository traits for persistence.
//!
//! One trait per collection, each method a single storage call. The futures
//! are `Send` so implementations can be driven from a multi-threaded
//! runtime.

use std::future::Future;

use serde_json::Value;

use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};

/// Persistence for the `products` collection.
pub trait ProductRepository {
    /// Insert one product document.
    fn insert(
        &self,
        product: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send;

    /// Fetch every product document.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Document>, DronemartError>> + Send;

    /// Fetch one product by id, `None` when absent.
    fn get_by_id(
        &self,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, DronemartError>> + Send;
}

/// Persistence for the `orders` collection.
pub trait OrderRepository {
    /// Insert one order document.
    fn insert(
        &self,
        order: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send;

    /// Fetch every order document.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Document>, DronemartError>> + Send;

    /// Fetch one order by id, `None` when absent.
    fn get_by_id(
        &self,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, DronemartError>> + Send;

    /// `$set` the `status` field of the order with the given id, creating a
    /// minimal document when the id is unknown (upsert).
    fn set_status(
        &self,
        id: DocumentId,
        status: Value,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send;

    /// Delete one order by id.
    fn delete(
        &self,
        id: DocumentId,
    ) -> impl Future<Output = Result<DeleteReceipt, DronemartError>> + Send;
}

/// Persistence for the `reviews` collection.
pub trait ReviewRepository {
    /// Insert one review document.
    fn insert(
        &self,
        review: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send;

    /// Fetch every review document.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Document>, DronemartError>> + Send;
}

/// Persistence for the `users` collection.
pub trait UserRepository {
    /// Insert one user document.
    fn insert(
        &self,
        user: Document,
    ) -> impl Future<Output = Result<InsertReceipt, DronemartError>> + Send;

    /// Fetch every user document.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Document>, DronemartError>> + Send;

    /// Fetch one user by its `email` field, `None` when absent.
    fn find_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Document>, DronemartError>> + Send;

    /// `$set` the whole body onto the user matching `email`, inserting when
    /// no user matches (upsert).
    fn upsert_by_email(
        &self,
        email: String,
        user: Document,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send;

    /// Set the `role` field of the user matching `email` to the admin
    /// marker. Deliberately **not** an upsert: an unknown email is a silent
    /// no-op reported through the receipt's `matched_count`.
    fn grant_admin(
        &self,
        email: String,
    ) -> impl Future<Output = Result<UpdateReceipt, DronemartError>> + Send;
}
