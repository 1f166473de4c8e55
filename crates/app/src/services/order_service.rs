//! Order service — use-cases for placed orders.

use serde_json::Value;

use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};

use crate::ports::OrderRepository;

/// Application service for order operations.
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new order document and return the insert acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn place_order(&self, order: Document) -> Result<InsertReceipt, DronemartError> {
        self.repo.insert(order).await
    }

    /// List every order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_orders(&self) -> Result<Vec<Document>, DronemartError> {
        self.repo.get_all().await
    }

    /// Look up an order by id. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_order(&self, id: DocumentId) -> Result<Option<Document>, DronemartError> {
        self.repo.get_by_id(id).await
    }

    /// Overwrite the `status` field of one order, creating a minimal
    /// document when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_status(
        &self,
        id: DocumentId,
        status: Value,
    ) -> Result<UpdateReceipt, DronemartError> {
        self.repo.set_status(id, status).await
    }

    /// Delete one order by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_order(&self, id: DocumentId) -> Result<DeleteReceipt, DronemartError> {
        self.repo.delete(id).await
    }
}
