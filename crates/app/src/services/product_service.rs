//! Product service — use-cases for the product catalog.

use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::id::DocumentId;
use dronemart_domain::receipt::InsertReceipt;

use crate::ports::ProductRepository;

/// Application service for product operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new product document and return the insert acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn add_product(&self, product: Document) -> Result<InsertReceipt, DronemartError> {
        self.repo.insert(product).await
    }

    /// List every product.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Document>, DronemartError> {
        self.repo.get_all().await
    }

    /// Look up a product by id. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_product(&self, id: DocumentId) -> Result<Option<Document>, DronemartError> {
        self.repo.get_by_id(id).await
    }
}
