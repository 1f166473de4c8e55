//! Review service — use-cases for customer reviews.

use dronemart_domain::document::Document;
use dronemart_domain::error::DronemartError;
use dronemart_domain::receipt::InsertReceipt;

use crate::ports::ReviewRepository;

/// Application service for review operations.
pub struct ReviewService<R> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new review document and return the insert acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn add_review(&self, review: Document) -> Result<InsertReceipt, DronemartError> {
        self.repo.insert(review).await
    }

    /// List every review.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Document>, DronemartError> {
        self.repo.get_all().await
    }
}
