//! User service — use-cases for user accounts and the admin flag.

use dronemart_domain::document::Document;
use dronemart_domain::error::{DronemartError, ValidationError};
use dronemart_domain::receipt::{InsertReceipt, UpdateReceipt};
use dronemart_domain::user;

use crate::ports::UserRepository;

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new user document and return the insert acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn add_user(&self, user: Document) -> Result<InsertReceipt, DronemartError> {
        self.repo.insert(user).await
    }

    /// List every user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<Document>, DronemartError> {
        self.repo.get_all().await
    }

    /// Upsert a user keyed by the `email` field of the body: the whole body
    /// is `$set` onto the matching user, or a new user is created.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEmail`] when the body has no string
    /// `email` field, or a storage error from the repository.
    pub async fn upsert_user(&self, user: Document) -> Result<UpdateReceipt, DronemartError> {
        let email = user::email_of(&user)
            .ok_or(ValidationError::MissingEmail)?
            .to_string();
        self.repo.upsert_by_email(email, user).await
    }

    /// Promote the user with the given email to admin. An unknown email is
    /// a silent no-op: the receipt reports `matched_count: 0` and nothing is
    /// created.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn grant_admin(&self, email: String) -> Result<UpdateReceipt, DronemartError> {
        self.repo.grant_admin(email).await
    }

    /// Whether the user with the given email has the admin role. Unknown
    /// users and users without the role are simply not admins.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn is_admin(&self, email: String) -> Result<bool, DronemartError> {
        let found = self.repo.find_by_email(email).await?;
        Ok(found.is_some_and(|user| user::has_admin_role(&user)))
    }
}
