//! MongoDB client setup and collection handles.

use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::error::StorageError;

const PRODUCTS: &str = "products";
const ORDERS: &str = "orders";
const REVIEWS: &str = "reviews";
const USERS: &str = "users";

/// Configuration for the MongoDB storage adapter.
pub struct Config {
    /// Connection URI (credentials ride inside it).
    pub uri: String,
    /// Name of the database holding the four collections.
    pub database: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DRONEMART_DATABASE_URI` or
    /// `DRONEMART_DATABASE_NAME` is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            uri: std::env::var("DRONEMART_DATABASE_URI")?,
            database: std::env::var("DRONEMART_DATABASE_NAME")?,
        })
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Connects and pings the deployment so that an unreachable or
    /// misconfigured database aborts startup instead of failing on the
    /// first request.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or the ping fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.uri, &self.database).await
    }
}

/// Holds the database handle and hands out collection handles.
///
/// The driver pools connections internally; collection handles are cheap
/// clones sharing that pool.
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    async fn initialize(uri: &str, name: &str) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(name);

        // The driver connects lazily; a ping forces the handshake now.
        db.run_command(doc! {"ping": 1}).await?;

        Ok(Self { db })
    }

    /// Handle for the `products` collection.
    #[must_use]
    pub fn products(&self) -> Collection<mongodb::bson::Document> {
        self.db.collection(PRODUCTS)
    }

    /// Handle for the `orders` collection.
    #[must_use]
    pub fn orders(&self) -> Collection<mongodb::bson::Document> {
        self.db.collection(ORDERS)
    }

    /// Handle for the `reviews` collection.
    #[must_use]
    pub fn reviews(&self) -> Collection<mongodb::bson::Document> {
        self.db.collection(REVIEWS)
    }

    /// Handle for the `users` collection.
    #[must_use]
    pub fn users(&self) -> Collection<mongodb::bson::Document> {
        self.db.collection(USERS)
    }
}
