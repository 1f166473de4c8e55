//! # dronemart-adapter-storage-mongodb
//!
//! MongoDB persistence adapter using the official
//! [driver](https://docs.rs/mongodb).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in
//!   `dronemart-app::ports::storage`, one driver call per method
//! - Own the client handle and verify connectivity at startup so a bad
//!   deployment fails before the HTTP listener binds
//! - Convert between loose JSON documents and BSON, rendering `ObjectId`s
//!   in their 24-hex wire form
//!
//! ## Dependency rule
//! Depends on `dronemart-app` (for port traits) and `dronemart-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod client;
pub mod codec;
pub mod error;

mod order_repo;
mod product_repo;
mod review_repo;
mod user_repo;

pub use client::{Config, Database};
pub use error::StorageError;
pub use order_repo::MongoOrderRepository;
pub use product_repo::MongoProductRepository;
pub use review_repo::MongoReviewRepository;
pub use user_repo::MongoUserRepository;
