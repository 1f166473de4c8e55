//! # dronemart-domain
//!
//! Pure domain model for the dronemart store API.
//!
//! ## Responsibilities
//! - Foundational types: the [`id::DocumentId`] identifier, error conventions
//! - Define **Documents** — the loosely-typed JSON payloads stored in the
//!   four collections (products, orders, reviews, users)
//! - Define **Receipts** — typed acknowledgments for insert/update/delete
//! - Contain the single piece of domain logic in the system: the
//!   admin-role check on a user document
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod document;
pub mod error;
pub mod id;
pub mod receipt;
pub mod user;
