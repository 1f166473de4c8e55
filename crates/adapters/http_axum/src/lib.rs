//! # dronemart-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for the four collections
//!   (`/products`, `/orders`, `/reviews`, `/users`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results — documents, receipts, errors — into HTTP
//!   responses
//! - Permit cross-origin requests from any origin and trace every request
//!
//! ## Dependency rule
//! Depends on `dronemart-app` (for port traits and services) and
//! `dronemart-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
