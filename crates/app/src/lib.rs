//! # dronemart-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): one repository trait per collection
//!   (`ProductRepository`, `OrderRepository`, `ReviewRepository`,
//!   `UserRepository`)
//! - Define **driving/inbound ports** as use-case structs:
//!   `ProductService`, `OrderService`, `ReviewService`, `UserService`
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `dronemart-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
