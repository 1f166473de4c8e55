//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod orders;
#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, put};

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_domain::error::{DronemartError, ValidationError};
use dronemart_domain::id::DocumentId;

use crate::error::ApiError;
use crate::state::AppState;

/// Parse an `{id}` path segment, mapping failure to a 400 response.
pub(crate) fn parse_id(raw: &str) -> Result<DocumentId, ApiError> {
    raw.parse::<DocumentId>()
        .map_err(|err| ApiError::from(DronemartError::from(ValidationError::from(err))))
}

/// Build the collection routes.
pub fn routes<PR, OR, RR, UR>() -> Router<AppState<PR, OR, RR, UR>>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Products
        .route(
            "/products",
            get(products::list::<PR, OR, RR, UR>).post(products::create::<PR, OR, RR, UR>),
        )
        .route("/products/{id}", get(products::get::<PR, OR, RR, UR>))
        // Orders
        .route(
            "/orders",
            get(orders::list::<PR, OR, RR, UR>).post(orders::create::<PR, OR, RR, UR>),
        )
        .route(
            "/orders/{id}",
            get(orders::get::<PR, OR, RR, UR>)
                .put(orders::update_status::<PR, OR, RR, UR>)
                .delete(orders::delete::<PR, OR, RR, UR>),
        )
        // Reviews
        .route(
            "/reviews",
            get(reviews::list::<PR, OR, RR, UR>).post(reviews::create::<PR, OR, RR, UR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<PR, OR, RR, UR>)
                .post(users::create::<PR, OR, RR, UR>)
                .put(users::upsert::<PR, OR, RR, UR>),
        )
        .route("/users/admin", put(users::grant_admin::<PR, OR, RR, UR>))
        .route("/users/{email}", get(users::admin_status::<PR, OR, RR, UR>))
}
