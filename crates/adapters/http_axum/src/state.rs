//! Shared application state for axum handlers.

use std::sync::Arc;

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_app::services::order_service::OrderService;
use dronemart_app::services::product_service::ProductService;
use dronemart_app::services::review_service::ReviewService;
use dronemart_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, OR, RR, UR> {
    /// Product catalog service.
    pub product_service: Arc<ProductService<PR>>,
    /// Order service.
    pub order_service: Arc<OrderService<OR>>,
    /// Review service.
    pub review_service: Arc<ReviewService<RR>>,
    /// User account service.
    pub user_service: Arc<UserService<UR>>,
}

impl<PR, OR, RR, UR> Clone for AppState<PR, OR, RR, UR> {
    fn clone(&self) -> Self {
        Self {
            product_service: Arc::clone(&self.product_service),
            order_service: Arc::clone(&self.order_service),
            review_service: Arc::clone(&self.review_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<PR, OR, RR, UR> AppState<PR, OR, RR, UR>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        product_service: ProductService<PR>,
        order_service: OrderService<OR>,
        review_service: ReviewService<RR>,
        user_service: UserService<UR>,
    ) -> Self {
        Self {
            product_service: Arc::new(product_service),
            order_service: Arc::new(order_service),
            review_service: Arc::new(review_service),
            user_service: Arc::new(user_service),
        }
    }
}
