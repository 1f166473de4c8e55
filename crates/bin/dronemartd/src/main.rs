//! # dronemartd — dronemart daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`.env`, `dronemart.toml`, env vars)
//! - Initialize the tracing subscriber
//! - Connect to MongoDB and verify the connection — a failure here aborts
//!   the process before the listener binds
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use dronemart_adapter_http_axum::state::AppState;
use dronemart_adapter_storage_mongodb::{
    Config as StorageConfig, MongoOrderRepository, MongoProductRepository, MongoReviewRepository,
    MongoUserRepository,
};
use dronemart_app::services::order_service::OrderService;
use dronemart_app::services::product_service::ProductService;
use dronemart_app::services::review_service::ReviewService;
use dronemart_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database — connect and ping before anything else; serving requests
    // against a dead storage handle is worse than refusing to start.
    let db = StorageConfig {
        uri: config.database.uri.clone(),
        database: config.database.name.clone(),
    }
    .build()
    .await?;
    tracing::info!(database = %config.database.name, "connected to storage");

    // Repositories
    let product_repo = MongoProductRepository::new(&db);
    let order_repo = MongoOrderRepository::new(&db);
    let review_repo = MongoReviewRepository::new(&db);
    let user_repo = MongoUserRepository::new(&db);

    // Services
    let product_service = ProductService::new(product_repo);
    let order_service = OrderService::new(order_repo);
    let review_service = ReviewService::new(review_repo);
    let user_service = UserService::new(user_repo);

    // HTTP
    let state = AppState::new(product_service, order_service, review_service, user_service);
    let app = dronemart_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
