//! JSON handlers for the product catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_domain::document::Document;
use dronemart_domain::receipt::InsertReceipt;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Document>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint. A miss is `null`, not 404.
pub enum GetResponse {
    Ok(Json<Option<Document>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<InsertReceipt>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /products`
pub async fn create<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(product): Json<Document>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    tracing::debug!("inserting product");
    let receipt = state.product_service.add_product(product).await?;
    Ok(CreateResponse::Created(Json(receipt)))
}

/// `GET /products`
pub async fn list<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /products/{id}`
pub async fn get<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;
    tracing::debug!(id = %product_id, "fetching product");
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}
