//! JSON handlers for orders.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_domain::document::Document;
use dronemart_domain::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the status update. Only the `status` key is read; any
/// other keys are ignored.
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Value,
}

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

/// Possible responses from the status-update endpoint.
pub enum UpdateStatusResponse {
    Ok(Json<UpdateReceipt>),
}

impl IntoResponse for UpdateStatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint. The raw acknowledgment is
/// returned so clients can see `deletedCount`.
pub enum DeleteResponse {
    Ok(Json<DeleteReceipt>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /orders`
pub async fn create<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(order): Json<Document>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    tracing::debug!("inserting order");
    let receipt = state.order_service.place_order(order).await?;
    Ok(CreateResponse::Created(Json(receipt)))
}

/// `GET /orders`
pub async fn list<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let orders = state.order_service.list_orders().await?;
    Ok(ListResponse::Ok(Json(orders)))
}

/// `GET /orders/{id}`
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
    let order_id = parse_id(&id)?;
    let order = state.order_service.get_order(order_id).await?;
    Ok(GetResponse::Ok(Json(order)))
}

/// `PUT /orders/{id}`
pub async fn update_status<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<UpdateStatusResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let order_id = parse_id(&id)?;
    tracing::debug!(id = %order_id, "updating order status");
    let receipt = state
        .order_service
        .update_status(order_id, req.status)
        .await?;
    Ok(UpdateStatusResponse::Ok(Json(receipt)))
}

/// `DELETE /orders/{id}`
pub async fn delete<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let order_id = parse_id(&id)?;
    tracing::debug!(id = %order_id, "deleting order");
    let receipt = state.order_service.delete_order(order_id).await?;
    Ok(DeleteResponse::Ok(Json(receipt)))
}
