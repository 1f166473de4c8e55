//! JSON handlers for customer reviews.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_domain::document::Document;
use dronemart_domain::receipt::InsertReceipt;

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

/// `POST /reviews`
pub async fn create<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(review): Json<Document>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let receipt = state.review_service.add_review(review).await?;
    Ok(CreateResponse::Created(Json(receipt)))
}

/// `GET /reviews`
pub async fn list<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}
