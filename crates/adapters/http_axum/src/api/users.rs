//! JSON handlers for user accounts and the admin flag.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};
use dronemart_domain::document::Document;
use dronemart_domain::error::{DronemartError, ValidationError};
use dronemart_domain::receipt::{InsertReceipt, UpdateReceipt};
use dronemart_domain::user::email_of;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the admin-flag lookup.
#[derive(Serialize)]
pub struct AdminStatus {
    pub admin: bool,
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

/// Possible responses from the upsert and grant-admin endpoints.
pub enum UpdateResponse {
    Ok(Json<UpdateReceipt>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the admin-flag endpoint.
pub enum AdminStatusResponse {
    Ok(Json<AdminStatus>),
}

impl IntoResponse for AdminStatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /users`
pub async fn create<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(user): Json<Document>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let receipt = state.user_service.add_user(user).await?;
    Ok(CreateResponse::Created(Json(receipt)))
}

/// `GET /users`
pub async fn list<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `PUT /users` — upsert the whole body keyed by its `email` field.
pub async fn upsert<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(user): Json<Document>,
) -> Result<UpdateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let receipt = state.user_service.upsert_user(user).await?;
    Ok(UpdateResponse::Ok(Json(receipt)))
}

/// `PUT /users/admin` — promote the user named by the body's `email` field.
/// No upsert: an unknown email is acknowledged with `matchedCount: 0`.
pub async fn grant_admin<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Json(body): Json<Document>,
) -> Result<UpdateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let email = email_of(&body)
        .ok_or_else(|| DronemartError::from(ValidationError::MissingEmail))?
        .to_string();
    tracing::debug!(email, "granting admin role");
    let receipt = state.user_service.grant_admin(email).await?;
    Ok(UpdateResponse::Ok(Json(receipt)))
}

/// `GET /users/{email}` — `{"admin": true}` iff the user exists and its
/// `role` equals the admin marker.
pub async fn admin_status<PR, OR, RR, UR>(
    State(state): State<AppState<PR, OR, RR, UR>>,
    Path(email): Path<String>,
) -> Result<AdminStatusResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let admin = state.user_service.is_admin(email).await?;
    Ok(AdminStatusResponse::Ok(Json(AdminStatus { admin })))
}
