//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use dronemart_app::ports::{
    OrderRepository, ProductRepository, ReviewRepository, UserRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Collection routes live at the root, matching the paths the original
/// clients use. Includes a [`TraceLayer`] that logs each request/response at
/// the `DEBUG` level and a permissive [`CorsLayer`] so browsers may call the
/// API from any origin.
pub fn build<PR, OR, RR, UR>(state: AppState<PR, OR, RR, UR>) -> Router
where
    PR: ProductRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(greeting))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Welcome to the dronemart server"
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use dronemart_app::services::order_service::OrderService;
    use dronemart_app::services::product_service::ProductService;
    use dronemart_app::services::review_service::ReviewService;
    use dronemart_app::services::user_service::UserService;
    use dronemart_domain::document::Document;
    use dronemart_domain::error::DronemartError;
    use dronemart_domain::id::DocumentId;
    use dronemart_domain::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};

    struct StubProductRepo;
    struct StubOrderRepo;
    struct StubReviewRepo;
    struct StubUserRepo;

    fn empty_update() -> UpdateReceipt {
        UpdateReceipt {
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
        }
    }

    impl ProductRepository for StubProductRepo {
        async fn insert(&self, _product: Document) -> Result<InsertReceipt, DronemartError> {
            Ok(InsertReceipt {
                inserted_id: DocumentId::new(),
            })
        }
        async fn get_all(&self) -> Result<Vec<Document>, DronemartError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: DocumentId) -> Result<Option<Document>, DronemartError> {
            Ok(None)
        }
    }

    impl OrderRepository for StubOrderRepo {
        async fn insert(&self, _order: Document) -> Result<InsertReceipt, DronemartError> {
            Ok(InsertReceipt {
                inserted_id: DocumentId::new(),
            })
        }
        async fn get_all(&self) -> Result<Vec<Document>, DronemartError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: DocumentId) -> Result<Option<Document>, DronemartError> {
            Ok(None)
        }
        async fn set_status(
            &self,
            _id: DocumentId,
            _status: Value,
        ) -> Result<UpdateReceipt, DronemartError> {
            Ok(empty_update())
        }
        async fn delete(&self, _id: DocumentId) -> Result<DeleteReceipt, DronemartError> {
            Ok(DeleteReceipt { deleted_count: 0 })
        }
    }

    impl ReviewRepository for StubReviewRepo {
        async fn insert(&self, _review: Document) -> Result<InsertReceipt, DronemartError> {
            Ok(InsertReceipt {
                inserted_id: DocumentId::new(),
            })
        }
        async fn get_all(&self) -> Result<Vec<Document>, DronemartError> {
            Ok(vec![])
        }
    }

    impl UserRepository for StubUserRepo {
        async fn insert(&self, _user: Document) -> Result<InsertReceipt, DronemartError> {
            Ok(InsertReceipt {
                inserted_id: DocumentId::new(),
            })
        }
        async fn get_all(&self) -> Result<Vec<Document>, DronemartError> {
            Ok(vec![])
        }
        async fn find_by_email(&self, _email: String) -> Result<Option<Document>, DronemartError> {
            Ok(None)
        }
        async fn upsert_by_email(
            &self,
            _email: String,
            _user: Document,
        ) -> Result<UpdateReceipt, DronemartError> {
            Ok(empty_update())
        }
        async fn grant_admin(&self, _email: String) -> Result<UpdateReceipt, DronemartError> {
            Ok(empty_update())
        }
    }

    fn test_state() -> AppState<StubProductRepo, StubOrderRepo, StubReviewRepo, StubUserRepo> {
        AppState::new(
            ProductService::new(StubProductRepo),
            OrderService::new(StubOrderRepo),
            ReviewService::new(StubReviewRepo),
            UserService::new(StubUserRepo),
        )
    }

    #[tokio::test]
    async fn should_return_greeting_at_root() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Welcome to the dronemart server");
    }

    #[tokio::test]
    async fn should_list_empty_products() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_id() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products/not-a-valid-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_null_for_unknown_id() {
        let app = build(test_state());
        let id = DocumentId::new().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/orders/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed.is_null());
    }

    #[tokio::test]
    async fn should_route_admin_path_ahead_of_email_lookup() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/users/admin")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"email": "a@x.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["matchedCount"], serde_json::json!(0));
    }

    #[tokio::test]
    async fn should_report_not_admin_for_unknown_user() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users/ghost@x.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, serde_json::json!({"admin": false}));
    }
}
