//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::MessageBody;
use super::modules::health::{self, HealthResponse, HealthState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserHandlerState, UserPayload};
use crate::application::UserService;
use crate::domain::User;
use crate::infrastructure::InMemoryUserRepository;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::get_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(User, UserPayload, MessageBody, HealthResponse)),
    tags(
        (name = "Users", description = "User CRUD"),
        (name = "Health", description = "Liveness probe")
    ),
    info(title = "User Service", description = "User CRUD over an in-memory store")
)]
pub struct ApiDoc;

/// Build the HTTP router.
///
/// `repo` must be the repository `service` was built over; the health
/// endpoint reads the user count from it.
pub fn create_api_router(
    service: Arc<UserService<InMemoryUserRepository>>,
    repo: Arc<InMemoryUserRepository>,
    docs: bool,
) -> Router {
    let user_routes = Router::new()
        .route(
            "/user",
            get(users::get_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/user/{id}", get(users::get_user))
        .with_state(UserHandlerState {
            user_service: service,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            repo,
            started_at: Arc::new(Instant::now()),
        });

    let mut router = Router::new().merge(user_routes).merge(health_routes);

    if docs {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FailureStatusPolicy;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(seed: Vec<User>, policy: FailureStatusPolicy) -> Router {
        let repo = Arc::new(InMemoryUserRepository::with_users(seed));
        let service = Arc::new(UserService::with_policy(repo.clone(), policy));
        create_api_router(service, repo, true)
    }

    fn app(seed: Vec<User>) -> Router {
        app_with(seed, FailureStatusPolicy::NoContent)
    }

    fn yuri() -> User {
        User::new("2", "Yuri", "yuri@gmail.com")
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(v) => Body::from(serde_json::to_vec(&v).unwrap()),
            None => Body::empty(),
        };
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn create_then_find() {
        let app = app(vec![]);

        let (status, body) = call(
            &app,
            "POST",
            "/user",
            Some(json!({"id": "2", "name": "Yuri", "email": "yuri@gmail.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"message": ""}));

        let (status, body) = call(&app, "GET", "/user/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": "2", "name": "Yuri", "email": "yuri@gmail.com"})
        );
    }

    #[tokio::test]
    async fn create_with_missing_field_is_no_content() {
        let app = app(vec![]);

        let (status, _) = call(&app, "POST", "/user", Some(json!({"id": "2", "name": "Yuri"}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, "POST", "/user", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, "GET", "/user", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn list_returns_array() {
        let app = app(vec![yuri(), User::new("3", "Ana", "ana@mail.com")]);

        let (status, body) = call(&app, "GET", "/user", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["id"], "2");
        assert_eq!(body[1]["name"], "Ana");
    }

    #[tokio::test]
    async fn update_overwrites_and_unknown_id_fails() {
        let app = app(vec![yuri()]);

        let (status, body) = call(
            &app,
            "PUT",
            "/user",
            Some(json!({"id": "2", "name": "Yuri Dias", "email": "dias@gmail.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": ""}));

        let (_, body) = call(&app, "GET", "/user/2", None).await;
        assert_eq!(body["name"], "Yuri Dias");
        assert_eq!(body["email"], "dias@gmail.com");

        let (status, _) = call(
            &app,
            "PUT",
            "/user",
            Some(json!({"id": "9", "name": "x", "email": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_then_find_is_not_found() {
        let app = app(vec![yuri()]);

        let (status, body) = call(&app, "DELETE", "/user", Some(json!({"id": "2"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": ""}));

        let (status, _) = call(&app, "GET", "/user/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, "DELETE", "/user", Some(json!({"id": "2"}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_without_id_is_no_content() {
        let app = app(vec![yuri()]);

        let (status, _) = call(&app, "DELETE", "/user", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, "DELETE", "/user", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = call(&app, "GET", "/user", None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn update_with_empty_object_is_missing_user() {
        let app = app_with(vec![yuri()], FailureStatusPolicy::Distinct);

        let (status, body) = call(&app, "PUT", "/user", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Error: User not found\nMissing argument: user");

        let (status, body) = call(&app, "DELETE", "/user", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Error: User not found\nMissing argument: id");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = app(vec![]);
        let req = Request::builder()
            .method("POST")
            .uri("/user")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn distinct_policy_exposes_messages() {
        let app = app_with(vec![yuri()], FailureStatusPolicy::Distinct);

        let (status, body) = call(&app, "GET", "/user/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Error: User not found"}));

        let (status, body) = call(&app, "POST", "/user", Some(json!({"id": "5"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Error: User creation failed\nMissing argument: name\nMissing argument: email"
        );

        let (status, _) = call(
            &app,
            "POST",
            "/user",
            Some(json!({"id": "2", "name": "Dup", "email": "dup@mail.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = call(&app, "PUT", "/user", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Error: User not found\nMissing argument: user");
    }

    #[tokio::test]
    async fn health_reports_user_count() {
        let app = app(vec![yuri()]);
        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["users"], 1);
    }

    #[tokio::test]
    async fn openapi_document_lists_user_routes() {
        let app = app(vec![]);
        let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/user"].is_object());
        assert!(body["paths"]["/user/{id}"].is_object());
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app(vec![]);
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }
}
