//! Lenient JSON extractor for Axum
//!
//! `LenientJson<T>` works like `axum::Json<T>` but never insists on a body:
//! an empty body (or one with only whitespace) yields `T::default()`, and the
//! `Content-Type` header is not checked. Field presence is left to the
//! service layer. Only a body that is not valid JSON for `T` is rejected,
//! with a `400` and a `{message}` body.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::MessageBody;

/// An extractor that deserializes an optional JSON body.
///
/// # Usage
///
/// ```ignore
/// async fn handler(LenientJson(body): LenientJson<Option<UserPayload>>) {
///     // `body` is `None` when the request carried no body or `null`
/// }
/// ```
pub struct LenientJson<T>(pub T);

/// Error type for `LenientJson` extraction failures.
#[derive(Debug)]
pub enum LenientJsonRejection {
    /// The body could not be read.
    Body(BytesRejection),
    /// The body is not valid JSON for the target type.
    Json(serde_json::Error),
}

impl IntoResponse for LenientJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Body(rejection) => rejection.into_response(),
            Self::Json(error) => {
                let body = MessageBody::new(format!("Invalid JSON: {}", error));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = LenientJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(LenientJsonRejection::Body)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(LenientJson)
            .map_err(LenientJsonRejection::Json)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Default, Deserialize)]
    struct TestBody {
        #[serde(default)]
        name: Option<String>,
    }

    async fn handler(LenientJson(body): LenientJson<Option<TestBody>>) -> String {
        match body {
            None => "none".to_string(),
            Some(b) => b.name.unwrap_or_else(|| "unnamed".to_string()),
        }
    }

    async fn send(body: &'static str) -> (StatusCode, String) {
        let app = Router::new().route("/test", post(handler));
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn empty_body_yields_default() {
        assert_eq!(send("").await, (StatusCode::OK, "none".to_string()));
        assert_eq!(send("  \n").await, (StatusCode::OK, "none".to_string()));
    }

    #[tokio::test]
    async fn null_body_yields_none() {
        assert_eq!(send("null").await, (StatusCode::OK, "none".to_string()));
    }

    #[tokio::test]
    async fn missing_fields_are_tolerated() {
        assert_eq!(send("{}").await, (StatusCode::OK, "unnamed".to_string()));
        assert_eq!(
            send(r#"{"name":"Yuri"}"#).await,
            (StatusCode::OK, "Yuri".to_string())
        );
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let (status, body) = send("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid JSON"));
    }
}
