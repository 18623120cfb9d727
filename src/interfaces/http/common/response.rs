//! Outcome → HTTP response mapping
//!
//! The status always comes verbatim from the [`ServiceOutcome`].

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::MessageBody;
use crate::application::ServiceOutcome;

/// Read endpoints: the content on success, `{message}` otherwise.
pub struct ContentResponse<T>(pub ServiceOutcome<T>);

impl<T: Serialize> IntoResponse for ContentResponse<T> {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceOutcome::Success { status, content } => (status, Json(content)).into_response(),
            ServiceOutcome::Failure {
                status, message, ..
            } => (status, Json(MessageBody::new(message))).into_response(),
        }
    }
}

/// Mutation endpoints: always `{message}`, empty on success.
pub struct MessageResponse(pub ServiceOutcome<()>);

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = MessageBody::new(self.0.message());
        (status, Json(body)).into_response()
    }
}
