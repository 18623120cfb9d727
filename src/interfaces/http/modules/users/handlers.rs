//! User CRUD API handlers
//!
//! Thin wrappers: pull the fields out of the request, delegate to
//! `UserService`, and answer with the status the service decided.

use std::sync::Arc;

use axum::extract::{Path, State};

use super::dto::UserPayload;
use crate::application::UserService;
use crate::domain::User;
use crate::infrastructure::InMemoryUserRepository;
use crate::interfaces::http::common::{ContentResponse, LenientJson, MessageBody, MessageResponse};

/// User handler state — concrete over the in-memory repository for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 204, description = "Store is empty", body = MessageBody)
    )
)]
pub async fn get_users(State(state): State<UserHandlerState>) -> ContentResponse<Vec<User>> {
    ContentResponse(state.user_service.get_users().await)
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 204, description = "Not found", body = MessageBody)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ContentResponse<User> {
    ContentResponse(state.user_service.find_user_by_id(&id).await)
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = MessageBody),
        (status = 204, description = "Missing field or duplicate id", body = MessageBody),
        (status = 400, description = "Malformed JSON", body = MessageBody)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    LenientJson(payload): LenientJson<Option<UserPayload>>,
) -> MessageResponse {
    let payload = payload.unwrap_or_default();
    MessageResponse(
        state
            .user_service
            .create_user(payload.id(), payload.name(), payload.email())
            .await,
    )
}

#[utoipa::path(
    put,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = MessageBody),
        (status = 204, description = "Missing body or unknown id", body = MessageBody),
        (status = 400, description = "Malformed JSON", body = MessageBody)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    LenientJson(payload): LenientJson<Option<UserPayload>>,
) -> MessageResponse {
    MessageResponse(state.user_service.update_user(payload.map(User::from)).await)
}

#[utoipa::path(
    delete,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User deleted", body = MessageBody),
        (status = 204, description = "Missing id or unknown id", body = MessageBody),
        (status = 400, description = "Malformed JSON", body = MessageBody)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    LenientJson(payload): LenientJson<Option<UserPayload>>,
) -> MessageResponse {
    let payload = payload.unwrap_or_default();
    MessageResponse(state.user_service.delete_user(payload.id()).await)
}
