//! Service outcomes
//!
//! Every user operation resolves to a [`ServiceOutcome`]: either a success
//! carrying the status and content, or a failure carrying the status and a
//! composed message. Nothing is thrown for expected absence.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Why an operation did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required argument was empty or absent
    MissingField,
    /// No record with the requested id
    NotFound,
    /// The repository refused the mutation (e.g. duplicate id)
    OperationFailed,
    /// The backing store reported a fault
    Storage,
}

/// How failure kinds are mapped to HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStatusPolicy {
    /// Every expected failure answers `204 No Content`
    #[default]
    NoContent,
    /// 400 for missing fields, 404 for unknown ids, 409 for rejected inserts
    Distinct,
}

impl FailureStatusPolicy {
    pub fn status_for(self, kind: FailureKind) -> StatusCode {
        match (self, kind) {
            (_, FailureKind::Storage) => StatusCode::INTERNAL_SERVER_ERROR,
            (Self::NoContent, _) => StatusCode::NO_CONTENT,
            (Self::Distinct, FailureKind::MissingField) => StatusCode::BAD_REQUEST,
            (Self::Distinct, FailureKind::NotFound) => StatusCode::NOT_FOUND,
            (Self::Distinct, FailureKind::OperationFailed) => StatusCode::CONFLICT,
        }
    }
}

/// Result of a user service call.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceOutcome<T> {
    Success {
        status: StatusCode,
        content: T,
    },
    Failure {
        kind: FailureKind,
        status: StatusCode,
        message: String,
    },
}

impl<T> ServiceOutcome<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    /// Empty on success, the composed description on failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { .. } => "",
            Self::Failure { message, .. } => message,
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Success { content, .. } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Compose a failure message: `Error: <default>` followed by one line per
/// validation error.
pub fn compose_failure_message(default_message: &str, errors: &[&str]) -> String {
    let mut message = format!("Error: {}", default_message);
    for error in errors {
        message.push('\n');
        message.push_str(error);
    }
    message
}
