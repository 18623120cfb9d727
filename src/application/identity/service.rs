//! User management service — application-layer orchestration
//!
//! Checks required arguments, calls the repository and turns the result into
//! a [`ServiceOutcome`]. HTTP handlers are thin wrappers around this type.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, error, info};

use super::messages::{missing_argument, not_found, process_failure};
use super::outcome::{compose_failure_message, FailureKind, FailureStatusPolicy, ServiceOutcome};
use crate::domain::{DomainResult, User, UserRepositoryInterface};

/// User service, generic over the repository so tests can substitute one.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    policy: FailureStatusPolicy,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailureStatusPolicy::default())
    }

    pub fn with_policy(repo: Arc<R>, policy: FailureStatusPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> FailureStatusPolicy {
        self.policy
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List every stored user. An empty store is reported as a failure.
    pub async fn get_users(&self) -> ServiceOutcome<Vec<User>> {
        let result = self
            .repo
            .get()
            .await
            .map(|users| (!users.is_empty()).then_some(users));

        self.finish(result, not_found::ALL_USERS, StatusCode::OK, FailureKind::NotFound)
    }

    pub async fn find_user_by_id(&self, id: &str) -> ServiceOutcome<User> {
        let mut errors = Vec::new();
        if id.is_empty() {
            errors.push(missing_argument::ID);
        }
        if !errors.is_empty() {
            return self.reject(&errors, not_found::USER);
        }

        let result = self.repo.find_by_id(id).await;
        self.finish(result, not_found::USER, StatusCode::OK, FailureKind::NotFound)
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn create_user(&self, id: &str, name: &str, email: &str) -> ServiceOutcome<()> {
        let mut errors = Vec::new();
        if id.is_empty() {
            errors.push(missing_argument::ID);
        }
        if name.is_empty() {
            errors.push(missing_argument::NAME);
        }
        if email.is_empty() {
            errors.push(missing_argument::EMAIL);
        }
        if !errors.is_empty() {
            return self.reject(&errors, process_failure::USER_CREATION);
        }

        let result = self.repo.insert(id, name, email).await.map(|ok| ok.then_some(()));
        let outcome = self.finish(
            result,
            process_failure::USER_CREATION,
            StatusCode::CREATED,
            FailureKind::OperationFailed,
        );
        if outcome.is_success() {
            info!(user_id = id, "User created");
        }
        outcome
    }

    /// Overwrite name and email of the user whose id matches. `None` or a user
    /// with every field empty counts as no user object.
    pub async fn update_user(&self, user: Option<User>) -> ServiceOutcome<()> {
        let Some(user) = user.filter(|u| !u.is_blank()) else {
            return self.reject(&[missing_argument::USER], not_found::USER);
        };

        let user_id = user.id.clone();
        let result = self.repo.update(user).await.map(|ok| ok.then_some(()));
        let outcome = self.finish(result, not_found::USER, StatusCode::OK, FailureKind::NotFound);
        if outcome.is_success() {
            info!(user_id = %user_id, "User updated");
        }
        outcome
    }

    pub async fn delete_user(&self, id: &str) -> ServiceOutcome<()> {
        let mut errors = Vec::new();
        if id.is_empty() {
            errors.push(missing_argument::ID);
        }
        if !errors.is_empty() {
            return self.reject(&errors, not_found::USER);
        }

        let result = self.repo.delete(id).await.map(|ok| ok.then_some(()));
        let outcome = self.finish(result, not_found::USER, StatusCode::OK, FailureKind::NotFound);
        if outcome.is_success() {
            info!(user_id = id, "User deleted");
        }
        outcome
    }

    // ── Outcome mapping ─────────────────────────────────────────

    fn reject<T>(&self, errors: &[&str], default_message: &str) -> ServiceOutcome<T> {
        debug!(?errors, "Rejected user request with missing arguments");
        ServiceOutcome::Failure {
            kind: FailureKind::MissingField,
            status: self.policy.status_for(FailureKind::MissingField),
            message: compose_failure_message(default_message, errors),
        }
    }

    fn finish<T>(
        &self,
        result: DomainResult<Option<T>>,
        default_message: &str,
        success_status: StatusCode,
        absent_kind: FailureKind,
    ) -> ServiceOutcome<T> {
        match result {
            Ok(Some(content)) => ServiceOutcome::Success {
                status: success_status,
                content,
            },
            Ok(None) => ServiceOutcome::Failure {
                kind: absent_kind,
                status: self.policy.status_for(absent_kind),
                message: compose_failure_message(default_message, &[]),
            },
            Err(e) => {
                error!(error = %e, "User repository fault");
                let detail = e.to_string();
                ServiceOutcome::Failure {
                    kind: FailureKind::Storage,
                    status: self.policy.status_for(FailureKind::Storage),
                    message: compose_failure_message(default_message, &[&detail]),
                }
            }
        }
    }
}
