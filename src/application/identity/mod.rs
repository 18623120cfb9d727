//! Identity application layer: user management use-cases

pub mod messages;
pub mod outcome;
pub mod service;

pub use outcome::{compose_failure_message, FailureKind, FailureStatusPolicy, ServiceOutcome};
pub use service::UserService;
