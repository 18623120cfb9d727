//! Application layer: use-cases orchestrating the domain

pub mod identity;

pub use identity::{FailureKind, FailureStatusPolicy, ServiceOutcome, UserService};
