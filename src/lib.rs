//! # User Service
//!
//! CRUD REST service for a single User resource (id, name, email) over an
//! in-memory collection.
//!
//! ## Architecture
//!
//! - **domain**: the User entity, repository port and errors
//! - **application**: user use-cases, field checks and outcome mapping
//! - **infrastructure**: the in-memory repository
//! - **interfaces**: axum handlers, router and Swagger documentation
//! - **server**: runtime wiring, tracing and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export API router
pub use interfaces::http::create_api_router;
