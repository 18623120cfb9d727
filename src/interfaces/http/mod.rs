//! HTTP REST API interfaces
//!
//! - `common`: body shapes, the lenient JSON extractor and outcome responses
//! - `modules`: handlers per resource plus the request-id middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
