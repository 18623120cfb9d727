//! Shared HTTP building blocks: body shapes, extractors and outcome responses

pub mod lenient_json;
pub mod response;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use lenient_json::{LenientJson, LenientJsonRejection};
pub use response::{ContentResponse, MessageResponse};

/// Body of every response that carries no entity: `{"message": "..."}`.
///
/// The message is empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
