use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity
///
/// `id` is the primary key. None of the fields is format-checked; the
/// service only guarantees they are non-empty when the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether all three fields carry a value.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.email.is_empty()
    }

    /// Whether no field carries a value, as for an empty JSON object.
    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.email.is_empty()
    }
}
