//! User DTOs

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::User;

/// Body of `POST /user`, `PUT /user` and `DELETE /user`.
///
/// Every field is optional on the wire; absent fields reach the service as
/// empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPayload {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

impl From<UserPayload> for User {
    fn from(p: UserPayload) -> Self {
        User {
            id: p.id.unwrap_or_default(),
            name: p.name.unwrap_or_default(),
            email: p.email.unwrap_or_default(),
        }
    }
}
