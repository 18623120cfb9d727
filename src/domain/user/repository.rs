use async_trait::async_trait;

use super::User;
use crate::domain::DomainResult;

/// Access to the canonical user collection.
///
/// Absence is reported as `None` / `false`, never as an error. `Err` is
/// reserved for faults of the backing store.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// All users in insertion order. An empty vector means the store is empty.
    async fn get(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Returns `false` when a user with the same id already exists.
    async fn insert(&self, id: &str, name: &str, email: &str) -> DomainResult<bool>;

    /// Overwrites the record whose id matches `user.id`. Returns `false` if none does.
    async fn update(&self, user: User) -> DomainResult<bool>;

    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
