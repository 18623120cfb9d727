//! In-memory user repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainResult, User, UserRepositoryInterface};

/// Process-wide user collection, not durable across restarts.
///
/// Records keep insertion order; every lookup is a linear scan on `id`.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Start with a pre-populated collection. Later duplicates of an id are dropped.
    pub fn with_users(seed: impl IntoIterator<Item = User>) -> Self {
        let mut users: Vec<User> = Vec::new();
        for user in seed {
            if !users.iter().any(|u| u.id == user.id) {
                users.push(user);
            }
        }
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn get(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, id: &str, name: &str, email: &str) -> DomainResult<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == id) {
            return Ok(false);
        }
        users.push(User::new(id, name, email));
        Ok(true)
    }

    async fn update(&self, user: User) -> DomainResult<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                existing.name = user.name;
                existing.email = user.email;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
