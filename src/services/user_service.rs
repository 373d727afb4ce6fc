//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User, UserPatch, UserProfile};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users with derived age and follow counts
    async fn list_users(&self) -> AppResult<Vec<UserProfile>>;

    /// Get a single user profile; NotFound when absent
    async fn get_user(&self, id: i32) -> AppResult<UserProfile>;

    /// Create a new user
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Partially update a user; absent fields keep stored values
    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Delete a user; NotFound when no record matches
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of `UserService` over an injected repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with an injected store handle
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        self.repo.list_profiles().await
    }

    async fn get_user(&self, id: i32) -> AppResult<UserProfile> {
        self.repo.find_profile(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        self.repo.create(new_user).await
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
