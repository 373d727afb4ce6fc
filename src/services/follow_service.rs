//! Follow service - Handles follow-graph business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{FollowEdge, UserSummary};
use crate::errors::{AppError, AppResult};
use crate::infra::FollowRepository;

/// Follow service trait for dependency injection.
#[async_trait]
pub trait FollowService: Send + Sync {
    /// Create a follow edge. Self-follows are rejected; re-follows
    /// are silent no-ops.
    async fn follow(&self, follower_id: i32, followee_id: i32) -> AppResult<()>;

    /// Remove a follow edge; removing a missing edge succeeds.
    async fn unfollow(&self, follower_id: i32, followee_id: i32) -> AppResult<()>;

    /// Users who follow the given user
    async fn followers(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;

    /// Users the given user follows
    async fn following(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;
}

/// Concrete implementation of `FollowService` over an injected repository.
pub struct FollowManager {
    repo: Arc<dyn FollowRepository>,
}

impl FollowManager {
    /// Create new follow service instance with an injected store handle
    pub fn new(repo: Arc<dyn FollowRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FollowService for FollowManager {
    async fn follow(&self, follower_id: i32, followee_id: i32) -> AppResult<()> {
        let edge = FollowEdge::new(follower_id, followee_id);

        if edge.is_self_loop() {
            return Err(AppError::validation("Cannot follow yourself"));
        }

        self.repo.insert(edge).await
    }

    async fn unfollow(&self, follower_id: i32, followee_id: i32) -> AppResult<()> {
        self.repo.remove(FollowEdge::new(follower_id, followee_id)).await
    }

    async fn followers(&self, user_id: i32) -> AppResult<Vec<UserSummary>> {
        self.repo.followers_of(user_id).await
    }

    async fn following(&self, user_id: i32) -> AppResult<Vec<UserSummary>> {
        self.repo.following_of(user_id).await
    }
}
