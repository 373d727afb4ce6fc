//! Follow service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::predicate::eq;

use social_graph_api::domain::{FollowEdge, UserSummary};
use social_graph_api::errors::{AppError, AppResult};
use social_graph_api::infra::FollowRepository;
use social_graph_api::services::{FollowManager, FollowService};

mockall::mock! {
    FollowRepo {}

    #[async_trait]
    impl FollowRepository for FollowRepo {
        async fn insert(&self, edge: FollowEdge) -> AppResult<()>;
        async fn remove(&self, edge: FollowEdge) -> AppResult<()>;
        async fn followers_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;
        async fn following_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;
    }
}

fn summary(id: i32, name: &str) -> UserSummary {
    UserSummary {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

#[tokio::test]
async fn follow_inserts_directed_edge() {
    let mut repo = MockFollowRepo::new();
    repo.expect_insert()
        .with(eq(FollowEdge::new(1, 2)))
        .times(1)
        .returning(|_| Ok(()));

    let service = FollowManager::new(Arc::new(repo));
    service.follow(1, 2).await.unwrap();
}

#[tokio::test]
async fn self_follow_is_rejected_before_the_store() {
    // No insert expectation: touching the repository would panic.
    let repo = MockFollowRepo::new();

    let service = FollowManager::new(Arc::new(repo));
    let result = service.follow(5, 5).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn refollow_is_a_silent_noop() {
    let mut repo = MockFollowRepo::new();
    // The store resolves duplicates itself; both calls succeed.
    repo.expect_insert()
        .with(eq(FollowEdge::new(1, 2)))
        .times(2)
        .returning(|_| Ok(()));

    let service = FollowManager::new(Arc::new(repo));
    service.follow(1, 2).await.unwrap();
    service.follow(1, 2).await.unwrap();
}

#[tokio::test]
async fn unfollow_missing_edge_succeeds() {
    let mut repo = MockFollowRepo::new();
    repo.expect_remove()
        .with(eq(FollowEdge::new(3, 4)))
        .returning(|_| Ok(()));

    let service = FollowManager::new(Arc::new(repo));
    service.unfollow(3, 4).await.unwrap();
}

#[tokio::test]
async fn follow_of_unknown_user_maps_to_not_found() {
    let mut repo = MockFollowRepo::new();
    repo.expect_insert().returning(|_| Err(AppError::NotFound));

    let service = FollowManager::new(Arc::new(repo));
    let result = service.follow(1, 999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn followers_and_following_reflect_an_edge() {
    // After A(1) follows B(2): B's followers contain A, A's following contains B.
    let mut repo = MockFollowRepo::new();
    repo.expect_followers_of()
        .with(eq(2))
        .returning(|_| Ok(vec![summary(1, "Ada")]));
    repo.expect_following_of()
        .with(eq(1))
        .returning(|_| Ok(vec![summary(2, "Grace")]));

    let service = FollowManager::new(Arc::new(repo));

    let followers = service.followers(2).await.unwrap();
    assert_eq!(followers, vec![summary(1, "Ada")]);

    let following = service.following(1).await.unwrap();
    assert_eq!(following, vec![summary(2, "Grace")]);
}
