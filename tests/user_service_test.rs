//! User service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mockall::predicate::eq;

use social_graph_api::domain::{NewUser, User, UserPatch, UserProfile};
use social_graph_api::errors::{AppError, AppResult};
use social_graph_api::infra::UserRepository;
use social_graph_api::services::{UserManager, UserService};

mockall::mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn list_profiles(&self) -> AppResult<Vec<UserProfile>>;
        async fn find_profile(&self, id: i32) -> AppResult<Option<UserProfile>>;
        async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
        async fn create(&self, new_user: NewUser) -> AppResult<User>;
        async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User>;
        async fn delete(&self, id: i32) -> AppResult<()>;
    }
}

fn birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
}

fn test_user(id: i32) -> User {
    User {
        id,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        phone: "555-0100".to_string(),
        date_of_birth: birthday(),
        avatar_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_profile(id: i32) -> UserProfile {
    UserProfile {
        id,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        phone: "555-0100".to_string(),
        date_of_birth: birthday(),
        avatar_url: None,
        age: 35,
        follower_count: 0,
        following_count: 0,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn get_user_returns_profile() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_profile()
        .with(eq(7))
        .returning(|id| Ok(Some(test_profile(id))));

    let service = UserManager::new(Arc::new(repo));
    let profile = service.get_user(7).await.unwrap();

    assert_eq!(profile.id, 7);
    assert_eq!(profile.follower_count, 0);
}

#[tokio::test]
async fn get_user_maps_missing_to_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_profile().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(42).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn list_users_passes_through() {
    let mut repo = MockUserRepo::new();
    repo.expect_list_profiles()
        .returning(|| Ok(vec![test_profile(1), test_profile(2)]));

    let service = UserManager::new(Arc::new(repo));
    let users = service.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn create_user_returns_stored_record() {
    let mut repo = MockUserRepo::new();
    repo.expect_create()
        .withf(|new_user| new_user.email == "ada@example.com")
        .returning(|new_user| {
            let mut user = test_user(1);
            user.name = new_user.name;
            user.email = new_user.email;
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .create_user(NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            date_of_birth: birthday(),
            avatar_url: None,
        })
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn create_user_surfaces_duplicate_email() {
    let mut repo = MockUserRepo::new();
    repo.expect_create()
        .returning(|_| Err(AppError::conflict("email")));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user(NewUser {
            name: "Ada".to_string(),
            email: "taken@example.com".to_string(),
            phone: "555-0100".to_string(),
            date_of_birth: birthday(),
            avatar_url: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn update_user_forwards_patch() {
    let mut repo = MockUserRepo::new();
    repo.expect_update()
        .withf(|id, patch| {
            *id == 3 && patch.email.as_deref() == Some("new@example.com") && patch.name.is_none()
        })
        .returning(|id, patch| {
            let mut user = test_user(id);
            user.email = patch.email.unwrap();
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let patch = UserPatch {
        email: Some("new@example.com".to_string()),
        ..Default::default()
    };
    let user = service.update_user(3, patch).await.unwrap();

    assert_eq!(user.email, "new@example.com");
    // Untouched fields keep their stored values
    assert_eq!(user.name, "Test User");
}

#[tokio::test]
async fn delete_missing_user_is_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_delete()
        .with(eq(99))
        .returning(|_| Err(AppError::NotFound));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
