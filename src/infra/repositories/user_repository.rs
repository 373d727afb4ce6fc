//! User repository - persistence for user profiles.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    NotSet, Set, SqlErr, Statement,
};

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{NewUser, User, UserPatch, UserProfile};
use crate::errors::{AppError, AppResult, OptionExt};

/// User persistence operations.
///
/// Injected into services as a trait object so business logic never
/// touches a connection handle directly.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users with derived age and follow counts
    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>>;

    /// Fetch one user profile with derived fields
    async fn find_profile(&self, id: i32) -> AppResult<Option<UserProfile>>;

    /// Fetch the raw stored record
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Persist a new user
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Apply a partial update; fails with NotFound when no record matches
    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Remove a user; fails with NotFound when no row was affected
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Row shape for the aggregated profile query.
#[derive(Debug, FromQueryResult)]
struct ProfileRow {
    id: i32,
    name: String,
    email: String,
    phone: String,
    dob: chrono::NaiveDate,
    avatar_url: Option<String>,
    created_at: chrono::DateTime<Utc>,
    follower_count: i64,
    following_count: i64,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        let today = Utc::now().date_naive();
        UserProfile {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            date_of_birth: row.dob,
            avatar_url: row.avatar_url,
            age: today.years_since(row.dob).unwrap_or(0),
            follower_count: row.follower_count.max(0) as u64,
            following_count: row.following_count.max(0) as u64,
            created_at: row.created_at,
        }
    }
}

const PROFILE_SELECT: &str = "\
SELECT u.id, u.name, u.email, u.phone, u.dob, u.avatar_url, u.created_at,
       COALESCE(fc.cnt, 0) AS follower_count,
       COALESCE(gc.cnt, 0) AS following_count
FROM users u
LEFT JOIN (
    SELECT followee_id, COUNT(*) AS cnt FROM followers GROUP BY followee_id
) fc ON u.id = fc.followee_id
LEFT JOIN (
    SELECT follower_id, COUNT(*) AS cnt FROM followers GROUP BY follower_id
) gc ON u.id = gc.follower_id";

/// SeaORM-backed implementation of `UserRepository`.
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Duplicate-key failures become a conflict error so callers see
    /// 409 instead of an opaque database failure. The email column
    /// carries the only unique index besides the primary key.
    fn classify_sql_err(sql_err: Option<SqlErr>) -> Option<AppError> {
        match sql_err {
            Some(SqlErr::UniqueConstraintViolation(_)) => Some(AppError::conflict("email")),
            _ => None,
        }
    }

    fn map_insert_err(err: DbErr) -> AppError {
        Self::classify_sql_err(err.sql_err()).unwrap_or_else(|| AppError::from(err))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        let rows = ProfileRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            format!("{} ORDER BY u.id", PROFILE_SELECT),
        ))
        .all(&*self.db)
        .await?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }

    async fn find_profile(&self, id: i32) -> AppResult<Option<UserProfile>> {
        let row = ProfileRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            format!("{} WHERE u.id = ?", PROFILE_SELECT),
            [id.into()],
        ))
        .one(&*self.db)
        .await?;

        Ok(row.map(UserProfile::from))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let active = user::ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            phone: Set(new_user.phone),
            dob: Set(new_user.date_of_birth),
            avatar_url: Set(new_user.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(Self::map_insert_err)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let existing = self.find_by_id(id).await?.ok_or_not_found()?;

        // Merge in the domain layer, then write the full row back,
        // matching the read-merge-write shape of the update endpoint.
        let merged = patch.apply(existing);

        let active = user::ActiveModel {
            id: Set(merged.id),
            name: Set(merged.name),
            email: Set(merged.email),
            phone: Set(merged.phone),
            dob: Set(merged.date_of_birth),
            avatar_url: Set(merged.avatar_url),
            created_at: Set(merged.created_at),
            updated_at: Set(merged.updated_at),
        };

        let model = active.update(&*self.db).await.map_err(Self::map_insert_err)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&*self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn stored_model(id: i32) -> user::Model {
        let now = Utc::now();
        user::Model {
            id,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn update_merges_patch_over_stored_row() {
        let stored = stored_model(1);
        let mut after_write = stored.clone();
        after_write.email = "new@example.com".to_string();

        // One query for the existence read, one exec for the UPDATE,
        // one query for the post-update fetch.
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![stored]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![after_write]])
            .into_connection();
        let store = UserStore::new(db);

        let patch = UserPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        let user = store.update(1, patch).await.unwrap();

        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(db);

        let result = store.update(99, UserPatch::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let store = UserStore::new(db);

        let result = store.delete(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_existing_user_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = UserStore::new(db);

        store.delete(1).await.unwrap();
    }

    #[test]
    fn duplicate_key_maps_to_conflict() {
        let mapped = UserStore::classify_sql_err(Some(SqlErr::UniqueConstraintViolation(
            "users.email".to_string(),
        )));

        assert!(matches!(mapped, Some(AppError::Conflict(_))));
    }

    #[test]
    fn non_constraint_errors_are_left_alone() {
        assert!(UserStore::classify_sql_err(None).is_none());
    }
}
