//! Follow repository - persistence for the follow graph.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

use super::entities::{follower, user};
use crate::domain::{FollowEdge, UserSummary};
use crate::errors::{AppError, AppResult};

/// Follow-graph persistence operations.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert an edge if absent. Re-inserting an existing edge is a no-op.
    async fn insert(&self, edge: FollowEdge) -> AppResult<()>;

    /// Delete an edge. Removing a missing edge is a no-op.
    async fn remove(&self, edge: FollowEdge) -> AppResult<()>;

    /// Users who follow the given user
    async fn followers_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;

    /// Users the given user follows
    async fn following_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>>;
}

/// SeaORM-backed implementation of `FollowRepository`.
pub struct FollowStore {
    db: Arc<DatabaseConnection>,
}

impl FollowStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// A foreign-key failure on edge insert means a referenced user
    /// does not exist; anything else is a plain database error.
    fn classify_sql_err(sql_err: Option<SqlErr>) -> Option<AppError> {
        match sql_err {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(AppError::NotFound),
            _ => None,
        }
    }
}

fn summarize(model: user::Model) -> UserSummary {
    UserSummary {
        id: model.id,
        name: model.name,
        email: model.email,
    }
}

#[async_trait]
impl FollowRepository for FollowStore {
    async fn insert(&self, edge: FollowEdge) -> AppResult<()> {
        let active = follower::ActiveModel {
            follower_id: Set(edge.follower_id),
            followee_id: Set(edge.followee_id),
            created_at: Set(Utc::now()),
        };

        let result = follower::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    follower::Column::FollowerId,
                    follower::Column::FolloweeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(&*self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            // The edge already exists; idempotent success
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => {
                Err(Self::classify_sql_err(e.sql_err()).unwrap_or_else(|| AppError::from(e)))
            }
        }
    }

    async fn remove(&self, edge: FollowEdge) -> AppResult<()> {
        // No existence check: deleting zero rows is a success.
        follower::Entity::delete_many()
            .filter(follower::Column::FollowerId.eq(edge.follower_id))
            .filter(follower::Column::FolloweeId.eq(edge.followee_id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn followers_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>> {
        // users u JOIN followers f ON u.id = f.follower_id WHERE f.followee_id = ?
        let models = user::Entity::find()
            .join_rev(JoinType::InnerJoin, follower::Relation::Follower.def())
            .filter(follower::Column::FolloweeId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(summarize).collect())
    }

    async fn following_of(&self, user_id: i32) -> AppResult<Vec<UserSummary>> {
        // users u JOIN followers f ON u.id = f.followee_id WHERE f.follower_id = ?
        let models = user::Entity::find()
            .join_rev(JoinType::InnerJoin, follower::Relation::Followee.def())
            .filter(follower::Column::FollowerId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(summarize).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    #[tokio::test]
    async fn insert_new_edge_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = FollowStore::new(db);

        store.insert(FollowEdge::new(1, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_edge_insert_is_a_noop() {
        // A do-nothing conflict resolution surfaces as RecordNotInserted.
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_errors([DbErr::RecordNotInserted])
            .into_connection();
        let store = FollowStore::new(db);

        store.insert(FollowEdge::new(1, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn remove_missing_edge_is_a_noop() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let store = FollowStore::new(db);

        store.remove(FollowEdge::new(3, 4)).await.unwrap();
    }

    #[test]
    fn fk_violation_means_a_missing_endpoint() {
        let mapped = FollowStore::classify_sql_err(Some(SqlErr::ForeignKeyConstraintViolation(
            "fk_followers_followee".to_string(),
        )));

        assert!(matches!(mapped, Some(AppError::NotFound)));
    }

    #[test]
    fn non_constraint_errors_are_left_alone() {
        assert!(FollowStore::classify_sql_err(None).is_none());
    }
}
