//! Migration: Create the followers adjacency table.
//!
//! The composite primary key enforces at most one edge per ordered
//! pair. Foreign keys cascade on user deletion so no dangling edges
//! survive a removed profile.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Followers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Followers::FollowerId).integer().not_null())
                    .col(ColumnDef::new(Followers::FolloweeId).integer().not_null())
                    .col(
                        ColumnDef::new(Followers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Followers::FollowerId)
                            .col(Followers::FolloweeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_follower")
                            .from(Followers::Table, Followers::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_followee")
                            .from(Followers::Table, Followers::FolloweeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Followers-of-a-user lookups filter on followee_id, which the
        // composite primary key does not cover as a prefix.
        manager
            .create_index(
                Index::create()
                    .name("idx_followers_followee_id")
                    .table(Followers::Table)
                    .col(Followers::FolloweeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_followers_followee_id")
                    .table(Followers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Followers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Followers {
    Table,
    FollowerId,
    FolloweeId,
    CreatedAt,
}
