//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - SeaORM entities and repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{FollowRepository, FollowStore, UserRepository, UserStore};
