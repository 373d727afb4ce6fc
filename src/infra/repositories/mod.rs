//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod follow_repository;
mod user_repository;

pub use follow_repository::{FollowRepository, FollowStore};
pub use user_repository::{UserRepository, UserStore};
