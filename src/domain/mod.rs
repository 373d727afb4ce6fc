//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod follow;
pub mod user;

pub use follow::FollowEdge;
pub use user::{NewUser, User, UserPatch, UserProfile, UserSummary};
