//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod follower;
pub mod user;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use follower::{Entity as FollowerEntity, Model as FollowerModel};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
