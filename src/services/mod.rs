//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion; store handles are passed in explicitly
//! rather than reached through a module-level singleton.

pub mod container;
mod follow_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use follow_service::{FollowManager, FollowService};
pub use user_service::{UserManager, UserService};
