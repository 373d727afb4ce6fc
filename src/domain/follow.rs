//! Follow edge domain type.

use serde::Serialize;

/// Directed follow relation between two users.
///
/// An edge exists or it does not; there are no pending or approved
/// states. At most one edge exists per ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FollowEdge {
    /// The user initiating the follow
    pub follower_id: i32,
    /// The user being followed
    pub followee_id: i32,
}

impl FollowEdge {
    pub fn new(follower_id: i32, followee_id: i32) -> Self {
        Self {
            follower_id,
            followee_id,
        }
    }

    /// A user may not follow themselves.
    pub fn is_self_loop(&self) -> bool {
        self.follower_id == self.followee_id
    }
}
