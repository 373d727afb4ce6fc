//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{follow_handler, user_handler};
use crate::domain::{NewUser, User, UserPatch, UserProfile, UserSummary};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Social Graph API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Graph API",
        version = "0.1.0",
        description = "User profiles and follower/followee relationships over Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Follow graph endpoints
        follow_handler::follow,
        follow_handler::unfollow,
        follow_handler::followers,
        follow_handler::following,
    ),
    components(
        schemas(
            // Domain types
            User,
            UserProfile,
            UserSummary,
            NewUser,
            UserPatch,
            // Handler request/response types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            follow_handler::FollowRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User profile CRUD operations"),
        (name = "Follow graph", description = "Directed follow relationships between users")
    )
)]
pub struct ApiDoc;
