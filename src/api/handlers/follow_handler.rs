//! Follow graph handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserSummary;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Follow/unfollow request body. No field rules, but routing it through
/// the validating extractor keeps malformed-body rejections in the same
/// error shape as the user endpoints.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FollowRequest {
    /// The user being followed or unfollowed
    #[serde(rename = "followeeId")]
    pub followee_id: i32,
}

/// Create follow graph routes
pub fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/follow", post(follow))
        .route("/:id/unfollow", post(unfollow))
        .route("/:id/followers", get(followers))
        .route("/:id/following", get(following))
}

/// Follow another user
#[utoipa::path(
    post,
    path = "/api/follow/{id}/follow",
    tag = "Follow graph",
    params(("id" = i32, Path, description = "Follower user id")),
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Edge created (or already present)", body = MessageResponse),
        (status = 400, description = "Attempted self-follow"),
        (status = 404, description = "Unknown follower or followee")
    )
)]
pub async fn follow(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<FollowRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.follow_service.follow(id, payload.followee_id).await?;
    Ok(Json(MessageResponse::new("Followed successfully")))
}

/// Unfollow a user
#[utoipa::path(
    post,
    path = "/api/follow/{id}/unfollow",
    tag = "Follow graph",
    params(("id" = i32, Path, description = "Follower user id")),
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Edge removed (or was absent)", body = MessageResponse)
    )
)]
pub async fn unfollow(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<FollowRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .follow_service
        .unfollow(id, payload.followee_id)
        .await?;
    Ok(Json(MessageResponse::new("Unfollowed successfully")))
}

/// List users who follow the given user
#[utoipa::path(
    get,
    path = "/api/follow/{id}/followers",
    tag = "Follow graph",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Followers of the user", body = [UserSummary])
    )
)]
pub async fn followers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state.follow_service.followers(id).await?;
    Ok(Json(users))
}

/// List users the given user follows
#[utoipa::path(
    get,
    path = "/api/follow/{id}/following",
    tag = "Follow graph",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Users the user follows", body = [UserSummary])
    )
)]
pub async fn following(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state.follow_service.following(id).await?;
    Ok(Json(users))
}
