//! Handlers for the `/posts` resource.
//!
//! Posts cover both short videos and images; the kind is derived from the
//! media URL (see [`reelshare_core::media_kind`]). Listing is public;
//! creation, editing, and deletion require the owner.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelshare_core::error::CoreError;
use reelshare_core::media_kind::MediaKind;
use reelshare_core::types::DbId;
use reelshare_core::validation::require_field;
use reelshare_db::models::post::{CreatePost, Post, UpdatePost};
use reelshare_db::repositories::PostRepo;
use reelshare_media::Transformation;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for post listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Restrict the listing to one media kind (`video` or `image`).
    pub kind: Option<String>,
}

/// Request body for `POST /posts`.
///
/// Required fields are optional at the serde level so absent and blank
/// values get the same 400 response. The owner always comes from the
/// session token, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    pub controls: Option<bool>,
    pub transformation: Option<TransformationRequest>,
}

/// Optional transformation override. Only quality is honored; the serving
/// dimensions are fixed to the portrait reel format.
#[derive(Debug, Deserialize)]
pub struct TransformationRequest {
    pub quality: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/posts
///
/// All posts, newest first. Public.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Post>>> {
    let kind = parse_kind(params.kind.as_deref())?;
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(filter_by_kind(posts, kind)))
}

/// GET /api/v1/posts/mine
///
/// The authenticated caller's posts, newest first.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Post>>> {
    let kind = parse_kind(params.kind.as_deref())?;
    let posts = PostRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(filter_by_kind(posts, kind)))
}

/// GET /api/v1/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(post))
}

/// POST /api/v1/posts
///
/// Create a post from an already-uploaded media file. Defaults `controls`
/// to true and the transformation to 1920x1080 at quality 100 (quality is
/// honored when supplied).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let title = require_field("title", input.title.as_deref())?;
    let description = require_field("description", input.description.as_deref())?;
    let media_url = require_field("media_url", input.media_url.as_deref())?;
    let thumbnail_url = require_field("thumbnail_url", input.thumbnail_url.as_deref())?;
    let file_id = require_field("file_id", input.file_id.as_deref())?;

    let defaults = Transformation::default();
    let quality = input
        .transformation
        .and_then(|t| t.quality)
        .unwrap_or(defaults.quality);

    let new_post = CreatePost {
        title: title.to_string(),
        description: description.to_string(),
        media_url: media_url.to_string(),
        thumbnail_url: thumbnail_url.to_string(),
        file_id: file_id.to_string(),
        user_id: user.user_id,
        controls: input.controls.unwrap_or(true),
        transform_height: defaults.height,
        transform_width: defaults.width,
        transform_quality: quality,
    };

    let post = PostRepo::create(&state.pool, &new_post).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/posts/{id}
///
/// Update a post's title/description. Owner only.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<MessageResponse>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    ensure_owner(&post, &user)?;

    PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(MessageResponse::new("Post updated successfully")))
}

/// DELETE /api/v1/posts/{id}
///
/// Delete a post and its remote media file. Owner only. The database row
/// goes first; a remote deletion failure after that surfaces as an upstream
/// error with no compensation.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    ensure_owner(&post, &user)?;

    PostRepo::delete(&state.pool, id).await?;

    match state.media.delete_file(&post.file_id).await {
        Ok(()) => {}
        // Already gone on the CDN side counts as deleted.
        Err(err) if err.is_not_found() => {
            tracing::warn!(post_id = id, file_id = %post.file_id, "Remote file was already gone");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the optional `kind` query parameter.
fn parse_kind(kind: Option<&str>) -> Result<Option<MediaKind>, AppError> {
    kind.map(|k| {
        k.parse::<MediaKind>()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
    })
    .transpose()
}

/// Apply the media-kind filter to a listing.
fn filter_by_kind(posts: Vec<Post>, kind: Option<MediaKind>) -> Vec<Post> {
    match kind {
        None => posts,
        Some(kind) => posts
            .into_iter()
            .filter(|p| kind.matches_url(&p.media_url))
            .collect(),
    }
}

/// Reject callers that do not own the post.
fn ensure_owner(post: &Post, user: &AuthUser) -> Result<(), AppError> {
    if post.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this post".into(),
        )));
    }
    Ok(())
}
