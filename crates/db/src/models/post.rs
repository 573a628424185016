//! Post entity model and DTOs. A post is a short video or an image; both
//! kinds share this table.

use reelshare_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: String,
    pub file_id: String,
    pub user_id: DbId,
    pub controls: bool,
    pub transform_height: i32,
    pub transform_width: i32,
    pub transform_quality: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a post. `user_id` is set by the handler from the
/// authenticated caller, never deserialized from the request body.
#[derive(Debug)]
pub struct CreatePost {
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: String,
    pub file_id: String,
    pub user_id: DbId,
    pub controls: bool,
    pub transform_height: i32,
    pub transform_width: i32,
    pub transform_quality: i32,
}

/// DTO for updating a post. Only the owner-editable text fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub description: Option<String>,
}
