//! Handlers for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use reelshare_core::error::CoreError;
use reelshare_db::models::user::{UpdateUserProfile, UserProfile};
use reelshare_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `PUT /profile`.
#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub message: &'static str,
    /// Present (as `"failed"`) when the stale avatar file could not be
    /// removed from the CDN. The profile update itself still succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_cleanup: Option<&'static str>,
}

/// GET /api/v1/profile
///
/// The authenticated caller's profile, without the password hash.
pub async fn get(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserProfile>> {
    let profile = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(UserProfile::from(profile)))
}

/// PUT /api/v1/profile
///
/// Update profile fields; absent fields keep their value. When the avatar
/// is replaced, the previous remote file is deleted after the database
/// write succeeds. That cleanup is best-effort: a failure is logged and
/// flagged in the response instead of failing the whole update.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateUserProfile>,
) -> AppResult<Json<ProfileUpdateResponse>> {
    let current = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    let previous_file_id = current.avatar_file_id;

    UserRepo::update_profile(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    let mut avatar_cleanup = None;
    if let Some(old_file_id) = previous_file_id {
        let replaced = input
            .avatar_file_id
            .as_deref()
            .is_some_and(|new_id| new_id != old_file_id);
        if replaced {
            match state.media.delete_file(&old_file_id).await {
                Ok(()) => {}
                Err(err) if err.is_not_found() => {
                    tracing::warn!(
                        user_id = user.user_id,
                        file_id = %old_file_id,
                        "Stale avatar was already gone"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        user_id = user.user_id,
                        file_id = %old_file_id,
                        error = %err,
                        "Failed to delete stale avatar file"
                    );
                    avatar_cleanup = Some("failed");
                }
            }
        }
    }

    Ok(Json(ProfileUpdateResponse {
        message: "Profile updated successfully",
        avatar_cleanup,
    }))
}
