//! Handler for media upload authentication.

use axum::extract::State;
use axum::Json;
use reelshare_media::UploadAuthParams;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/media/auth
///
/// Mint the short-lived parameters the browser upload SDK presents to the
/// CDN. The private key never leaves the server; only the derived
/// signature does.
pub async fn auth_params(State(state): State<AppState>) -> AppResult<Json<UploadAuthParams>> {
    Ok(Json(state.media.auth_params()))
}
