//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET /auth -> auth_params
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth", get(media::auth_params))
}
