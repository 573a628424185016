//! Route definition for AI caption generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// POST /generate -> generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate::generate))
}
