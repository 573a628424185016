//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /          -> list (public)
/// POST   /          -> create (requires auth)
/// GET    /mine      -> list_mine (requires auth)
/// GET    /{id}      -> get_by_id (public)
/// PUT    /{id}      -> update (owner only)
/// DELETE /{id}      -> delete (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route("/mine", get(posts::list_mine))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .delete(posts::delete),
        )
}
