pub mod auth;
pub mod generate;
pub mod health;
pub mod media;
pub mod posts;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register          register (public)
/// /auth/login             login (public)
///
/// /posts                  list (public), create (requires auth)
/// /posts/mine             caller's posts (requires auth)
/// /posts/{id}             get (public), update, delete (owner only)
///
/// /profile                get, update (requires auth)
///
/// /generate               AI caption generation (public)
///
/// /media/auth             upload authentication parameters (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/posts", posts::router())
        .nest("/profile", profile::router())
        .merge(generate::router())
        .nest("/media", media::router())
}
