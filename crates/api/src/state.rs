use std::sync::Arc;

use reelshare_genai::GenAiClient;
use reelshare_media::MediaClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelshare_db::DbPool,
    /// Server configuration (JWT secrets, CORS, service endpoints).
    pub config: Arc<ServerConfig>,
    /// Media CDN client (upload auth, remote file deletion).
    pub media: Arc<MediaClient>,
    /// Captioning model client.
    pub genai: Arc<GenAiClient>,
}
