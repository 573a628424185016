//! Handler for AI caption generation.

use axum::extract::State;
use axum::Json;
use reelshare_core::error::CoreError;
use reelshare_core::validation::require_field;
use reelshare_genai::CaptionMode;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub image: Option<String>,
    /// The image's mime type, e.g. `image/jpeg`.
    #[serde(default)]
    pub image_type: Option<String>,
    /// Raw mode string; parsed after the presence checks so an unknown
    /// mode gets its own message.
    #[serde(default)]
    pub mode: Option<String>,
}

/// POST /api/v1/generate
///
/// Forward an image to the captioning model and return the raw generated
/// text. No retry, no caching.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<String>> {
    let image = require_field("image", input.image.as_deref())?;
    let image_type = require_field("image_type", input.image_type.as_deref())?;

    let mode: CaptionMode = input
        .mode
        .as_deref()
        .and_then(|m| m.parse().ok())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid type".into())))?;

    let text = state.genai.generate_caption(image, image_type, mode).await?;

    Ok(Json(text))
}
