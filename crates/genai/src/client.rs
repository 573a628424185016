//! REST client for the generate-content endpoint.

use serde::{Deserialize, Serialize};

use crate::caption::CaptionMode;
use crate::config::GenAiConfig;

/// HTTP client for the captioning model.
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

/// Errors from the captioning API layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Captioning API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered 2xx but returned no usable candidate text.
    #[error("Captioning API returned no text")]
    EmptyResponse,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    /// Base64-encoded image bytes.
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GenAiClient {
    /// Create a new client from configuration.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// Generate a caption for an inline image.
    ///
    /// * `image_base64` - base64-encoded image bytes.
    /// * `mime_type`    - the image's mime type, e.g. `image/jpeg`.
    /// * `mode`         - whether to write a title or a description.
    ///
    /// Returns the raw text of the first candidate.
    pub async fn generate_caption(
        &self,
        image_base64: &str,
        mime_type: &str,
        mode: CaptionMode,
    ) -> Result<String, GenAiError> {
        let body = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: Some(mode.instruction().to_string()),
                    inline_data: None,
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: mime_type.to_string(),
                        data: image_base64.to_string(),
                    }),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        tracing::debug!(model = %self.config.model, ?mode, "Submitting caption request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        extract_text(parsed).ok_or(GenAiError::EmptyResponse)
    }
}

/// Pull the first candidate's first text part out of a response.
fn extract_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.text)
}
