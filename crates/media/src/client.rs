//! REST client for the media CDN management API.

use crate::auth::{self, UploadAuthParams};
use crate::config::MediaConfig;
use crate::transform::Transformation;

/// HTTP client for the media CDN.
pub struct MediaClient {
    client: reqwest::Client,
    config: MediaConfig,
}

/// Errors from the media CDN API layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CDN returned a non-2xx status code.
    #[error("Media API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl MediaClient {
    /// Create a new client from configuration.
    pub fn new(config: MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: MediaConfig) -> Self {
        Self { client, config }
    }

    /// Mint upload-authentication parameters for a browser-side upload.
    pub fn auth_params(&self) -> UploadAuthParams {
        auth::mint_params(&self.config.private_key, self.config.auth_expiry_secs)
    }

    /// Delete a stored file by its CDN file id.
    ///
    /// Sends `DELETE /v1/files/{file_id}` authenticated with the private
    /// key as basic-auth username. A 404 from the CDN means the file is
    /// already gone and is reported as `Api { status: 404, .. }` so callers
    /// can decide whether that counts as success.
    pub async fn delete_file(&self, file_id: &str) -> Result<(), MediaError> {
        tracing::debug!(file_id, "Deleting remote file");

        let response = self
            .client
            .delete(format!("{}/v1/files/{file_id}", self.config.api_url))
            .basic_auth(&self.config.private_key, None::<&str>)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Build a delivery URL with this client's endpoint and a
    /// transformation descriptor.
    pub fn transformed_url(&self, path: &str, transform: &Transformation) -> String {
        transform.apply_to(&format!(
            "{}/{}",
            self.config.url_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    /// Map a non-2xx response into [`MediaError::Api`].
    async fn check_status(response: reqwest::Response) -> Result<(), MediaError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(MediaError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

impl MediaError {
    /// Whether this error is a CDN-side 404 (file already gone).
    pub fn is_not_found(&self) -> bool {
        matches!(self, MediaError::Api { status: 404, .. })
    }
}
