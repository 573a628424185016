/// Configuration for the media CDN client.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Public API key, safe to hand to browsers alongside upload params.
    pub public_key: String,
    /// Private API key used for signing and authenticated API calls.
    pub private_key: String,
    /// CDN delivery endpoint, e.g. `https://cdn.example.com/acct`.
    pub url_endpoint: String,
    /// Management API base URL, e.g. `https://api.media.example.com`.
    pub api_url: String,
    /// Lifetime of minted upload-auth parameters in seconds (default: 1800).
    pub auth_expiry_secs: i64,
}

/// Default upload-auth validity window: 30 minutes.
const DEFAULT_AUTH_EXPIRY_SECS: i64 = 1800;

impl MediaConfig {
    /// Load media CDN configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `MEDIA_PUBLIC_KEY`       | **yes**  | --      |
    /// | `MEDIA_PRIVATE_KEY`      | **yes**  | --      |
    /// | `MEDIA_URL_ENDPOINT`     | **yes**  | --      |
    /// | `MEDIA_API_URL`          | **yes**  | --      |
    /// | `MEDIA_AUTH_EXPIRY_SECS` | no       | `1800`  |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing, so misconfiguration fails
    /// at startup rather than on the first upload.
    pub fn from_env() -> Self {
        let public_key =
            std::env::var("MEDIA_PUBLIC_KEY").expect("MEDIA_PUBLIC_KEY must be set");
        let private_key =
            std::env::var("MEDIA_PRIVATE_KEY").expect("MEDIA_PRIVATE_KEY must be set");
        let url_endpoint =
            std::env::var("MEDIA_URL_ENDPOINT").expect("MEDIA_URL_ENDPOINT must be set");
        let api_url = std::env::var("MEDIA_API_URL").expect("MEDIA_API_URL must be set");

        let auth_expiry_secs: i64 = std::env::var("MEDIA_AUTH_EXPIRY_SECS")
            .unwrap_or_else(|_| DEFAULT_AUTH_EXPIRY_SECS.to_string())
            .parse()
            .expect("MEDIA_AUTH_EXPIRY_SECS must be a valid i64");

        Self {
            public_key,
            private_key,
            url_endpoint,
            api_url,
            auth_expiry_secs,
        }
    }
}
