/// Configuration for the captioning API client.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key passed as a query parameter on every request.
    pub api_key: String,
    /// API base URL.
    pub api_url: String,
    /// Model identifier to invoke.
    pub model: String,
}

/// Default hosted API endpoint.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default flash-tier model, fast and cheap enough for captioning.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

impl GenAiConfig {
    /// Load captioning configuration from environment variables.
    ///
    /// | Env Var         | Required | Default                                     |
    /// |-----------------|----------|---------------------------------------------|
    /// | `GENAI_API_KEY` | **yes**  | --                                          |
    /// | `GENAI_API_URL` | no       | `https://generativelanguage.googleapis.com` |
    /// | `GENAI_MODEL`   | no       | `gemini-1.5-flash`                          |
    ///
    /// # Panics
    ///
    /// Panics if `GENAI_API_KEY` is not set.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GENAI_API_KEY").expect("GENAI_API_KEY must be set");
        let api_url =
            std::env::var("GENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            api_url,
            model,
        }
    }
}
