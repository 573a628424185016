//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the production router construction so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that `main.rs` uses.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::{delete, post};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reelshare_api::config::ServerConfig;
use reelshare_api::router::build_app_router;
use reelshare_api::state::AppState;
use reelshare_genai::{GenAiClient, GenAiConfig};
use reelshare_media::{MediaClient, MediaConfig};

/// Private key used by the test media config; tests re-derive signatures
/// with it.
pub const TEST_MEDIA_PRIVATE_KEY: &str = "private_test_key";

/// Build a test `ServerConfig` with safe defaults.
///
/// External service endpoints point at a closed local port so any test that
/// unexpectedly reaches the network fails fast instead of hanging.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: reelshare_api::auth::jwt::JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_days: 30,
        },
        media: MediaConfig {
            public_key: "public_test_key".to_string(),
            private_key: TEST_MEDIA_PRIVATE_KEY.to_string(),
            url_endpoint: "https://cdn.test/reelshare".to_string(),
            api_url: "http://127.0.0.1:1".to_string(),
            auth_expiry_secs: 1800,
        },
        genai: GenAiConfig {
            api_key: "genai_test_key".to_string(),
            api_url: "http://127.0.0.1:1".to_string(),
            model: "caption-test-model".to_string(),
        },
    }
}

/// Build the full application router with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with a caller-supplied config
/// (used to point the service clients at fake upstream servers).
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: Arc::new(MediaClient::new(config.media.clone())),
        genai: Arc::new(GenAiClient::new(config.genai.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::put(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::delete(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return the plaintext password.
pub async fn register_user(app: Router, email: &str) -> String {
    let password = "test_password_123!";
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "first_name": "Test",
        "last_name": "User",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    password.to_string()
}

/// Log in through the API and return the session token.
pub async fn login_user(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().expect("login must return a token").to_string()
}

/// Register + login in one step, returning the session token.
pub async fn register_and_login(pool: &PgPool, email: &str) -> String {
    let password = register_user(build_test_app(pool.clone()), email).await;
    login_user(build_test_app(pool.clone()), email, &password).await
}

// ---------------------------------------------------------------------------
// Fake upstream servers
// ---------------------------------------------------------------------------

/// A fake media CDN recording which file ids were deleted.
pub struct FakeCdn {
    /// Base URL to use as `MediaConfig::api_url`.
    pub url: String,
    /// File ids received on `DELETE /v1/files/{id}`, in order.
    pub deleted: Arc<Mutex<Vec<String>>>,
}

/// Spawn a fake CDN on a random local port. Responds 204 to file deletes.
pub async fn spawn_fake_cdn() -> FakeCdn {
    let deleted: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let recorder = Arc::clone(&deleted);
    let router = Router::new().route(
        "/v1/files/{id}",
        delete(move |Path(id): Path<String>| {
            let recorder = Arc::clone(&recorder);
            async move {
                recorder.lock().unwrap().push(id);
                StatusCode::NO_CONTENT
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    FakeCdn {
        url: format!("http://{addr}"),
        deleted,
    }
}

/// Spawn a fake captioning API answering every generate-content call with
/// the given text. Returns the base URL for `GenAiConfig::api_url`.
pub async fn spawn_fake_captioner(text: &str) -> String {
    let reply = text.to_string();
    let router = Router::new().route(
        "/v1beta/models/{model_call}",
        post(move |State(reply): State<String>| async move {
            axum::Json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": reply }] }
                }]
            }))
        }),
    )
    .with_state(reply);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
