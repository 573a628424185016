//! HTTP-level integration tests for the `/profile` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with, get_auth, put_json_auth, register_and_login,
    spawn_fake_cdn, test_config,
};
use sqlx::PgPool;

/// The profile endpoint requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_requires_auth(pool: PgPool) {
    let response = common::get(build_test_app(pool), "/api/v1/profile").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The profile never exposes the password hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_profile_omits_password_hash(pool: PgPool) {
    let token = register_and_login(&pool, "private@test.com").await;

    let response = get_auth(build_test_app(pool), "/api/v1/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["email"], "private@test.com");
    assert_eq!(json["first_name"], "Test");
    assert!(json.get("password_hash").is_none(), "hash must never leak");
    assert!(json.get("password").is_none());
}

/// Updating a subset of fields keeps the others.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile_partial(pool: PgPool) {
    let token = register_and_login(&pool, "partial@test.com").await;

    let body = serde_json::json!({ "bio": "Filmmaker and gardener" });
    let response = put_json_auth(build_test_app(pool.clone()), "/api/v1/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Profile updated successfully");
    assert!(json.get("avatar_cleanup").is_none());

    let response = get_auth(build_test_app(pool), "/api/v1/profile", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["bio"], "Filmmaker and gardener");
    assert_eq!(json["first_name"], "Test");
    assert_eq!(json["email"], "partial@test.com");
}

/// Replacing the avatar deletes the previous remote file.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_avatar_replacement_deletes_old_file(pool: PgPool) {
    let cdn = spawn_fake_cdn().await;
    let mut config = test_config();
    config.media.api_url = cdn.url.clone();

    let token = register_and_login(&pool, "avatar@test.com").await;

    // First avatar: nothing to clean up.
    let body = serde_json::json!({
        "avatar_url": "https://cdn.test/reelshare/images/avatar_v1.jpg",
        "avatar_file_id": "avatar_v1",
    });
    let response = put_json_auth(
        build_test_app_with(pool.clone(), config.clone()),
        "/api/v1/profile",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(cdn.deleted.lock().unwrap().is_empty());

    // Second avatar: the first file must be deleted remotely.
    let body = serde_json::json!({
        "avatar_url": "https://cdn.test/reelshare/images/avatar_v2.jpg",
        "avatar_file_id": "avatar_v2",
    });
    let response = put_json_auth(
        build_test_app_with(pool.clone(), config),
        "/api/v1/profile",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.get("avatar_cleanup").is_none());
    assert_eq!(cdn.deleted.lock().unwrap().as_slice(), ["avatar_v1"]);
}

/// A failed stale-avatar cleanup is reported without failing the update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_avatar_cleanup_failure_is_flagged(pool: PgPool) {
    let cdn = spawn_fake_cdn().await;
    let mut working = test_config();
    working.media.api_url = cdn.url.clone();

    let token = register_and_login(&pool, "flaky@test.com").await;

    let body = serde_json::json!({
        "avatar_url": "https://cdn.test/reelshare/images/avatar_v1.jpg",
        "avatar_file_id": "avatar_v1",
    });
    let response = put_json_auth(
        build_test_app_with(pool.clone(), working),
        "/api/v1/profile",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Replace the avatar while the CDN is unreachable (default test config
    // points at a closed port).
    let body = serde_json::json!({
        "avatar_url": "https://cdn.test/reelshare/images/avatar_v2.jpg",
        "avatar_file_id": "avatar_v2",
    });
    let response =
        put_json_auth(build_test_app(pool.clone()), "/api/v1/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["avatar_cleanup"], "failed");

    // The database write went through regardless.
    let response = get_auth(build_test_app(pool), "/api/v1/profile", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["avatar_file_id"], "avatar_v2");
}

/// Re-submitting the same avatar file id does not delete the file.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unchanged_avatar_is_not_deleted(pool: PgPool) {
    let cdn = spawn_fake_cdn().await;
    let mut config = test_config();
    config.media.api_url = cdn.url.clone();

    let token = register_and_login(&pool, "steady@test.com").await;

    let body = serde_json::json!({
        "avatar_url": "https://cdn.test/reelshare/images/avatar.jpg",
        "avatar_file_id": "avatar_same",
    });
    let response = put_json_auth(
        build_test_app_with(pool.clone(), config.clone()),
        "/api/v1/profile",
        body.clone(),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        build_test_app_with(pool, config),
        "/api/v1/profile",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(cdn.deleted.lock().unwrap().is_empty());
}
