//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelshare_core::error::CoreError;
use reelshare_core::types::DbId;
use reelshare_core::validation::require_field;
use reelshare_db::models::user::CreateUser;
use reelshare_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::auth::jwt::{generate_token, IdentitySnapshot};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields are optional at the serde level so that an omitted field produces
/// the same 400 response as a blank one.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Session token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public identity projection embedded in [`AuthResponse`] and in the
/// session token claims.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new account. Duplicate emails are reported with the same status
/// code as any other validation failure.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let email = require_field("email", input.email.as_deref())?;
    let password = require_field("password", input.password.as_deref())?;
    let first_name = require_field("first_name", input.first_name.as_deref())?;
    let last_name = require_field("last_name", input.last_name.as_deref())?;

    if !email.validate_email() {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email address".into(),
        )));
    }
    validate_password_strength(password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_user = CreateUser {
        email: email.to_string(),
        password_hash,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    };
    let user = UserRepo::create(&state.pool, &new_user).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a session token carrying the
/// caller's identity snapshot. Unknown email and wrong password are
/// indistinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let identity = IdentitySnapshot {
        user_id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        bio: user.bio.clone(),
    };

    let token = generate_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_in = state.config.jwt.token_expiry_days * 24 * 60 * 60;

    Ok(Json(AuthResponse {
        token,
        expires_in,
        user: UserInfo {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
        },
    }))
}
