//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::auth::{CurrentUser, LoginRequest, RegisterRequest};
use crate::core::ServerState;
use crate::db::models::UserInfo;
use crate::utils::response::{self, ApiResponse};
use crate::utils::{AppResult, validation};

/// Fixed delay for authentication to blunt timing probes
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates credentials and returns a JWT token plus the sanitized
/// user record.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    validation::check(&req)?;

    // Fixed delay before the credential check resolves either way
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let data = state.auth.login(&req.username, &req.password).await?;

    tracing::info!(
        user_id = %data.user.id,
        username = %data.user.username,
        role = %data.user.role,
        "User logged in"
    );

    Ok(response::ok_with_message(data, "Login successful"))
}

/// Register handler
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserInfo>>)> {
    validation::check(&req)?;

    let user = state.auth.register(req).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        response::ok_with_message(user, "User registered successfully"),
    ))
}

/// Current user profile
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let profile = state.auth.get_profile(&user.id).await?;
    Ok(response::ok(profile))
}

/// Logout handler; tokens are stateless, the client just drops its copy
pub async fn logout(user: CurrentUser) -> impl IntoResponse {
    tracing::info!(user_id = %user.id, username = %user.username, "User logged out");
    response::message("Logout successful. Please remove token from client.")
}
