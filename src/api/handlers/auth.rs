use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::user::User;
use crate::domain::services::credentials;
use std::sync::Arc;
use tracing::info;

const MIN_PASSWORD_LEN: usize = 6;

// Absent keys deserialize to empty strings so they fail the same
// presence check as blank ones.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();
    let password = payload.password.trim();
    let full_name = payload.full_name.trim();

    if email.is_empty() || password.is_empty() || full_name.is_empty() {
        return Err(AppError::MissingFields("Email, пароль и ФИО обязательны"));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::WeakPassword);
    }

    // Fast path only; the unique constraint on users.email is the actual
    // guard against a concurrent registration for the same address.
    if state.user_repo.find_by_email(email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = credentials::hash_password(password)?;
    let user = User::new(email.to_string(), full_name.to_string(), password_hash);
    let created = state.user_repo.create_with_role(&user).await?;

    info!("Registered user: {}", created.id);

    Ok(Json(AuthResponse {
        user: UserProfile {
            email: created.email,
            full_name: created.full_name,
            roles: vec![created.role.clone()],
            active_role: created.role,
        },
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();
    let password = payload.password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(AppError::MissingFields("Email и пароль обязательны"));
    }

    // An unknown email and a wrong password must be indistinguishable.
    let user = state.user_repo.find_by_email(email).await?
        .ok_or(AppError::InvalidCredentials)?;

    credentials::verify_password(password, &user.password_hash)?;

    let roles = state.role_repo.list_for_user(&user.id).await?;
    let active_role = user.resolve_active_role(&roles);

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        user: UserProfile {
            email: user.email,
            full_name: user.full_name,
            roles,
            active_role,
        },
    }))
}

/// Pre-flight short-circuit: empty success, no validation, no store access.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
