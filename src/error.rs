use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Database not configured")]
    StoreUnconfigured,
    #[error("PORT must be a number")]
    InvalidPort,
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Пароль должен содержать минимум 6 символов")]
    WeakPassword,
    #[error("Пользователь с таким email уже существует")]
    DuplicateEmail,
    #[error("Неверный email или пароль")]
    InvalidCredentials,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return AppError::DuplicateEmail.into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::StoreUnconfigured => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::InvalidPort => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::MissingFields(msg) => (StatusCode::BAD_REQUEST, (*msg).to_string()),
            AppError::WeakPassword => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, self.to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
