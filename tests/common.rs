use clinic_auth_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_role_repo::SqliteRoleRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            role_repo: Arc::new(SqliteRoleRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> axum::response::Response {
        self.post_json("/api/v1/auth/register", &serde_json::json!({
            "email": email,
            "password": password,
            "fullName": full_name,
        })).await
    }

    pub async fn login(&self, email: &str, password: &str) -> axum::response::Response {
        self.post_json("/api/v1/auth/login", &serde_json::json!({
            "email": email,
            "password": password,
        })).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
