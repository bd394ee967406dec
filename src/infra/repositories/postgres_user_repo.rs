use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn create_with_role(&self, user: &User) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, full_name, role, active_role, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, email, password_hash, full_name, role, active_role, created_at",
        )
            .bind(&user.id)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(&user.role)
            .bind(&user.active_role)
            .bind(user.created_at)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
            .bind(&created.id)
            .bind(&created.role)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, role, active_role, created_at FROM users WHERE email = $1",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
