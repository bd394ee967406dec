use crate::domain::models::user::User;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user row and its first role-membership row as a single
    /// transaction; neither is visible unless both commit.
    async fn create_with_role(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Role names for a user, in the order the store returns them.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<String>, AppError>;
}
