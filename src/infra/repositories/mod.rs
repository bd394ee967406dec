pub mod sqlite_user_repo;
pub mod sqlite_role_repo;

pub mod postgres_user_repo;
pub mod postgres_role_repo;
