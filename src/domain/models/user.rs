use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Role assigned to every newly registered account, and the final fallback
/// when a user somehow has neither an active role nor memberships.
pub const DEFAULT_ROLE: &str = "patient";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub active_role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, full_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            full_name,
            role: DEFAULT_ROLE.to_string(),
            active_role: Some(DEFAULT_ROLE.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Resolves the role the user acts under at login: the stored active role
    /// when set and non-empty, else the first membership, else [`DEFAULT_ROLE`].
    pub fn resolve_active_role(&self, roles: &[String]) -> String {
        match self.active_role.as_deref() {
            Some(role) if !role.is_empty() => role.to_string(),
            _ => roles
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_active_role(active_role: Option<&str>) -> User {
        let mut user = User::new(
            "a@x.com".to_string(),
            "A B".to_string(),
            "hash".to_string(),
        );
        user.active_role = active_role.map(str::to_string);
        user
    }

    #[test]
    fn stored_active_role_wins() {
        let user = user_with_active_role(Some("doctor"));
        let roles = vec!["patient".to_string(), "doctor".to_string()];
        assert_eq!(user.resolve_active_role(&roles), "doctor");
    }

    #[test]
    fn unset_active_role_falls_back_to_first_membership() {
        let roles = vec!["doctor".to_string(), "patient".to_string()];
        assert_eq!(user_with_active_role(None).resolve_active_role(&roles), "doctor");
        // Empty string counts as unset.
        assert_eq!(user_with_active_role(Some("")).resolve_active_role(&roles), "doctor");
    }

    #[test]
    fn no_memberships_falls_back_to_default_role() {
        let user = user_with_active_role(None);
        assert_eq!(user.resolve_active_role(&[]), DEFAULT_ROLE);
    }
}
