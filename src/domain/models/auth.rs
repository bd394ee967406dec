use serde::Serialize;

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub active_role: String,
}
