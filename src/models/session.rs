use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SessionUser{
    pub username: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub logged_in_at: Option<String>
}

impl SessionUser {
    pub fn is_admin(&self) -> bool{
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AuthStatus{
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<SessionUser>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse{
    pub user: SessionUser
}
