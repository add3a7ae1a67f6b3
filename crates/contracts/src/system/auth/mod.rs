use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// Name shown in the header: full name when set, login otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "jdoe".into(),
            full_name: full_name.map(str::to_string),
            email: None,
            is_admin: false,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user(Some("Jane Doe")).display_name(), "Jane Doe");
        assert_eq!(user(None).display_name(), "jdoe");
        assert_eq!(user(Some("  ")).display_name(), "jdoe");
    }

    #[test]
    fn test_login_response_shape() {
        let json = r#"{
            "access_token": "a",
            "refresh_token": "r",
            "user": {"id": "1", "username": "admin", "full_name": null, "email": null, "is_admin": true}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "a");
        assert!(resp.user.is_admin);
    }
}
