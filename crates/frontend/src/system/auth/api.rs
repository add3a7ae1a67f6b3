use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{self, ApiError, Auth};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_utils::post("/api/system/auth/login", Auth::Anonymous, &request).await
}

/// New access token for a refresh token; `Rejected` means the refresh token is dead.
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post("/api/system/auth/refresh", Auth::Anonymous, &request).await
}

/// Revokes the refresh token on the server.
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_no_content("/api/system/auth/logout", Auth::Anonymous, Some(&request)).await
}

/// `Rejected` means the access token is no longer accepted.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    api_utils::get("/api/system/auth/me", Auth::Token(access_token)).await
}

/// Message for a failed login form submission.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(_) => "Benutzername oder Passwort falsch".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message() {
        assert_eq!(
            login_error_message(&ApiError::Rejected(401)),
            "Benutzername oder Passwort falsch"
        );
        assert_eq!(
            login_error_message(&ApiError::Status(500)),
            "Serverfehler: 500"
        );
    }
}
