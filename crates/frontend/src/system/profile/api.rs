use contracts::profile::{ChangePasswordDto, UpdateProfileDto};
use contracts::system::auth::UserInfo;

use crate::shared::api_utils::{self, ApiError, Auth};

/// Returns the stored user after the update
pub async fn update_profile(dto: UpdateProfileDto) -> Result<UserInfo, ApiError> {
    api_utils::put("/api/profile", Auth::Session, &dto).await
}

/// 403 means the current password was wrong.
pub async fn change_password(dto: ChangePasswordDto) -> Result<(), ApiError> {
    api_utils::post_no_content("/api/profile/password", Auth::Session, Some(&dto)).await
}

pub fn password_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(403) => "Aktuelles Passwort ist falsch".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_error_message() {
        assert_eq!(
            password_error_message(&ApiError::Rejected(403)),
            "Aktuelles Passwort ist falsch"
        );
        assert_eq!(password_error_message(&ApiError::Status(500)), "Serverfehler: 500");
    }
}
