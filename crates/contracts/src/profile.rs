use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordDto {
    /// `confirmation` is the repeated new password from the form.
    pub fn validate(&self, confirmation: &str) -> Result<(), String> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Das neue Passwort muss mindestens {} Zeichen haben",
                MIN_PASSWORD_LEN
            ));
        }
        if self.new_password != confirmation {
            return Err("Passwörter stimmen nicht überein".to_string());
        }
        if self.new_password == self.old_password {
            return Err("Das neue Passwort entspricht dem alten".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(old: &str, new: &str) -> ChangePasswordDto {
        ChangePasswordDto {
            old_password: old.into(),
            new_password: new.into(),
        }
    }

    #[test]
    fn test_validate_password_change() {
        assert!(dto("old-secret", "new-secret").validate("new-secret").is_ok());
        assert!(dto("old-secret", "short").validate("short").is_err());
        assert!(dto("old-secret", "new-secret").validate("new-secreT").is_err());
        assert!(dto("same-secret", "same-secret").validate("same-secret").is_err());
    }
}
