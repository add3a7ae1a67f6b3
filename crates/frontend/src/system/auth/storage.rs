//! Session tokens persisted in `localStorage`.

use web_sys::Storage;

const ACCESS_TOKEN_KEY: &str = "inventar.access_token";
const REFRESH_TOKEN_KEY: &str = "inventar.refresh_token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {}", key);
        }
    }
}

/// Tokens of the signed-in user as they survive a page reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl StoredSession {
    pub fn load() -> Option<Self> {
        Some(Self {
            access_token: read(ACCESS_TOKEN_KEY)?,
            refresh_token: read(REFRESH_TOKEN_KEY),
        })
    }

    pub fn access_token() -> Option<String> {
        read(ACCESS_TOKEN_KEY)
    }

    pub fn save(&self) {
        write(ACCESS_TOKEN_KEY, &self.access_token);
        if let Some(refresh_token) = &self.refresh_token {
            write(REFRESH_TOKEN_KEY, refresh_token);
        }
    }

    /// Replaces the access token after a refresh, keeping the refresh token.
    pub fn replace_access_token(&mut self, access_token: String) {
        self.access_token = access_token;
        write(ACCESS_TOKEN_KEY, &self.access_token);
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
