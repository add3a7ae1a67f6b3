use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::storage::StoredSession;
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// What to do with the stored session after a failed restore step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestoreAction {
    /// Access token rejected, a refresh token is available.
    TryRefresh,
    /// Server unreachable or failing: keep the tokens and try again on next load.
    KeepSession,
    /// Credentials rejected for good.
    Logout,
}

fn on_restore_error(err: &ApiError, can_refresh: bool) -> RestoreAction {
    if !err.is_rejection() {
        RestoreAction::KeepSession
    } else if can_refresh {
        RestoreAction::TryRefresh
    } else {
        RestoreAction::Logout
    }
}

enum RestoreOutcome {
    Restored(AuthState),
    /// Tokens kept without a confirmed user; carries the current access token.
    Kept(String),
    LoggedOut,
}

fn apply_action(action: RestoreAction, err: &ApiError, session: &StoredSession) -> RestoreOutcome {
    match action {
        RestoreAction::Logout => {
            log::info!("stored session rejected: {}", err);
            RestoreOutcome::LoggedOut
        }
        _ => {
            log::warn!("could not verify stored session, keeping it: {}", err);
            RestoreOutcome::Kept(session.access_token.clone())
        }
    }
}

/// Validates the stored access token, refreshing it once when the server
/// rejects it. Transport and server errors never discard the session.
async fn restore_session(mut session: StoredSession) -> RestoreOutcome {
    let err = match api::get_current_user(&session.access_token).await {
        Ok(user_info) => {
            return RestoreOutcome::Restored(AuthState {
                access_token: Some(session.access_token),
                user_info: Some(user_info),
            })
        }
        Err(err) => err,
    };

    let action = on_restore_error(&err, session.refresh_token.is_some());
    let refresh_token = match (action, session.refresh_token.clone()) {
        (RestoreAction::TryRefresh, Some(token)) => token,
        _ => return apply_action(action, &err, &session),
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => session.replace_access_token(response.access_token),
        Err(err) => return apply_action(on_restore_error(&err, false), &err, &session),
    }

    match api::get_current_user(&session.access_token).await {
        Ok(user_info) => RestoreOutcome::Restored(AuthState {
            access_token: Some(session.access_token),
            user_info: Some(user_info),
        }),
        Err(err) => apply_action(on_restore_error(&err, false), &err, &session),
    }
}

/// Auth context provider component
///
/// A stored token counts as logged in right away so guarded pages do not
/// bounce to the login page while the token is being checked.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored = StoredSession::load();
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: stored.as_ref().map(|s| s.access_token.clone()),
        user_info: None,
    });

    Effect::new(move |_| {
        let Some(session) = stored.clone() else {
            return;
        };
        spawn_local(async move {
            match restore_session(session).await {
                RestoreOutcome::Restored(state) => set_auth_state.set(state),
                RestoreOutcome::Kept(access_token) => set_auth_state.update(|s| {
                    s.access_token = Some(access_token);
                }),
                RestoreOutcome::LoggedOut => {
                    StoredSession::clear();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Stores the tokens of a successful login and publishes the new state.
pub fn apply_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    StoredSession {
        access_token: response.access_token.clone(),
        refresh_token: Some(response.refresh_token),
    }
    .save();

    log::info!("logged in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

/// Revokes the refresh token and clears the session.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = StoredSession::load().and_then(|s| s.refresh_token) {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    StoredSession::clear();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_token_is_refreshed_once() {
        assert_eq!(
            on_restore_error(&ApiError::Rejected(401), true),
            RestoreAction::TryRefresh
        );
        assert_eq!(
            on_restore_error(&ApiError::Rejected(401), false),
            RestoreAction::Logout
        );
        assert_eq!(
            on_restore_error(&ApiError::Rejected(403), false),
            RestoreAction::Logout
        );
    }

    #[test]
    fn test_unreachable_server_keeps_session() {
        let offline = ApiError::Network("Failed to fetch".into());
        assert_eq!(on_restore_error(&offline, true), RestoreAction::KeepSession);
        assert_eq!(on_restore_error(&offline, false), RestoreAction::KeepSession);
        assert_eq!(
            on_restore_error(&ApiError::Status(503), true),
            RestoreAction::KeepSession
        );
        assert_eq!(
            on_restore_error(&ApiError::Decode("eof".into()), false),
            RestoreAction::KeepSession
        );
    }

    #[test]
    fn test_apply_action_keeps_tokens_unless_rejected() {
        let session = StoredSession {
            access_token: "access".into(),
            refresh_token: Some("refresh".into()),
        };
        let err = ApiError::Status(500);
        assert!(matches!(
            apply_action(RestoreAction::KeepSession, &err, &session),
            RestoreOutcome::Kept(token) if token == "access"
        ));
        assert!(matches!(
            apply_action(RestoreAction::Logout, &ApiError::Rejected(401), &session),
            RestoreOutcome::LoggedOut
        ));
    }
}
