use contracts::profile::{ChangePasswordDto, UpdateProfileDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal_stack::{use_modal, ModalHandle};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::profile::api;

/// Blank form fields are sent as `None`.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (message, set_message) = signal::<Option<Result<String, String>>>(None);
    let show_inline_password = RwSignal::new(false);
    let modal = use_modal();

    // Fill the form once the user info has been loaded.
    Effect::new(move |_| {
        if let Some(user) = auth_state.with(|s| s.user_info.clone()) {
            full_name.set(user.full_name.unwrap_or_default());
            email.set(user.email.unwrap_or_default());
        }
    });

    let save = move |_| {
        let dto = UpdateProfileDto {
            full_name: non_empty(full_name.get_untracked()),
            email: non_empty(email.get_untracked()),
        };
        set_saving.set(true);
        set_message.set(None);
        spawn_local(async move {
            match api::update_profile(dto).await {
                Ok(user) => {
                    set_auth_state.update(|s: &mut AuthState| s.user_info = Some(user));
                    set_message.set(Some(Ok("Profil gespeichert".to_string())));
                }
                Err(e) => {
                    log::warn!("profile update failed: {}", e);
                    set_message.set(Some(Err(e.to_string())));
                }
            }
            set_saving.set(false);
        });
    };

    let open_password_dialog = move |_| match modal {
        Some(modal) => {
            modal.push(|handle| view! { <ChangePasswordForm handle=handle /> }.into_any());
        }
        None => show_inline_password.set(true),
    };

    view! {
        <div class="page profile-page">
            <h1>"Profil"</h1>

            <dl class="profile-page__info">
                <dt>"Benutzername"</dt>
                <dd>
                    {move || auth_state.with(|s| {
                        s.user_info.as_ref().map(|u| u.username.clone()).unwrap_or_default()
                    })}
                </dd>
                <dt>"Rolle"</dt>
                <dd>
                    {move || if auth_state.with(|s| s.user_info.as_ref().is_some_and(|u| u.is_admin)) {
                        "Administrator"
                    } else {
                        "Benutzer"
                    }}
                </dd>
            </dl>

            {move || message.get().map(|m| match m {
                Ok(text) => view! { <div class="success-message">{text}</div> }.into_any(),
                Err(text) => view! { <div class="error-message">{text}</div> }.into_any(),
            })}

            <div class="form-group">
                <label>"Name"</label>
                <Input value=full_name placeholder="Vor- und Nachname" />
            </div>
            <div class="form-group">
                <label>"E-Mail"</label>
                <Input value=email input_type=InputType::Email />
            </div>

            <div class="profile-page__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Speichern..." } else { "Speichern" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=open_password_dialog>
                    "Passwort ändern"
                </Button>
            </div>

            <Show when=move || show_inline_password.get()>
                <ChangePasswordForm on_done=Callback::new(move |_| show_inline_password.set(false)) />
            </Show>
        </div>
    }
}

/// Password change form, used as modal content or inline.
#[component]
fn ChangePasswordForm(
    #[prop(optional)] handle: Option<ModalHandle>,
    #[prop(optional)] on_done: Option<Callback<()>>,
) -> impl IntoView {
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let finish = {
        let handle = handle.clone();
        move || {
            if let Some(handle) = &handle {
                handle.close();
            }
            if let Some(on_done) = on_done {
                on_done.run(());
            }
        }
    };

    let submit = {
        let finish = finish.clone();
        move |_| {
            let dto = ChangePasswordDto {
                old_password: old_password.get_untracked(),
                new_password: new_password.get_untracked(),
            };
            if let Err(e) = dto.validate(&confirmation.get_untracked()) {
                set_error.set(Some(e));
                return;
            }
            set_busy.set(true);
            set_error.set(None);
            let finish = finish.clone();
            spawn_local(async move {
                match api::change_password(dto).await {
                    Ok(()) => {
                        log::info!("password changed");
                        finish();
                    }
                    Err(e) => set_error.set(Some(api::password_error_message(&e))),
                }
                set_busy.set(false);
            });
        }
    };

    view! {
        <div class="password-form">
            <h3>"Passwort ändern"</h3>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label>"Aktuelles Passwort"</label>
                <Input value=old_password input_type=InputType::Password />
            </div>
            <div class="form-group">
                <label>"Neues Passwort"</label>
                <Input value=new_password input_type=InputType::Password />
            </div>
            <div class="form-group">
                <label>"Neues Passwort wiederholen"</label>
                <Input value=confirmation input_type=InputType::Password />
            </div>

            <div class="password-form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| finish()>
                    "Abbrechen"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || busy.get())
                >
                    "Ändern"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Jane ".to_string()), Some("Jane".to_string()));
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(String::new()), None);
    }
}
