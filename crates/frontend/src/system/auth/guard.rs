use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_auth;
use crate::routes::routes::href_for;
use crate::routes::table::RouteName;

/// Component that requires authentication
/// Redirects to the login page when there is no session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let navigate = use_navigate();
    let login = href_for(RouteName::Login);

    Effect::new(move |_| {
        if !auth_state.with(|s| s.is_authenticated()) {
            navigate(
                login,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || auth_state.with(|s| s.is_authenticated())>
            {children()}
        </Show>
    }
}
