//! TopHeader component - application top navigation bar.
//!
//! Contains the menu built from the route table, the current user and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::routes::{href_for, use_route_table};
use crate::routes::table::{RouteDescriptor, RouteName};
use crate::system::auth::context::{do_logout, use_auth};

/// Routes shown in the menu: everything except the login page.
fn menu_routes(routes: &'static [RouteDescriptor]) -> Vec<&'static RouteDescriptor> {
    routes.iter().filter(|r| !r.is_public()).collect()
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();
    let login_href = href_for(RouteName::Login);

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            do_logout(set_auth_state).await;
            navigate(login_href, Default::default());
        });
    };

    let menu = menu_routes(use_route_table().routes())
        .into_iter()
        .map(|route| {
            view! {
                <A href=route.path attr:class="top-header__link">
                    {route.name.title()}
                </A>
            }
        })
        .collect_view();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Inventar"</span>
            </div>

            <nav class="top-header__menu">{menu}</nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || auth_state.with(|s| {
                            s.user_info
                                .as_ref()
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_else(|| "…".to_string())
                        })}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Abmelden">
                    "Abmelden"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::table::BootstrapVariant;

    #[test]
    fn test_menu_skips_login() {
        let names: Vec<_> = menu_routes(BootstrapVariant::Extended.routes())
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![RouteName::Inventar, RouteName::Reservations, RouteName::Profile]
        );
        assert_eq!(menu_routes(BootstrapVariant::Base.routes()).len(), 2);
    }
}
