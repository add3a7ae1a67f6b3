use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::domain::a001_inventory::ui::list::InventarPage;
use crate::domain::a002_reservation::ui::list::ReservationsPage;
use crate::layout::Shell;
use crate::routes::table::{BootstrapVariant, RouteName};
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::profile::ui::ProfilePage;

/// Route table registered at bootstrap.
pub fn use_route_table() -> BootstrapVariant {
    use_context::<BootstrapVariant>().unwrap_or_default()
}

/// Path of a named route in the active table, "/" if the route is not registered.
pub fn href_for(name: RouteName) -> &'static str {
    use_route_table()
        .find_by_name(name)
        .map(|r| r.path)
        .unwrap_or("/")
}

/// Segment of a route as declared to the router. Every name is present in the
/// extended table, so the fallback is never hit.
fn segment(name: RouteName) -> &'static str {
    BootstrapVariant::Extended
        .find_by_name(name)
        .map(|r| r.segment())
        .unwrap_or_else(|| name.as_str())
}

fn page_view(name: RouteName) -> AnyView {
    match name {
        RouteName::Inventar => view! { <InventarPage /> }.into_any(),
        RouteName::Login => view! { <LoginPage /> }.into_any(),
        RouteName::Reservations => view! { <ReservationsPage /> }.into_any(),
        RouteName::Profile => view! { <ProfilePage /> }.into_any(),
    }
}

/// Resolves a route name through the active table. Names missing from the
/// table behave like unknown paths.
#[component]
fn RoutedPage(name: RouteName) -> impl IntoView {
    match use_route_table().find_by_name(name) {
        None => view! { <NotFoundPage /> }.into_any(),
        Some(route) if route.is_public() => page_view(name),
        Some(_) => view! {
            <RequireAuth>
                <Shell>{page_view(name)}</Shell>
            </RequireAuth>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let modal_enabled = use_route_table().registers_modal();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=StaticSegment(segment(RouteName::Inventar))
                    view=|| view! { <RoutedPage name=RouteName::Inventar /> }
                />
                <Route
                    path=StaticSegment(segment(RouteName::Login))
                    view=|| view! { <RoutedPage name=RouteName::Login /> }
                />
                <Route
                    path=StaticSegment(segment(RouteName::Reservations))
                    view=|| view! { <RoutedPage name=RouteName::Reservations /> }
                />
                <Route
                    path=StaticSegment(segment(RouteName::Profile))
                    view=|| view! { <RoutedPage name=RouteName::Profile /> }
                />
            </Routes>
            {modal_enabled.then(|| view! { <ModalHost /> })}
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_has_a_segment() {
        for name in [
            RouteName::Inventar,
            RouteName::Login,
            RouteName::Reservations,
            RouteName::Profile,
        ] {
            assert!(BootstrapVariant::Extended.contains(name), "{}", name);
        }
        assert_eq!(segment(RouteName::Inventar), "");
        assert_eq!(segment(RouteName::Reservations), "reservations");
    }
}
