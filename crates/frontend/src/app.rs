use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Root component.
///
/// Registers the app-wide capabilities in order: the route table the router
/// reads, then (extended variant only) the modal stack.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config.variant);

    if config.variant.registers_modal() {
        provide_context(ModalStackService::new());
    }

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
