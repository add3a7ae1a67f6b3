//! Browser smoke tests for the bootstrap.
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend`.

#[cfg(target_arch = "wasm32")]
mod mount_tests {
    use frontend::config::AppConfig;
    use frontend::mount_app;
    use frontend::routes::table::BootstrapVariant;
    use frontend::shared::modal_stack::{ModalHost, ModalStackService};
    use frontend::system::auth::storage::StoredSession;
    use gloo_timers::future::TimeoutFuture;
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Effects and the login redirect run on later ticks.
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    fn remove_host() {
        if let Some(existing) = document().get_element_by_id("app") {
            existing.remove();
        }
    }

    fn add_host(id: &str) -> Element {
        let host = document().create_element("div").unwrap();
        host.set_id(id);
        document().body().unwrap().append_child(&host).unwrap();
        host
    }

    fn visit(path: &str) {
        web_sys::window()
            .unwrap()
            .history()
            .unwrap()
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .unwrap();
    }

    fn count(host: &Element, selector: &str) -> u32 {
        host.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    async fn mount_renders_into_app_element() {
        remove_host();
        let host = add_host("app");

        mount_app(AppConfig::default()).expect("mount should succeed");
        settle().await;

        assert!(host.child_element_count() > 0, "host stayed empty");
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn mount_base_variant_renders() {
        remove_host();
        let host = add_host("app");

        mount_app(AppConfig::with_variant(BootstrapVariant::Base)).expect("mount should succeed");
        settle().await;

        assert!(host.child_element_count() > 0);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn mount_without_host_element_fails() {
        remove_host();

        let err = mount_app(AppConfig::default()).unwrap_err();
        let message = err.as_string().unwrap_or_default();
        assert!(message.contains("#app"), "unexpected error: {}", message);
    }

    #[wasm_bindgen_test]
    async fn profile_is_unknown_in_base_variant() {
        remove_host();
        StoredSession::clear();
        visit("/profile");
        let host = add_host("app");

        mount_app(AppConfig::with_variant(BootstrapVariant::Base)).expect("mount should succeed");
        settle().await;

        assert_eq!(count(&host, ".not-found"), 1);
        host.remove();
        visit("/");
    }

    #[wasm_bindgen_test]
    async fn profile_is_routed_in_extended_variant() {
        remove_host();
        StoredSession::clear();
        visit("/profile");
        let host = add_host("app");

        mount_app(AppConfig::with_variant(BootstrapVariant::Extended))
            .expect("mount should succeed");
        settle().await;

        assert_eq!(count(&host, ".not-found"), 0);
        host.remove();
        visit("/");
    }

    #[wasm_bindgen_test]
    async fn escape_closes_only_topmost_modal() {
        let host = add_host("modal-host");
        let parent = host.clone().dyn_into::<HtmlElement>().unwrap();

        leptos::mount::mount_to(parent, || {
            let svc = ModalStackService::new();
            provide_context(svc);
            svc.push(|_| view! { <p class="layer">"unten"</p> }.into_any());
            svc.push(|_| view! { <p class="layer">"oben"</p> }.into_any());
            view! { <ModalHost /> }
        })
        .forget();
        settle().await;
        assert_eq!(count(&host, ".modal-overlay"), 2);

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
        settle().await;

        assert_eq!(count(&host, ".modal-overlay"), 1);
        let remaining = host.query_selector(".layer").unwrap().unwrap();
        assert_eq!(remaining.text_content().as_deref(), Some("unten"));
        host.remove();
    }
}
