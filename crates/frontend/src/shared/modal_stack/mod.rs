use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

const BASE_Z_INDEX: i32 = 1000;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_class: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// App-wide modal dialog capability.
///
/// Registered at bootstrap in the extended variant only; pages get it through
/// [`use_modal`] and must cope with it being absent.
///
/// - Supports push/close/pop
/// - Escape closes only the topmost modal (handled by `ModalHost`)
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: the modal may be removed while its own DOM event is
            // still being dispatched.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.stack.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_open()
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_class(None, builder)
    }

    /// Push a new modal with an extra class on the modal surface.
    pub fn push_with_class<F>(&self, modal_class: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_class,
            });
        });
        log::debug!("modal {} opened", id);

        ModalHandle { id, svc: *self }
    }

    /// Yes/no dialog; `on_confirm` runs when the user confirms.
    pub fn confirm<F>(&self, title: String, message: String, on_confirm: F) -> ModalHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        let on_confirm = Arc::new(on_confirm);
        self.push_with_class(Some("modal--confirm".to_string()), move |handle| {
            let title = title.clone();
            let message = message.clone();
            let handle_ok = handle.clone();
            let on_confirm = on_confirm.clone();
            view! {
                <div class="confirm-dialog">
                    <h3>{title}</h3>
                    <p>{message}</p>
                    <div class="confirm-dialog__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| handle.close()
                        >
                            "Abbrechen"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                handle_ok.close();
                                on_confirm();
                            }
                        >
                            "Bestätigen"
                        </Button>
                    </div>
                </div>
            }
            .into_any()
        })
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }

    #[cfg(test)]
    fn open_ids(&self) -> Vec<u64> {
        self.stack.with_untracked(|s| s.iter().map(|e| e.id).collect())
    }

    #[cfg(test)]
    fn classes(&self) -> Vec<Option<String>> {
        self.stack
            .with_untracked(|s| s.iter().map(|e| e.modal_class.clone()).collect())
    }
}

/// The modal capability, if it was registered at bootstrap.
pub fn use_modal() -> Option<ModalStackService> {
    use_context::<ModalStackService>()
}

fn z_index_for(depth: usize) -> i32 {
    BASE_Z_INDEX + depth as i32
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let Some(svc) = use_modal() else {
        log::warn!("ModalHost mounted without a registered ModalStackService");
        return view! { <></> }.into_any();
    };

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives as long as the app.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let handle = ModalHandle { id, svc };
                    let view = (entry.builder)(handle);
                    let modal_class = entry.modal_class.clone().unwrap_or_default();

                    view! {
                        <ModalFrame
                            z_index=z_index_for(idx)
                            on_close=on_close
                            modal_class=modal_class
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
    .into_any()
}
