use contracts::inventory::InventoryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::reserve_form::ReserveForm;
use crate::domain::a001_inventory::api;
use crate::shared::modal_stack::use_modal;

/// Items matching the search text, sorted by name.
fn filter_items(items: &[InventoryItem], query: &str, only_available: bool) -> Vec<InventoryItem> {
    let mut result: Vec<InventoryItem> = items
        .iter()
        .filter(|item| !only_available || item.is_available())
        .filter(|item| item.matches(query))
        .cloned()
        .collect();
    result.sort_by_key(|item| item.name.to_lowercase());
    result
}

#[component]
pub fn InventarPage() -> impl IntoView {
    let all_items: RwSignal<Vec<InventoryItem>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let only_available = RwSignal::new(false);
    // Item whose reservation form is shown inline when there is no modal stack.
    let inline_item: RwSignal<Option<InventoryItem>> = RwSignal::new(None);
    let modal = use_modal();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(data) => all_items.set(data),
                Err(e) => {
                    log::error!("failed to load inventory: {}", e);
                    set_error.set(Some(format!("Inventar konnte nicht geladen werden: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let visible_items = Memo::new(move |_| {
        all_items.with(|items| filter_items(items, &search.get(), only_available.get()))
    });

    let reload = Callback::new(move |_| load_data());

    let open_reservation = move |item: InventoryItem| {
        match modal {
            Some(modal) => {
                modal.push(move |handle| {
                    view! { <ReserveForm item=item.clone() handle=handle on_done=reload /> }
                        .into_any()
                });
            }
            None => inline_item.set(Some(item)),
        }
    };

    view! {
        <div class="page inventar-page">
            <div class="page__header">
                <h1>"Inventar"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Laden..." } else { "Aktualisieren" }}
                </Button>
            </div>

            <div class="page__filters">
                <Input value=search placeholder="Suche nach Name, Kategorie oder Ort..." />
                <Checkbox checked=only_available label="Nur verfügbare" />
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || inline_item.get().map(|item| {
                view! {
                    <ReserveForm
                        item=item
                        on_done=Callback::new(move |_| {
                            inline_item.set(None);
                            load_data();
                        })
                    />
                }
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Kategorie"</th>
                        <th>"Ort"</th>
                        <th class="num">"Verfügbar"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible_items.get()
                        key=|item| (item.id.clone(), item.quantity_available)
                        children=move |item| {
                            let available = item.is_available();
                            let item_for_reserve = item.clone();
                            view! {
                                <tr class:unavailable=!available>
                                    <td>
                                        <div>{item.name.clone()}</div>
                                        <small>{item.description.clone().unwrap_or_default()}</small>
                                    </td>
                                    <td>{item.category.clone()}</td>
                                    <td>{item.location.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td class="num">
                                        {format!("{} / {}", item.quantity_available, item.quantity_total)}
                                    </td>
                                    <td>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            disabled=!available
                                            on_click=move |_| open_reservation(item_for_reserve.clone())
                                        >
                                            "Reservieren"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || !loading.get() && visible_items.with(|v| v.is_empty())>
                <p class="empty-hint">"Keine Einträge gefunden."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, available: u32) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: name.into(),
            description: None,
            category: "IT".into(),
            quantity_total: 2,
            quantity_available: available,
            location: None,
        }
    }

    #[test]
    fn test_filter_items() {
        let items = vec![
            item("1", "Laptop", 0),
            item("2", "beamer", 1),
            item("3", "Kabel HDMI", 2),
        ];

        let all = filter_items(&items, "", false);
        let names: Vec<_> = all.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["beamer", "Kabel HDMI", "Laptop"]);

        assert_eq!(filter_items(&items, "", true).len(), 2);
        assert_eq!(filter_items(&items, "hdmi", false)[0].id, "3");
        assert!(filter_items(&items, "laptop", true).is_empty());
    }
}
