use chrono::NaiveDate;
use contracts::inventory::InventoryItem;
use contracts::reservations::CreateReservationDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_reservation::api;
use crate::shared::date_utils::{parse_input_date, to_input_value, today};
use crate::shared::modal_stack::ModalHandle;

/// Reads the raw form fields into a request, or says what is wrong.
fn build_request(
    item: &InventoryItem,
    quantity: &str,
    from: &str,
    until: &str,
    note: String,
) -> Result<CreateReservationDto, String> {
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| "Menge muss eine Zahl sein".to_string())?;
    let from: NaiveDate = parse_input_date(from).ok_or("Startdatum fehlt")?;
    let until: NaiveDate = parse_input_date(until).ok_or("Enddatum fehlt")?;

    let dto = CreateReservationDto::new(item.id.clone(), quantity, from, until, Some(note));
    dto.validate(item.quantity_available)?;
    Ok(dto)
}

/// Reservation form for one item. Shown in a modal when `handle` is set.
#[component]
pub fn ReserveForm(
    item: InventoryItem,
    #[prop(optional)] handle: Option<ModalHandle>,
    /// Runs after a successful reservation or on cancel.
    on_done: Callback<()>,
) -> impl IntoView {
    let start = to_input_value(today());
    let quantity = RwSignal::new("1".to_string());
    let from = RwSignal::new(start.clone());
    let until = RwSignal::new(start);
    let note = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let close = {
        let handle = handle.clone();
        move || {
            if let Some(handle) = &handle {
                handle.close();
            }
        }
    };

    let cancel = {
        let close = close.clone();
        move |_| {
            close();
            on_done.run(());
        }
    };

    let title = format!("{} reservieren", item.name);
    let availability = format!("Verfügbar: {} von {}", item.quantity_available, item.quantity_total);

    let submit = move |_| {
        let dto = match build_request(
            &item,
            &quantity.get_untracked(),
            &from.get_untracked(),
            &until.get_untracked(),
            note.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_busy.set(true);
        set_error.set(None);
        let close = close.clone();
        spawn_local(async move {
            match api::create_reservation(dto).await {
                Ok(reservation) => {
                    log::info!("reservation {} created", reservation.id);
                    close();
                    on_done.run(());
                }
                Err(e) => {
                    log::warn!("reservation failed: {}", e);
                    set_error.set(Some(api::create_error_message(&e)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="reserve-form">
            <h3>{title}</h3>
            <p class="reserve-form__hint">{availability}</p>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label>"Menge"</label>
                <Input value=quantity input_type=InputType::Number />
            </div>
            <div class="form-group">
                <label for="reserve-from">"Von"</label>
                <input
                    type="date"
                    id="reserve-from"
                    prop:value=move || from.get()
                    on:input=move |ev| from.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="reserve-until">"Bis"</label>
                <input
                    type="date"
                    id="reserve-until"
                    prop:value=move || until.get()
                    on:input=move |ev| until.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Notiz"</label>
                <Textarea value=note placeholder="Optional" />
            </div>

            <div class="reserve-form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                    "Abbrechen"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || busy.get())
                >
                    "Reservieren"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beamer() -> InventoryItem {
        InventoryItem {
            id: "i1".into(),
            name: "Beamer".into(),
            description: None,
            category: "AV".into(),
            quantity_total: 3,
            quantity_available: 2,
            location: None,
        }
    }

    #[test]
    fn test_build_request() {
        let dto = build_request(&beamer(), " 2 ", "2024-03-01", "2024-03-03", "Seminar".into())
            .unwrap();
        assert_eq!(dto.quantity, 2);
        assert_eq!(dto.item_id, "i1");
        assert_eq!(dto.note.as_deref(), Some("Seminar"));
    }

    #[test]
    fn test_build_request_errors() {
        let item = beamer();
        assert!(build_request(&item, "x", "2024-03-01", "2024-03-03", String::new()).is_err());
        assert!(build_request(&item, "1", "", "2024-03-03", String::new()).is_err());
        assert!(build_request(&item, "3", "2024-03-01", "2024-03-03", String::new()).is_err());
        assert!(build_request(&item, "1", "2024-03-04", "2024-03-03", String::new()).is_err());
    }
}
