use contracts::reservations::{Reservation, ReservationStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_reservation::api;
use crate::shared::date_utils::{format_datetime, format_period};
use crate::shared::modal_stack::use_modal;

/// Newest period first; active reservations before closed ones on the same day.
fn sort_reservations(list: &mut [Reservation]) {
    list.sort_by(|a, b| {
        b.reserved_from
            .cmp(&a.reserved_from)
            .then_with(|| b.can_cancel().cmp(&a.can_cancel()))
            .then_with(|| a.item_name.cmp(&b.item_name))
    });
}

fn status_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Active => "badge badge--active",
        ReservationStatus::Returned => "badge badge--done",
        ReservationStatus::Cancelled => "badge badge--cancelled",
    }
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let reservations: RwSignal<Vec<Reservation>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let modal = use_modal();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_reservations().await {
                Ok(mut data) => {
                    sort_reservations(&mut data);
                    reservations.set(data);
                }
                Err(e) => {
                    log::error!("failed to load reservations: {}", e);
                    set_error.set(Some(format!(
                        "Reservierungen konnten nicht geladen werden: {}",
                        e
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let do_cancel = move |id: String| {
        spawn_local(async move {
            match api::cancel_reservation(&id).await {
                Ok(()) => {
                    log::info!("reservation {} cancelled", id);
                    load_data();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let request_cancel = move |reservation: Reservation| {
        let id = reservation.id.clone();
        match modal {
            Some(modal) => {
                modal.confirm(
                    "Reservierung stornieren".to_string(),
                    format!("Reservierung für „{}“ wirklich stornieren?", reservation.item_name),
                    move || do_cancel(id.clone()),
                );
            }
            // No dialog support registered: cancel directly.
            None => do_cancel(id),
        }
    };

    view! {
        <div class="page reservations-page">
            <div class="page__header">
                <h1>"Reservierungen"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Laden..." } else { "Aktualisieren" }}
                </Button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Artikel"</th>
                        <th class="num">"Menge"</th>
                        <th>"Zeitraum"</th>
                        <th>"Status"</th>
                        <th>"Erstellt"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || reservations.get()
                        key=|r| (r.id.clone(), r.status)
                        children=move |r| {
                            let can_cancel = r.can_cancel();
                            let for_cancel = r.clone();
                            view! {
                                <tr>
                                    <td>
                                        <div>{r.item_name.clone()}</div>
                                        <small>{r.note.clone().unwrap_or_default()}</small>
                                    </td>
                                    <td class="num">{r.quantity}</td>
                                    <td>{format_period(r.reserved_from, r.reserved_until)}</td>
                                    <td><span class=status_class(r.status)>{r.status.label()}</span></td>
                                    <td>{format_datetime(&r.created_at)}</td>
                                    <td>
                                        <Show when=move || can_cancel>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click={
                                                    let for_cancel = for_cancel.clone();
                                                    move |_| request_cancel(for_cancel.clone())
                                                }
                                            >
                                                "Stornieren"
                                            </Button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || !loading.get() && reservations.with(|v| v.is_empty())>
                <p class="empty-hint">"Noch keine Reservierungen."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reservation(id: &str, from: (i32, u32, u32), status: ReservationStatus) -> Reservation {
        let from = NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap();
        Reservation {
            id: id.into(),
            item_id: "i1".into(),
            item_name: "Beamer".into(),
            quantity: 1,
            reserved_from: from,
            reserved_until: from,
            status,
            note: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_sort_reservations() {
        let mut list = vec![
            reservation("old", (2024, 1, 10), ReservationStatus::Returned),
            reservation("new-cancelled", (2024, 3, 1), ReservationStatus::Cancelled),
            reservation("new-active", (2024, 3, 1), ReservationStatus::Active),
        ];
        sort_reservations(&mut list);
        let ids: Vec<_> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new-active", "new-cancelled", "old"]);
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(ReservationStatus::Active), "badge badge--active");
        assert_eq!(status_class(ReservationStatus::Cancelled), "badge badge--cancelled");
    }
}
