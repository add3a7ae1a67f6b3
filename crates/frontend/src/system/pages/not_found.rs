use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::href_for;
use crate::routes::table::RouteName;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Diese Seite gibt es nicht."</p>
            <A href=href_for(RouteName::Inventar)>"Zum Inventar"</A>
        </div>
    }
}
