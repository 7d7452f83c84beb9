//! Box View Component
//!
//! Card list alternative to the map for the active category, sorted by
//! title. Clicking a card opens the info panel.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::ledger::summary::SortOrder;
use crate::models::Location;
use crate::store::AppStateStoreFields;
use crate::view_state::ViewMode;

#[component]
fn LocationCard(location: Location) -> impl IntoView {
    let ctx = use_app_context();
    let placeholder = ctx.config.with_value(|c| c.placeholder_image.clone());

    let image = location.image.clone().unwrap_or(placeholder);
    let address = location.address_line();
    let hours = location.hours_line();
    let title = location.title.clone();
    let description = location.description.clone();

    let on_click = move |_| {
        let category = ctx.store.view().with_untracked(|v| v.current_category);
        ctx.open_panel(category, location.clone());
    };

    view! {
        <div class="location-box" on:click=on_click>
            <img src=image alt=title.clone() class="location-box-image" />
            <div class="location-box-content">
                <div class="location-box-title">{title}</div>
                {address.map(|a| view! { <div class="location-box-address">{a}</div> })}
                {hours.map(|h| view! { <div class="location-box-hours">{h}</div> })}
                <div class="location-box-description">{description}</div>
            </div>
        </div>
    }
}

#[component]
pub fn BoxView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_box = Memo::new(move |_| store.view().read().current_view == ViewMode::Box);
    let category = Memo::new(move |_| store.view().read().current_category);
    let order = Memo::new(move |_| store.view().read().sort_order);

    view! {
        <div id="box-view" class="box-view" class:hidden=move || !is_box.get()>
            <div class="box-view-header">
                <h2 id="box-view-title">{move || category.get().label()}</h2>
                <select
                    id="order-select"
                    prop:value=move || order.get().as_str()
                    on:change=move |ev| {
                        let order: SortOrder = event_target_value(&ev).parse().unwrap_or_default();
                        ctx.set_sort_order(order);
                    }
                >
                    <option value="asc">"A → Z"</option>
                    <option value="desc">"Z → A"</option>
                </select>
                <button
                    id="close-box-view"
                    class="close-box-view"
                    on:click=move |_| ctx.toggle_view()
                >
                    "×"
                </button>
            </div>

            <div id="box-container" class="box-container">
                {move || store.box_items().get().into_iter().map(|location| view! {
                    <LocationCard location=location />
                }).collect_view()}
            </div>
        </div>
    }
}
