//! Map View Component
//!
//! Leaflet container. The map is created once the div is mounted; pins are
//! placed whenever a category's collection arrives.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::logging;
use crate::map::PinMap;
use crate::models::Category;
use crate::store::AppStateStoreFields;
use crate::view_state::ViewMode;

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let map_ref = NodeRef::<html::Div>::new();
    let (map_ready, set_map_ready) = signal(false);
    let is_map_view = Memo::new(move |_| store.view().read().current_view == ViewMode::Map);

    Effect::new(move |_| {
        let Some(el) = map_ref.get() else { return };
        if ctx.has_map() {
            return;
        }
        let config = ctx.config.get_value();
        match PinMap::new(&el, &config) {
            Ok(map) => {
                // Clicking the bare map dismisses the panel
                map.on_map_click(move || ctx.close_panel());
                ctx.set_map(map);
                set_map_ready.set(true);
            }
            Err(e) => logging::error("MAP", &format!("Could not create map: {:?}", e)),
        }
    });

    for category in Category::ALL {
        Effect::new(move |_| {
            if !map_ready.get() {
                return;
            }
            let locations = match category {
                Category::Landmarks => store.landmarks().get(),
                Category::Businesses => store.businesses().get(),
            };
            ctx.with_map(|m| {
                if let Err(e) = m.set_pins(category, &locations, move |c, l| ctx.open_panel(c, l)) {
                    logging::error(
                        "MAP",
                        &format!("Could not place {} pins: {:?}", category.as_str(), e),
                    );
                }
            });
        });
    }

    view! {
        <div
            id="map"
            class="map"
            node_ref=map_ref
            style:display=move || if is_map_view.get() { "block" } else { "none" }
        ></div>
    }
}
