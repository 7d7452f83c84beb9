//! Norwich Explorer App
//!
//! Tab bar over two pages: the map page (map or box view plus the info
//! panel) and the profile page (mock login and spend dashboard).

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BoxView, InfoPanel, MapView, ProfilePage, TabBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Category;
use crate::store::{store_set_locations, AppState, AppStateStoreFields};
use crate::view_state::{Page, ViewMode};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, AppConfig::default());

    // Provide context to all children
    provide_context(ctx);

    // Dashboard figures are ready before the profile tab is first opened
    ctx.update_spending_dashboard();

    // Load both collections on mount; they finish in any order
    Effect::new(move |_| {
        for category in Category::ALL {
            spawn_local(async move {
                let config = ctx.config.get_value();
                let locations = match category {
                    Category::Landmarks => commands::load_landmarks(&config).await,
                    Category::Businesses => commands::load_businesses(&config).await,
                };
                store_set_locations(&store, category, locations);

                let showing_cards = store
                    .view()
                    .with_untracked(|v| {
                        v.current_view == ViewMode::Box && v.current_category == category
                    });
                if showing_cards {
                    ctx.render_box_view();
                }
            });
        }
    });

    let active_page = Memo::new(move |_| store.view().read().active_page);
    let is_map_view = Memo::new(move |_| store.view().read().current_view == ViewMode::Map);

    view! {
        <div class="app-layout">
            <TabBar />

            <main class="pages">
                <section
                    id="map-page"
                    class="page"
                    class:active-page=move || active_page.get() == Page::Map
                >
                    <MapView />
                    <BoxView />
                    <button
                        id="toggle-view-btn"
                        class="toggle-view-btn"
                        on:click=move |_| ctx.toggle_view()
                    >
                        {move || {
                            if is_map_view.get() { "☰ List view" } else { "🗺️ Map view" }
                        }}
                    </button>
                    <InfoPanel />
                </section>

                <section
                    id="profile-page"
                    class="page"
                    class:active-page=move || active_page.get() == Page::Profile
                >
                    <ProfilePage />
                </section>
            </main>
        </div>
    }
}
