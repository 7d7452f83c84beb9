//! Tab Bar Component
//!
//! Landmarks / Businesses / Profile navigation.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::view_state::Tab;

/// (tab, element id, label)
const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Landmarks, "landmarksButton", "🏛️ Landmarks"),
    (Tab::Businesses, "businessesButton", "☕ Businesses"),
    (Tab::Profile, "profileButton", "👤 Profile"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <nav class="tab-bar">
            {TABS.iter().map(|&(tab, id, label)| {
                let is_active = move || store.view().read().is_tab_active(tab);
                view! {
                    <button
                        id=id
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| ctx.switch_tab(tab)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
