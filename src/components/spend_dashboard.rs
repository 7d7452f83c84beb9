//! Spend Dashboard Component
//!
//! Totals and the full purchase list on the profile page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::ledger::summary::{dashboard_summary, format_currency};
use crate::store::AppStateStoreFields;

#[component]
pub fn SpendDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let local_share = ctx.config.with_value(|c| c.local_share());

    let summary = Memo::new(move |_| dashboard_summary(&store.purchases().read(), local_share));

    view! {
        <div class="spend-dashboard">
            <div class="spend-figures">
                <div class="spend-figure">
                    <span class="spend-figure-label">"Total spent"</span>
                    <span id="total-spent" class="spend-figure-value">
                        {move || summary.with(|s| format_currency(s.total))}
                    </span>
                </div>
                <div class="spend-figure">
                    <span class="spend-figure-label">"Into the local economy"</span>
                    <span id="local-economy" class="spend-figure-value">
                        {move || summary.with(|s| format_currency(s.local_economy))}
                    </span>
                </div>
            </div>

            <div id="purchase-list" class="purchase-list">
                {move || summary.with(|s| {
                    if s.rows.is_empty() {
                        view! {
                            <p class="purchase-empty">
                                "No purchases yet. Visit a landmark or business to log spending!"
                            </p>
                        }.into_any()
                    } else {
                        s.rows.iter().map(|p| view! {
                            <div class="purchase-row">
                                <span>{p.landmark.clone()}</span>
                                <span class="purchase-amount">{format_currency(p.amount)}</span>
                            </div>
                        }).collect_view().into_any()
                    }
                })}
            </div>
        </div>
    }
}
