//! Info Panel Component
//!
//! Detail overlay for the selected location: description, optional
//! address/hours/image, spend logging and the spend history for that place.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::ledger::summary::{format_currency, history_for, short_date, LocationHistory};
use crate::store::AppStateStoreFields;

/// Purchases logged at the open location, newest first
#[component]
fn PanelHistory(history: Memo<LocationHistory>) -> impl IntoView {
    view! {
        <Show when=move || history.with(|h| !h.is_empty())>
            <div id="panel-history" class="panel-history">
                <div class="panel-history-header">
                    "Spent here: "
                    <strong>{move || history.with(|h| format_currency(h.total))}</strong>
                </div>
                {move || history.with(|h| {
                    h.rows.iter().map(|p| {
                        let date = short_date(&p.date, &chrono::Local);
                        let amount = format_currency(p.amount);
                        view! {
                            <div class="panel-history-row">
                                <span>{date}</span>
                                <span>{amount}</span>
                            </div>
                        }
                    }).collect_view()
                })}
            </div>
        </Show>
    }
}

#[component]
pub fn InfoPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (spend_input, set_spend_input) = signal(String::new());
    let (confirm, set_confirm) = signal::<Option<String>>(None);
    let confirm_seq = StoredValue::new(0u32);

    let is_open = Memo::new(move |_| store.view().read().panel_open);
    let target = Memo::new(move |_| store.view().read().panel.clone());
    let panel_version = Memo::new(move |_| store.view().read().panel_version);

    // Every open starts with an empty spend box and no confirmation
    Effect::new(move |_| {
        panel_version.track();
        set_spend_input.set(String::new());
        set_confirm.set(None);
    });

    let history = Memo::new(move |_| match target.get() {
        Some(t) => history_for(&store.purchases().read(), t.category, &t.location.title),
        None => LocationHistory::default(),
    });

    let title = move || {
        target.with(|t| {
            t.as_ref()
                .map(|t| t.location.title.clone())
                .unwrap_or_default()
        })
    };
    let description = move || {
        target.with(|t| {
            t.as_ref()
                .map(|t| t.location.description.clone())
                .unwrap_or_default()
        })
    };
    let image = move || target.with(|t| t.as_ref().and_then(|t| t.location.image.clone()));
    let address = move || target.with(|t| t.as_ref().and_then(|t| t.location.address_line()));
    let hours = move || target.with(|t| t.as_ref().and_then(|t| t.location.hours_line()));

    let on_spend = move |_| {
        let Some(record) = ctx.log_spend(&spend_input.get_untracked()) else {
            return;
        };
        set_spend_input.set(String::new());
        set_confirm.set(Some(format!(
            "{} logged at {}",
            format_currency(record.amount),
            record.landmark
        )));

        confirm_seq.update_value(|n| *n += 1);
        let seq = confirm_seq.get_value();
        let delay = ctx.config.with_value(|c| c.spend_confirm_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // A newer confirmation owns the message now
            if confirm_seq.get_value() == seq {
                set_confirm.set(None);
            }
        });
    };

    view! {
        <div
            id="info-panel"
            class="info-panel"
            style:display=move || if is_open.get() { "block" } else { "none" }
        >
            <button
                id="close-panel-btn"
                class="close-panel-btn"
                on:click=move |_| ctx.close_panel()
            >
                "×"
            </button>

            <Show when=move || image().is_some()>
                <img
                    id="panel-image"
                    class="panel-image"
                    src=move || image().unwrap_or_default()
                    alt=title
                />
            </Show>

            <h2 id="panel-title">{title}</h2>

            <Show when=move || address().is_some()>
                <div id="panel-address" class="panel-address">
                    {move || address().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || hours().is_some()>
                <div id="panel-hours" class="panel-hours">
                    {move || hours().unwrap_or_default()}
                </div>
            </Show>

            <p id="panel-description">{description}</p>

            <div id="panel-spend" class="panel-spend">
                <label for="spend-input">"Spent here? Log it:"</label>
                <div class="spend-row">
                    <input
                        id="spend-input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="£0.00"
                        prop:value=move || spend_input.get()
                        on:input=move |ev| set_spend_input.set(event_target_value(&ev))
                    />
                    <button id="spend-btn" on:click=on_spend>"Log spend"</button>
                </div>
                <Show when=move || confirm.with(|c| c.is_some())>
                    <div id="spend-confirm" class="spend-confirm">
                        {move || confirm.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <PanelHistory history=history />
        </div>
    }
}
