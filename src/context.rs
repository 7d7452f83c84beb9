//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the actions that
//! cross components: opening panels, switching tabs, logging spend.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::ledger::summary::{sorted_locations, SortOrder};
use crate::ledger::{BrowserStorage, Ledger};
use crate::logging;
use crate::map::PinMap;
use crate::models::{Category, Location, PurchaseRecord};
use crate::store::{store_locations, AppStateStoreFields, AppStore};
use crate::view_state::Tab;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: StoredValue<AppConfig>,
    ledger: StoredValue<Ledger<BrowserStorage>>,
    /// Created once the map container is mounted
    map: StoredValue<Option<PinMap>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        let ledger = Ledger::browser(config.storage_key.clone());
        Self {
            store,
            config: StoredValue::new(config),
            ledger: StoredValue::new(ledger),
            map: StoredValue::new_local(None),
        }
    }

    pub fn has_map(&self) -> bool {
        self.map.with_value(|m| m.is_some())
    }

    pub fn set_map(&self, map: PinMap) {
        self.map.set_value(Some(map));
    }

    /// Run `f` against the map if it exists yet
    pub fn with_map(&self, f: impl FnOnce(&PinMap)) {
        self.map.with_value(|m| {
            if let Some(map) = m {
                f(map);
            }
        });
    }

    // ========================
    // Panel
    // ========================

    pub fn open_panel(&self, category: Category, location: Location) {
        self.store.view().write().open_panel(category, location);
    }

    pub fn close_panel(&self) {
        if self.store.view().with_untracked(|v| v.panel_open) {
            self.store.view().write().close_panel();
        }
    }

    // ========================
    // Navigation
    // ========================

    pub fn switch_tab(&self, tab: Tab) {
        let effects = self.store.view().write().switch_tab(tab);

        if let Some(category) = effects.show_layer {
            self.with_map(|m| m.show_only(category));
        }
        if effects.resize_map {
            self.resize_map_after(self.config.with_value(|c| c.tab_resize_delay_ms));
        }
        if effects.render_box {
            self.render_box_view();
        }
        if effects.refresh_dashboard {
            self.update_spending_dashboard();
        }
    }

    pub fn toggle_view(&self) {
        let effects = self.store.view().write().toggle_view();

        if effects.render_box {
            self.render_box_view();
        }
        if effects.resize_map {
            self.resize_map_after(self.config.with_value(|c| c.view_resize_delay_ms));
        }
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.store.view().write().sort_order = order;
        self.render_box_view();
    }

    /// Rebuild the box view cards for the active category
    pub fn render_box_view(&self) {
        let (category, order) = self
            .store
            .view()
            .with_untracked(|v| (v.current_category, v.sort_order));
        let locations = store_locations(&self.store, category);
        self.store.box_items().set(sorted_locations(&locations, order));
    }

    /// The map container may have been hidden, so its size is stale
    fn resize_map_after(&self, delay_ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            ctx.with_map(|m| m.invalidate_size());
        });
    }

    // ========================
    // Spend ledger
    // ========================

    /// Re-read the ledger into the store
    pub fn update_spending_dashboard(&self) {
        let purchases = self.ledger.with_value(|l| l.get_purchases());
        self.store.purchases().set(purchases);
    }

    /// Log spend against the current panel. Invalid input, or no panel,
    /// is ignored.
    pub fn log_spend(&self, raw: &str) -> Option<PurchaseRecord> {
        let result = self.store.view().with_untracked(|v| {
            self.ledger
                .with_value(|l| l.submit_spend(v.spend_target(), raw))
        });

        match result {
            Ok(Some(record)) => {
                self.update_spending_dashboard();
                Some(record)
            }
            Ok(None) => None,
            Err(e) => {
                logging::error("LEDGER", &format!("Could not log spend: {}", e));
                None
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
