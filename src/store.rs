//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Location, PurchaseRecord};
use crate::view_state::ViewState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Landmarks collection, in file order
    pub landmarks: Vec<Location>,
    /// Businesses collection, in file order
    pub businesses: Vec<Location>,
    /// Snapshot of the spend ledger, refreshed after every write
    pub purchases: Vec<PurchaseRecord>,
    /// Page, tab, presentation and panel
    pub view: ViewState,
    /// Box view cards in display order
    pub box_items: Vec<Location>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace a category's collection
pub fn store_set_locations(store: &AppStore, category: Category, locations: Vec<Location>) {
    match category {
        Category::Landmarks => store.landmarks().set(locations),
        Category::Businesses => store.businesses().set(locations),
    }
}

/// Current collection for a category (untracked)
pub fn store_locations(store: &AppStore, category: Category) -> Vec<Location> {
    match category {
        Category::Landmarks => store.landmarks().get_untracked(),
        Category::Businesses => store.businesses().get_untracked(),
    }
}
