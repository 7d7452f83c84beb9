//! View State Machine
//!
//! Which page, presentation and category are active, and the open panel.
//! Transitions return the side effects the map and DOM layers must apply,
//! so the state logic can be tested without a browser.

use crate::ledger::summary::SortOrder;
use crate::models::{Category, Location};

/// Top-level tab buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Landmarks,
    Businesses,
    Profile,
}

impl Tab {
    pub fn category(&self) -> Option<Category> {
        match self {
            Tab::Landmarks => Some(Category::Landmarks),
            Tab::Businesses => Some(Category::Businesses),
            Tab::Profile => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Map,
    Profile,
}

/// Map pins or the sorted card list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Map,
    Box,
}

/// Location shown in the detail panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTarget {
    pub category: Category,
    pub location: Location,
}

/// Work requested by `switch_tab`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabEffects {
    /// Attach only this category's pin layer
    pub show_layer: Option<Category>,
    /// Recalculate map size after the tab-switch delay
    pub resize_map: bool,
    pub render_box: bool,
    pub refresh_dashboard: bool,
}

/// Work requested by `toggle_view`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewEffects {
    pub render_box: bool,
    /// Recalculate map size after the view-toggle delay
    pub resize_map: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub active_page: Page,
    pub current_view: ViewMode,
    pub current_category: Category,
    pub sort_order: SortOrder,
    /// Last opened panel. Kept after closing so spend logging and the
    /// rendered fields stay intact until another panel opens.
    pub panel: Option<PanelTarget>,
    pub panel_open: bool,
    /// Bumped on every open, even for the same location
    pub panel_version: u32,
}

impl ViewState {
    pub fn open_panel(&mut self, category: Category, location: Location) {
        self.panel = Some(PanelTarget { category, location });
        self.panel_open = true;
        self.panel_version = self.panel_version.wrapping_add(1);
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Category and title that spend is logged against
    pub fn spend_target(&self) -> Option<(Category, &str)> {
        self.panel
            .as_ref()
            .map(|p| (p.category, p.location.title.as_str()))
    }

    pub fn switch_tab(&mut self, tab: Tab) -> TabEffects {
        self.close_panel();

        match tab.category() {
            Some(category) => {
                self.current_category = category;
                self.active_page = Page::Map;
                TabEffects {
                    show_layer: Some(category),
                    resize_map: true,
                    render_box: self.current_view == ViewMode::Box,
                    refresh_dashboard: false,
                }
            }
            None => {
                self.active_page = Page::Profile;
                TabEffects {
                    refresh_dashboard: true,
                    ..TabEffects::default()
                }
            }
        }
    }

    pub fn toggle_view(&mut self) -> ViewEffects {
        match self.current_view {
            ViewMode::Map => {
                self.current_view = ViewMode::Box;
                ViewEffects { render_box: true, resize_map: false }
            }
            ViewMode::Box => {
                self.current_view = ViewMode::Map;
                ViewEffects { render_box: false, resize_map: true }
            }
        }
    }

    /// Whether `tab` is the highlighted tab button
    pub fn is_tab_active(&self, tab: Tab) -> bool {
        match tab.category() {
            Some(category) => self.active_page == Page::Map && self.current_category == category,
            None => self.active_page == Page::Profile,
        }
    }
}
