//! UI Components
//!
//! Leptos components for the map page, the box view and the profile page.

mod tab_bar;
mod map_view;
mod box_view;
mod info_panel;
mod spend_dashboard;
mod session;

pub use tab_bar::TabBar;
pub use map_view::MapView;
pub use box_view::BoxView;
pub use info_panel::InfoPanel;
pub use spend_dashboard::SpendDashboard;
pub use session::ProfilePage;
