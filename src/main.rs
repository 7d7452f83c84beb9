//! Norwich Explorer Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod leaflet;
mod ledger;
mod logging;
mod map;
mod models;
mod store;
mod view_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
