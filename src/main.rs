//! NutriTrack Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dates;
mod editor;
mod error;
mod models;
mod pages;
mod score;
mod session;
mod status;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("[APP] NutriTrack starting, API at {}", config::api_base_url());
    mount_to_body(App);
}
