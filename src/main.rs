//! Inventory Editor Frontend Entry Point

mod auth;
mod config;
mod logger;
mod store;
mod context;
mod remote;
mod download;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// Host configuration, embedded at build time
const APP_CONFIG: &str = include_str!("../app_config.json");

fn main() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::from_json(APP_CONFIG) {
        Ok(config) => {
            logger::init(config.level_filter());
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            logger::init(config.level_filter());
            log::warn!("{}; using defaults", e);
            config
        }
    };
    let auth = auth::from_config(&config);

    mount_to_body(move || view! { <App config=config auth=auth /> });
}
