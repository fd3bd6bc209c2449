#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error, info};

use common::config::{SiteConfig, parse_config};

mod home;
mod site;
mod theme;
mod ui;
mod viewport;

use home::SinglePage;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    let (config, config_err) = match parse_config(SITE_TOML) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    let level = config.level().unwrap_or(Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    if let Some(err) = config_err {
        error!("failed to parse site config, using defaults: {err}");
    }
    info!(variant = %config.variant, "launching site");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        SinglePage {}
    }
}
