//! PatchTune UI Entry Point
//!
//! Loads the embedded configuration, initializes logging and mounts the
//! Leptos app to the DOM.

use leptos::*;
use patchtune_shared::ConsoleConfig;
use patchtune_ui::{config, App};
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    let (console_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };

    // Initialize WASM tracing
    let level = console_config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::DEBUG);
    let layer_config = WASMLayerConfigBuilder::default()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);

    if let Some(e) = config_error {
        tracing::warn!("Invalid console.toml, using defaults: {}", e);
    }
    let console_config = config::resolve_origin(console_config);

    tracing::info!("Starting PatchTune console against {}", console_config.api_base_url);

    // Mount the app
    mount_to_body(move || view! { <App config=console_config /> });
}
