//! Embedded console configuration
//!
//! `console.toml` is compiled into the bundle. `PATCHTUNE_API_URL`, when set at
//! build time, replaces its `api_base_url`.

use patchtune_shared::ConsoleConfig;

const EMBEDDED_CONFIG: &str = include_str!("../console.toml");

/// Parse the embedded configuration and apply the build-time override
pub fn load_config() -> Result<ConsoleConfig, toml::de::Error> {
    let config = ConsoleConfig::from_toml(EMBEDDED_CONFIG)?;
    Ok(match option_env!("PATCHTUNE_API_URL") {
        Some(url) if !url.is_empty() => config.with_api_base_url(url),
        _ => config,
    })
}

/// Fill an empty API base URL with the page origin
pub fn resolve_origin(config: ConsoleConfig) -> ConsoleConfig {
    if config.api_base_url.is_empty() {
        let origin = get_base_url();
        config.with_api_base_url(origin)
    } else {
        config
    }
}

/// Origin the console is served from
pub fn get_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}
