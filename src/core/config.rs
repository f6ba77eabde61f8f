//! Configuration from environment variables and CLI overrides.

use std::env;

use reqwest::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Weather agent endpoint: POST target for sends, probe target for the
    /// connectivity monitor.
    pub endpoint: Url,
    /// Ring the terminal bell on send and when a reply lands.
    pub bell: bool,
    /// Show HH:MM next to message labels.
    pub show_timestamps: bool,
    /// Start the TUI with the light palette instead of the dark default.
    pub light_theme: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WEATHER_AGENT_URL is not set (see env.example)")]
    MissingEndpoint,
    #[error("invalid endpoint URL `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Load configuration from the environment. A CLI `--endpoint` override takes
/// precedence over `WEATHER_AGENT_URL`.
pub fn load(endpoint_override: Option<&str>) -> Result<Config, ConfigError> {
    let raw = match endpoint_override {
        Some(url) => url.to_string(),
        None => env::var("WEATHER_AGENT_URL").map_err(|_| ConfigError::MissingEndpoint)?,
    };
    let endpoint = Url::parse(&raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw,
        reason: e.to_string(),
    })?;

    Ok(Config {
        endpoint,
        bell: env_flag("WEATHER_CHAT_BELL", true),
        show_timestamps: env_flag("WEATHER_CHAT_TIMESTAMPS", true),
        light_theme: env::var("WEATHER_CHAT_THEME")
            .map(|v| parse_theme(&v))
            .unwrap_or(false),
    })
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => parse_flag(&v),
        Err(_) => default,
    }
}

/// "0", "false", "off", "no" (any case) disable; anything else enables.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

/// "light" (any case) selects the light palette; anything else stays dark.
fn parse_theme(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("light")
}
