//! Frontend Configuration
//!
//! The WASM bundle has no process environment, so overrides are baked in
//! at build time through `option_env!`:
//!
//! - `POKEDEX_API_BASE_URL`: default `https://pokeapi.co/api/v2`
//! - `POKEDEX_PAGE_SIZE`: default 20
//! - `POKEDEX_LANGUAGES`: comma-separated description languages, default `fr,en`
//! - `POKEDEX_LOG_LEVEL`: default `info`

use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_LANGUAGES: &[&str] = &["fr", "en"];
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// No trailing slash
    pub api_base_url: String,
    pub page_size: u32,
    /// Flavor text languages, most preferred first
    pub languages: Vec<String>,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("POKEDEX_API_BASE_URL"),
            option_env!("POKEDEX_PAGE_SIZE"),
            option_env!("POKEDEX_LANGUAGES"),
            option_env!("POKEDEX_LOG_LEVEL"),
        )
    }

    /// Build a config from raw override values; invalid values fall back
    /// to the defaults.
    pub fn from_values(
        api_base_url: Option<&str>,
        page_size: Option<&str>,
        languages: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            page_size: parse_page_size(page_size),
            languages: parse_languages(languages),
            log_level: parse_log_level(log_level),
        }
    }
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    match raw.map(|v| v.trim().parse::<u32>()) {
        None => DEFAULT_PAGE_SIZE,
        Some(Ok(size)) if size > 0 => size,
        Some(_) => {
            log::warn!("invalid POKEDEX_PAGE_SIZE {:?}, using {}", raw, DEFAULT_PAGE_SIZE);
            DEFAULT_PAGE_SIZE
        }
    }
}

fn parse_languages(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if parsed.is_empty() {
        DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw {
        None => DEFAULT_LOG_LEVEL,
        Some(value) => log::Level::from_str(value.trim()).unwrap_or_else(|_| {
            log::warn!("unknown POKEDEX_LOG_LEVEL {:?}, using {}", value, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.languages, vec!["fr", "en"]);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("http://localhost:8000/api/v2/"),
            Some("50"),
            Some("en, ja-Hrkt ,"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.languages, vec!["en", "ja-Hrkt"]);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("0"), Some(" , "), Some("loud"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_values(None, Some("twenty"), None, None);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
