//! Host configuration read from environment variables.
//!
//! | variable                    | default                  |
//! |-----------------------------|--------------------------|
//! | `TYPE_EDITOR_HOST`          | `127.0.0.1`              |
//! | `TYPE_EDITOR_PORT`          | `8080`                   |
//! | `TYPE_EDITOR_OPEN_BROWSER`  | `true`                   |
//! | `TYPE_EDITOR_BACKEND_URL`   | `http://127.0.0.1:5000`  |
//! | `TYPE_EDITOR_TIMEOUT_MS`    | `30000`                  |
//!
//! The last two end up in the `EditorConfig` handed to the frontend.

use std::str::FromStr;

use common::config::EditorConfig;
use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub editor: EditorConfig,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = EditorConfig::default();
        Self {
            host: lookup("TYPE_EDITOR_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("TYPE_EDITOR_PORT", lookup("TYPE_EDITOR_PORT"), DEFAULT_PORT),
            open_browser: parse_or(
                "TYPE_EDITOR_OPEN_BROWSER",
                lookup("TYPE_EDITOR_OPEN_BROWSER"),
                true,
            ),
            editor: EditorConfig {
                backend_url: lookup("TYPE_EDITOR_BACKEND_URL").unwrap_or(defaults.backend_url),
                request_timeout_ms: parse_or(
                    "TYPE_EDITOR_TIMEOUT_MS",
                    lookup("TYPE_EDITOR_TIMEOUT_MS"),
                    defaults.request_timeout_ms,
                ),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value {raw:?} for {key}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.editor, EditorConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = config_from(&[
            ("TYPE_EDITOR_HOST", "0.0.0.0"),
            ("TYPE_EDITOR_PORT", "9090"),
            ("TYPE_EDITOR_OPEN_BROWSER", "false"),
            ("TYPE_EDITOR_BACKEND_URL", "https://types.example.org"),
            ("TYPE_EDITOR_TIMEOUT_MS", " 1500 "),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:9090");
        assert!(!config.open_browser);
        assert_eq!(config.editor.backend_url, "https://types.example.org");
        assert_eq!(config.editor.request_timeout_ms, 1500);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("TYPE_EDITOR_PORT", "eighty"),
            ("TYPE_EDITOR_TIMEOUT_MS", "-1"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.editor.request_timeout_ms, 30_000);
    }
}
