use serde::{Deserialize, Serialize};

use crate::api::Endpoints;

/// Path on the host where the frontend fetches its [`EditorConfig`].
pub const CONFIG_PATH: &str = "/config";

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Configuration injected into the editor component.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// can send a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Base URL of the type inference backend, without the `/api/...` suffix.
    pub backend_url: String,
    /// Upper bound for a single request, body included.
    pub request_timeout_ms: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl EditorConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.backend_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"backend_url":"https://types.example.org"}"#).unwrap();
        assert_eq!(config.backend_url, "https://types.example.org");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn endpoints_follow_the_backend_url() {
        let config = EditorConfig {
            backend_url: "https://types.example.org/".into(),
            ..EditorConfig::default()
        };
        assert_eq!(
            config.endpoints().infer_types(),
            "https://types.example.org/api/types/"
        );
    }
}
