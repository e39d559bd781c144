use serde::{Deserialize, Serialize};

use crate::navigation::BoundaryMode;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Absent means no credential is configured, which is a valid state:
    /// the presenter then runs with canned demo output. An empty
    /// environment variable counts as absent, never as an empty key.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub boundary: BoundaryMode,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            base_url: deck_gemini::DEFAULT_BASE_URL.to_string(),
            boundary: BoundaryMode::Clamp,
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(model) = std::env::var("DECK_MODEL") {
            config.model = model;
        }

        if let Ok(url) = std::env::var("DECK_API_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(mode) = std::env::var("DECK_BOUNDARY") {
            if mode.eq_ignore_ascii_case("wrap") {
                config.boundary = BoundaryMode::Wrap;
            }
        }

        config
    }
}
