//! Generator client configuration

use std::time::Duration;

/// Environment variable holding the backend base URL
pub const ENV_BASE_URL: &str = "SITEPLAN_GENERATOR_URL";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "SITEPLAN_API_KEY";

/// Configuration for the HTTP generator client
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the generative backend gateway
    pub base_url: String,
    /// Bearer token; video synthesis is denied without one
    pub api_key: Option<String>,
    /// Model id for scene edits
    pub scene_model: String,
    /// Model id for image rendering
    pub image_model: String,
    /// Model id for image-to-image edits
    pub image_edit_model: String,
    /// Model id for video synthesis
    pub video_model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read base URL and API key from the environment, falling back to
    /// defaults for anything unset
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    /// With backend base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8787".to_string(),
            api_key: None,
            scene_model: "scene-edit-pro".to_string(),
            image_model: "render-image-001".to_string(),
            image_edit_model: "render-image-edit-001".to_string(),
            video_model: "flythrough-video-fast".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}
