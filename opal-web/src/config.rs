//! Frontend configuration module
//!
//! This module provides configuration for the API base URL and related
//! settings.

const DEFAULT_API_URL: &str = "http://localhost:3000/";

/// Frontend configuration for URLs and settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the backing API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("OPAL_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
