use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `config.toml` in the data directory.
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the recommendation service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, e.g. `background = "#0C001B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:5000");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_toml_keeps_section_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
[ui.colors]
background = "#000000"
"##,
        )
        .unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:5000");
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
    }
}
