//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use gift_catalog::Currency;
use gift_search::SearchConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["gift.toml", ".gift.toml", "gift.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the gift service lives.
    #[serde(default)]
    pub service: SearchConfig,

    /// How results are shown.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used to format prices.
    #[serde(default)]
    pub currency: Currency,

    /// Origin for image paths. Defaults to the service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_base_url: Option<String>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Service settings with command-line overrides applied.
    pub fn search_config(&self, base_url: Option<&str>, timeout_secs: Option<u64>) -> SearchConfig {
        let mut service = self.service.clone();
        if let Some(url) = base_url {
            service.base_url = url.to_string();
        }
        if let Some(secs) = timeout_secs {
            service.timeout_secs = Some(secs);
        }
        service
    }

    /// Origin image paths are resolved against.
    pub fn asset_base_url(&self, service: &SearchConfig) -> String {
        self.display
            .asset_base_url
            .clone()
            .unwrap_or_else(|| service.base_url.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default gift.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Gift finder configuration

[service]
base_url = "{base_url}"
# timeout_secs = 30

[display]
currency = "GBP"
# asset_base_url = "{base_url}"
"#,
        base_url = gift_search::DEFAULT_BASE_URL
    )
}
