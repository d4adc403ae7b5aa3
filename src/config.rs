use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "www.csscolorsapi.com";
pub const DEFAULT_ENDPOINT: &str = "/api/colors/";

/// Where the color name table is fetched from.
///
/// Every key is optional in a config file; missing ones fall back to the
/// public colors API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub scheme: String,
    pub host: String,
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid service configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.endpoint)
    }
}
