use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{ColorError, Result};
use crate::resolver::NameLookupTable;

/// Anything that can hand out a color name table.
pub trait TableSource {
    fn fetch_table(&self) -> Result<NameLookupTable>;
}

#[derive(Debug, Deserialize)]
struct ServiceResponse {
    colors: NameLookupTable,
}

/// Parses a service response body into the table under its `colors` field.
pub fn parse_table(body: &[u8]) -> Result<NameLookupTable> {
    let response: ServiceResponse = serde_json::from_slice(body)?;
    Ok(response.colors)
}

/// Blocking client for the remote color database.
#[derive(Debug)]
pub struct ServiceClient {
    client: Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hex-namer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ColorError::ServiceConnection)?;
        Ok(ServiceClient { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl TableSource for ServiceClient {
    fn fetch_table(&self) -> Result<NameLookupTable> {
        let url = self.config.url();
        debug!(%url, "fetching color table");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ColorError::ServiceConnection)?;
        // Status is not checked: an error page fails to parse instead.
        debug!(status = %response.status(), "color service responded");
        let body = response.bytes().map_err(ColorError::ServiceConnection)?;
        let table = parse_table(&body)?;
        debug!(records = table.len(), "parsed color table");
        Ok(table)
    }
}
