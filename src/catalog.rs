//! Remote catalog API client

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Default base URL for the add-on catalog API
const DEFAULT_BASE_URL: &str = "https://catalog.addon-watch.dev/addons";

/// Error code the catalog returns for resources it no longer serves
pub const ERROR_RESOURCE_NOT_AVAILABLE: &str = "RESOURCE_NOT_AVAILABLE";

/// Per-resource payload of a successful catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default)]
    pub resource_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub url: String,
}

/// Response envelope from the catalog API
///
/// `data` and `error` are both optional on the wire; a failed lookup carries
/// an error code, a successful one carries the entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<CatalogEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// True when the catalog explicitly reported the resource as unavailable.
    pub fn is_resource_unavailable(&self) -> bool {
        !self.success && self.error.as_deref() == Some(ERROR_RESOURCE_NOT_AVAILABLE)
    }

    /// Remote version string, if the response carries a non-empty one.
    pub fn version(&self) -> Option<&str> {
        self.data
            .as_ref()
            .map(|data| data.version.as_str())
            .filter(|version| !version.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Trait for looking up one resource in the remote catalog
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Fetches the catalog record for one resource id
    async fn lookup(&self, resource_id: u32) -> Result<CatalogResponse, CatalogError>;
}

/// HTTP implementation of [`CatalogLookup`]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a new CatalogClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("addon-watch")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl CatalogLookup for CatalogClient {
    async fn lookup(&self, resource_id: u32) -> Result<CatalogResponse, CatalogError> {
        let url = format!("{}/{}/", self.base_url, resource_id);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog returned status {} for {}", status, url);
            return Err(CatalogError::Status { status, url });
        }

        response.json::<CatalogResponse>().await.map_err(|e| {
            warn!("Failed to parse catalog response from {}: {}", url, e);
            CatalogError::InvalidBody(e.to_string())
        })
    }
}
