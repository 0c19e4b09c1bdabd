//! HTTP client for the asset store
//!
//! Each method maps 1:1 to an endpoint of the REST contract. Calls are
//! independent: no retries, no request coalescing, no ordering guarantees
//! across concurrent writes to the same id (the backend is
//! last-writer-wins).

use crate::endpoints;
use crate::error::{RepositoryError, Result};
use mediavault_common::types::{Asset, NewAsset};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Default asset store URL when not specified via environment variable.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";

/// Default timeout for store requests in seconds.
/// Can be overridden via the `MVAULT_API_TIMEOUT_SECS` environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Explicit client configuration.
///
/// There is deliberately no process-wide base URL; every client owns its
/// configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Asset store base URL
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config pointing at the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }

    /// Load configuration from `MVAULT_SERVER_URL` and
    /// `MVAULT_API_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MVAULT_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let timeout_secs = std::env::var("MVAULT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Async client for the asset store
pub struct AssetClient {
    client: Client,
    base_url: String,
}

impl AssetClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RepositoryError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all assets
    pub async fn list_assets(&self) -> Result<Vec<Asset>> {
        const OP: &str = "list assets";
        let url = endpoints::assets_url(&self.base_url);
        debug!(url = %url, "Listing assets");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::http(OP, e))?;

        check_status(OP, &response)?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::http(OP, e))
    }

    /// Get a single asset by id
    pub async fn get_asset(&self, id: &str) -> Result<Asset> {
        const OP: &str = "get asset";
        let url = endpoints::asset_url(&self.base_url, id);
        debug!(asset_id = %id, "Fetching asset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::http(OP, e))?;

        check_status(OP, &response)?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::http(OP, e))
    }

    /// Create an asset. The store assigns the id and echoes the full record.
    pub async fn create_asset(&self, asset: &NewAsset) -> Result<Asset> {
        const OP: &str = "create asset";
        let url = endpoints::assets_url(&self.base_url);
        debug!(name = %asset.name, category = %asset.category, "Creating asset");

        let response = self
            .client
            .post(&url)
            .json(asset)
            .send()
            .await
            .map_err(|e| RepositoryError::http(OP, e))?;

        check_status(OP, &response)?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::http(OP, e))
    }

    /// Replace an asset by id (full replace)
    pub async fn update_asset(&self, id: &str, asset: &Asset) -> Result<Asset> {
        const OP: &str = "update asset";
        let url = endpoints::asset_url(&self.base_url, id);
        debug!(asset_id = %id, "Updating asset");

        let response = self
            .client
            .put(&url)
            .json(asset)
            .send()
            .await
            .map_err(|e| RepositoryError::http(OP, e))?;

        check_status(OP, &response)?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::http(OP, e))
    }

    /// Delete an asset by id. Success is 200 or 204 with no body.
    pub async fn delete_asset(&self, id: &str) -> Result<()> {
        const OP: &str = "delete asset";
        let url = endpoints::asset_url(&self.base_url, id);
        debug!(asset_id = %id, "Deleting asset");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::http(OP, e))?;

        check_status(OP, &response)?;
        Ok(())
    }
}

fn check_status(operation: &'static str, response: &Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(RepositoryError::Status {
            operation,
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_SERVER_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    }

    #[test]
    fn test_client_construction() {
        let client = AssetClient::new(ClientConfig::new("http://example.com")).unwrap();
        assert_eq!(client.base_url(), "http://example.com");
    }
}
