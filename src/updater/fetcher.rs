//! Cache-or-network resolution of the remote metadata

use reqwest::{StatusCode, header};
use tracing::{debug, warn};

use crate::config::{METADATA_TTL, REQUEST_TIMEOUT};
use crate::error::FetchError;
use crate::updater::UpdateChecker;
use crate::updater::remote::RemoteMetadata;

impl UpdateChecker {
    /// Resolve the remote metadata, consulting the store first
    ///
    /// Returns `None` when no metadata is available this invocation: the
    /// transport failed, the endpoint answered with a status other than 200,
    /// the body was empty, or the body was not valid JSON. Failures are
    /// absorbed here; the next triggering event retries implicitly.
    pub async fn fetch_metadata(&self) -> Option<RemoteMetadata> {
        let raw = match self.cached_raw() {
            Some(raw) => raw,
            None => match self.fetch_raw().await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Metadata fetch for {} failed: {}", self.config.slug, e);
                    return None;
                }
            },
        };

        match serde_json::from_slice(&raw) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!("Metadata for {} is not valid JSON: {}", self.config.slug, e);
                None
            }
        }
    }

    /// Read the raw response from the store, honoring the cache flag
    fn cached_raw(&self) -> Option<Vec<u8>> {
        if !self.config.cache_enabled {
            return None;
        }

        match self.store.get(&self.cache_key) {
            Ok(raw) => raw,
            Err(e) => {
                // Treated as a miss; the network fetch repopulates the entry
                warn!("Store read for {} failed: {}", self.cache_key, e);
                None
            }
        }
    }

    /// Perform the single HTTP call and repopulate the store on success
    async fn fetch_raw(&self) -> Result<Vec<u8>, FetchError> {
        let mut request = self
            .client
            .get(&self.config.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header(header::ACCEPT, "application/json");

        if let Some(license) = &self.config.license {
            request = request.query(&[("license", license.as_str())]);
        }

        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        debug!("Fetched {} bytes for {}", body.len(), self.config.slug);

        if let Err(e) = self.store.set(&self.cache_key, &body, METADATA_TTL) {
            warn!("Store write for {} failed: {}", self.cache_key, e);
        }

        Ok(body.to_vec())
    }
}
