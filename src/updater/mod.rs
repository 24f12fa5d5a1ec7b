//! Update check engine
//!
//! This module decides whether a newer, compatible version of a watched
//! component is available, and hands structured metadata to the host's
//! update-management UI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  describe   │────▶│    fetch    │◀────│    gate     │
//! │  (UI info)  │     │ (cache/net) │     │ (compare)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   ▲
//!                            ▼                   │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    store    │◀────│    purge    │
//!                     │  (TTL KV)   │     │ (on install)│
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetcher`]: cache-or-network resolution of the remote metadata
//! - [`info`]: component information projection for the host's UI
//! - [`gate`]: version/host/runtime compatibility gate
//! - [`purge`]: cache invalidation on install events
//! - [`compare`]: version ordering helpers
//! - [`remote`]: typed shape of the endpoint's JSON document

pub mod compare;
pub mod fetcher;
pub mod gate;
pub mod info;
pub mod purge;
pub mod remote;

pub use gate::{PendingUpdates, UpdateDescriptor};
pub use info::{COMPONENT_INFORMATION, ComponentInfo};
pub use purge::{InstallAction, InstallEvent, InstallTarget};
pub use remote::{Banners, RemoteMetadata, Sections};

use std::sync::Arc;

use crate::config::{HostEnvironment, UpdaterConfig};
use crate::store::TransientStore;

/// Callback invoked after a successful cache purge, with the install event
/// that triggered it
pub type PurgeListener = Box<dyn Fn(&InstallEvent) + Send + Sync>;

/// Update checker for a single component
///
/// Holds the configuration, the host environment, the transient store, and
/// the HTTP client. The host calls the operations explicitly; nothing is
/// registered into ambient dispatch tables.
pub struct UpdateChecker {
    config: UpdaterConfig,
    env: HostEnvironment,
    store: Arc<dyn TransientStore>,
    client: reqwest::Client,
    cache_key: String,
    purge_listeners: Vec<PurgeListener>,
}

impl UpdateChecker {
    pub fn new(
        config: UpdaterConfig,
        env: HostEnvironment,
        store: Arc<dyn TransientStore>,
    ) -> Self {
        let cache_key = config.cache_key();
        Self {
            config,
            env,
            store,
            client: reqwest::Client::builder()
                .user_agent("update-checker")
                .build()
                .expect("Failed to create HTTP client"),
            cache_key,
            purge_listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Register a callback to be notified after each successful cache purge
    pub fn on_purge(&mut self, listener: impl Fn(&InstallEvent) + Send + Sync + 'static) {
        self.purge_listeners.push(Box::new(listener));
    }
}
