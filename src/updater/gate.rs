//! Version/host/runtime compatibility gate

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::updater::UpdateChecker;
use crate::updater::compare::{at_most, older_than};

/// The host's pending-updates bookkeeping
///
/// `checked` maps component keys to the versions the host last looked at;
/// the gate is a no-op until the host has populated it. `response` collects
/// one descriptor per composite key, last write wins.
#[derive(Debug, Clone, Default)]
pub struct PendingUpdates {
    pub checked: HashMap<String, String>,
    pub response: HashMap<String, UpdateDescriptor>,
}

/// Description of an available newer version and where to obtain it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDescriptor {
    /// Matched component identifier
    pub slug: String,
    /// Composite key mirroring the host's `<slug>/<slug>.php` file layout
    pub plugin: String,
    pub new_version: String,
    pub tested: Option<String>,
    /// Download URL of the new version
    pub package: Option<String>,
}

impl UpdateChecker {
    /// Check whether a newer, compatible version is available
    ///
    /// Emits a descriptor only when all three hold: the installed version is
    /// strictly older than the remote one, the remote's minimum host version
    /// is at most the running host version, and the remote's minimum runtime
    /// version is strictly below the running runtime version. The host
    /// requirement is inclusive of its minimum while the runtime requirement
    /// is strictly exclusive; the two dimensions are deliberately not
    /// unified.
    ///
    /// On success the descriptor is also inserted into `pending.response`
    /// under its composite key, replacing any previous entry.
    pub async fn check_for_update(
        &self,
        pending: &mut PendingUpdates,
    ) -> Option<UpdateDescriptor> {
        // Defer to the host's own update lifecycle
        if pending.checked.is_empty() {
            return None;
        }

        let remote = self.fetch_metadata().await?;

        let new_version = remote.version?;
        // An absent requirement constrains nothing
        let host_ok = remote
            .requires
            .is_none_or(|requires| at_most(&requires, &self.env.host_version));
        let runtime_ok = remote
            .requires_php
            .is_none_or(|requires_php| older_than(&requires_php, &self.env.runtime_version));

        if !older_than(&self.config.installed_version, &new_version) || !host_ok || !runtime_ok {
            debug!(
                "No eligible update for {} (remote {})",
                self.config.slug, new_version
            );
            return None;
        }

        let descriptor = UpdateDescriptor {
            slug: self.config.slug.clone(),
            plugin: format!("{slug}/{slug}.php", slug = self.config.slug),
            new_version,
            tested: remote.tested,
            package: remote.download_url,
        };

        pending
            .response
            .insert(descriptor.plugin.clone(), descriptor.clone());

        Some(descriptor)
    }
}
