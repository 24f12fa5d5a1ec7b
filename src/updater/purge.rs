//! Cache invalidation on install events

use serde_json::Value;
use tracing::{debug, warn};

use crate::updater::UpdateChecker;

/// What the host's installer just did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    Install,
    Update,
    Delete,
}

/// What kind of installable unit the event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallTarget {
    Plugin,
    Theme,
    Translation,
    Core,
}

/// Install-completed event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct InstallEvent {
    pub action: InstallAction,
    pub target: InstallTarget,
    /// Arbitrary host context, forwarded untouched to purge listeners
    pub context: Value,
}

impl InstallEvent {
    pub fn new(action: InstallAction, target: InstallTarget) -> Self {
        Self {
            action,
            target,
            context: Value::Null,
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }
}

impl UpdateChecker {
    /// React to an install-completed event
    ///
    /// Deletes the cached metadata so the next check is fresh, but only for
    /// a completed plugin update while caching is enabled; every other
    /// action/target combination is a no-op. After a purge the registered
    /// listeners are notified with the original event, fire-and-forget.
    ///
    /// Returns whether a purge happened.
    pub fn purge(&self, event: &InstallEvent) -> bool {
        if !self.config.cache_enabled
            || event.action != InstallAction::Update
            || event.target != InstallTarget::Plugin
        {
            return false;
        }

        if let Err(e) = self.store.delete(&self.cache_key) {
            warn!("Store delete for {} failed: {}", self.cache_key, e);
        }
        debug!("Purged cached metadata for {}", self.config.slug);

        for listener in &self.purge_listeners {
            listener(event);
        }

        true
    }
}
