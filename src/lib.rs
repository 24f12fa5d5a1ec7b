//! Update check engine for self-hosted, host-managed components
//!
//! Checks a remote JSON metadata endpoint for a newer version of an
//! installed component, caches the raw response for one day, gates updates
//! on version/host/runtime compatibility, and hands structured metadata to
//! the embedding host's update-management UI.

pub mod config;
pub mod error;
pub mod store;
pub mod updater;

pub use config::{HostEnvironment, UpdaterConfig};
pub use updater::UpdateChecker;
