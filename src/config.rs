use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// How long a fetched metadata response stays valid in the store (24 hours)
pub const METADATA_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Timeout for the metadata HTTP request (60 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Suffix appended to the component slug to derive its store key
const CACHE_KEY_SUFFIX: &str = "_updater";

/// Configuration for a single update checker instance
///
/// One checker watches one component. Several checkers with distinct slugs
/// can share a dispatch point; `describe` only answers for its own slug.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdaterConfig {
    /// Stable identifier of the component being checked
    pub slug: String,
    /// Currently installed version (semver string)
    pub installed_version: String,
    /// URL of the remote metadata endpoint
    pub endpoint: String,
    /// Optional license token, appended as a `license` query parameter
    pub license: Option<String>,
    /// Whether the one-day response cache is consulted on reads.
    /// Defaults to `true`; disable to force a network fetch on every check.
    pub cache_enabled: bool,
}

impl UpdaterConfig {
    pub fn new(
        slug: impl Into<String>,
        installed_version: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            installed_version: installed_version.into(),
            endpoint: endpoint.into(),
            license: None,
            cache_enabled: true,
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Store key under which the raw metadata response is cached
    pub fn cache_key(&self) -> String {
        format!("{}{}", self.slug, CACHE_KEY_SUFFIX)
    }
}

/// Versions of the surrounding host and language runtime, supplied by the
/// embedding application. The update gate compares the remote compatibility
/// requirements against these.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEnvironment {
    pub host_version: String,
    pub runtime_version: String,
}

impl HostEnvironment {
    pub fn new(host_version: impl Into<String>, runtime_version: impl Into<String>) -> Self {
        Self {
            host_version: host_version.into(),
            runtime_version: runtime_version.into(),
        }
    }
}

/// Returns the path to the data directory for update-checker.
/// Uses $XDG_DATA_HOME/update-checker if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/update-checker,
/// or ./update-checker if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the persistent store database file.
pub fn db_path() -> PathBuf {
    data_dir().join("update-checker.db")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("update-checker")
}
