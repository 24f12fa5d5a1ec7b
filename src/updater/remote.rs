//! Typed shape of the remote metadata endpoint's JSON response

use serde::{Deserialize, Serialize};

/// Metadata document served by the endpoint
///
/// Every field is optional: the endpoint is self-hosted and not validated,
/// so an incomplete document surfaces as absent fields rather than a decode
/// failure. Only a body that is not valid JSON at all is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteMetadata {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub version: Option<String>,
    /// Highest host version the release was tested against
    pub tested: Option<String>,
    /// Minimum host version the release requires
    pub requires: Option<String>,
    /// Minimum language runtime version the release requires
    pub requires_php: Option<String>,
    pub author: Option<String>,
    pub author_profile: Option<String>,
    pub homepage: Option<String>,
    pub download_url: Option<String>,
    pub last_updated: Option<String>,
    pub sections: Option<Sections>,
    pub banners: Option<Banners>,
}

/// Free-text sections displayed on the host's update popup, copied verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub description: Option<String>,
    pub installation: Option<String>,
    pub changelog: Option<String>,
}

/// Banner image URLs for the update popup header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banners {
    pub low: Option<String>,
    pub high: Option<String>,
}

impl Banners {
    /// A banners mapping with neither resolution set carries no information
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}
