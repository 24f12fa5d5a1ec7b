//! Component information projection for the host's update popup

use serde::Serialize;

use crate::updater::UpdateChecker;
use crate::updater::remote::{Banners, Sections};

/// Query action this provider answers; anything else passes through
pub const COMPONENT_INFORMATION: &str = "plugin_information";

/// Information object handed to the host's UI
///
/// A straight projection of [`RemoteMetadata`](crate::updater::RemoteMetadata);
/// section markup is copied verbatim, the download URL is exposed a second
/// time under `trunk` for host-UI compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentInfo {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub version: Option<String>,
    pub tested: Option<String>,
    pub requires: Option<String>,
    pub author: Option<String>,
    pub author_profile: Option<String>,
    pub homepage: Option<String>,
    pub download_link: Option<String>,
    pub trunk: Option<String>,
    pub requires_php: Option<String>,
    pub last_updated: Option<String>,
    pub sections: Sections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banners: Option<Banners>,
}

impl UpdateChecker {
    /// Answer a component-information query for the host's UI
    ///
    /// Returns `None` (passthrough) unless `action` is
    /// [`COMPONENT_INFORMATION`] and `slug` matches the configured
    /// identifier exactly, or when no metadata is available. Several
    /// checkers can share one dispatch point without interfering.
    pub async fn describe(&self, action: &str, slug: &str) -> Option<ComponentInfo> {
        if action != COMPONENT_INFORMATION {
            return None;
        }

        if slug.is_empty() || slug != self.config.slug {
            return None;
        }

        let remote = self.fetch_metadata().await?;

        Some(ComponentInfo {
            name: remote.name,
            slug: remote.slug,
            version: remote.version,
            tested: remote.tested,
            requires: remote.requires,
            author: remote.author,
            author_profile: remote.author_profile,
            homepage: remote.homepage,
            download_link: remote.download_url.clone(),
            trunk: remote.download_url,
            requires_php: remote.requires_php,
            last_updated: remote.last_updated,
            sections: remote.sections.unwrap_or_default(),
            banners: remote.banners.filter(|banners| !banners.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::{Server, ServerGuard};

    use crate::config::{HostEnvironment, UpdaterConfig};
    use crate::store::MemoryStore;
    use crate::updater::info::COMPONENT_INFORMATION;
    use crate::updater::{Banners, UpdateChecker};

    async fn serve(body: &str) -> (ServerGuard, UpdateChecker) {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/info.json")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let config = UpdaterConfig::new(
            "acme-tool",
            "2.1.0",
            format!("{}/info.json", server.url()),
        );
        let checker = UpdateChecker::new(
            config,
            HostEnvironment::new("6.4", "8.1"),
            Arc::new(MemoryStore::new()),
        );
        (server, checker)
    }

    #[tokio::test]
    async fn unrelated_action_passes_through_without_fetching() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/info.json")
            .expect(0)
            .create_async()
            .await;

        let config = UpdaterConfig::new(
            "acme-tool",
            "2.1.0",
            format!("{}/info.json", server.url()),
        );
        let checker = UpdateChecker::new(
            config,
            HostEnvironment::new("6.4", "8.1"),
            Arc::new(MemoryStore::new()),
        );

        assert!(checker.describe("query_plugins", "acme-tool").await.is_none());
        assert!(
            checker
                .describe(COMPONENT_INFORMATION, "other-tool")
                .await
                .is_none()
        );
        assert!(checker.describe(COMPONENT_INFORMATION, "").await.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unavailable_metadata_passes_through() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/info.json")
            .with_status(500)
            .create_async()
            .await;

        let config = UpdaterConfig::new(
            "acme-tool",
            "2.1.0",
            format!("{}/info.json", server.url()),
        );
        let checker = UpdateChecker::new(
            config,
            HostEnvironment::new("6.4", "8.1"),
            Arc::new(MemoryStore::new()),
        );

        assert!(
            checker
                .describe(COMPONENT_INFORMATION, "acme-tool")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn matching_query_projects_the_metadata() {
        let body = r#"{
            "name": "Acme Tool",
            "slug": "acme-tool",
            "version": "2.2.0",
            "tested": "6.5",
            "requires": "6.0",
            "requires_php": "7.4",
            "author": "Acme Inc.",
            "author_profile": "https://example.com/acme",
            "homepage": "https://example.com/acme-tool",
            "download_url": "https://example.com/acme-tool-2.2.0.zip",
            "last_updated": "2026-08-01 12:00:00",
            "sections": {"description": "Does acme things.", "changelog": "Fixes"},
            "banners": {
                "low": "https://example.com/banner-772x250.png",
                "high": "https://example.com/banner-1544x500.png"
            }
        }"#;
        let (_server, checker) = serve(body).await;

        let info = checker
            .describe(COMPONENT_INFORMATION, "acme-tool")
            .await
            .unwrap();

        assert_eq!(info.name.as_deref(), Some("Acme Tool"));
        assert_eq!(info.version.as_deref(), Some("2.2.0"));
        assert_eq!(
            info.download_link.as_deref(),
            Some("https://example.com/acme-tool-2.2.0.zip")
        );
        assert_eq!(info.trunk, info.download_link);
        assert_eq!(info.sections.description.as_deref(), Some("Does acme things."));
        assert_eq!(info.sections.installation, None);
        assert_eq!(
            info.banners,
            Some(Banners {
                low: Some("https://example.com/banner-772x250.png".to_string()),
                high: Some("https://example.com/banner-1544x500.png".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn absent_banners_are_omitted() {
        let (_server, checker) = serve(r#"{"name": "Acme Tool", "version": "2.2.0"}"#).await;

        let info = checker
            .describe(COMPONENT_INFORMATION, "acme-tool")
            .await
            .unwrap();

        assert_eq!(info.banners, None);
    }

    #[tokio::test]
    async fn empty_banners_mapping_is_omitted() {
        let (_server, checker) =
            serve(r#"{"name": "Acme Tool", "version": "2.2.0", "banners": {}}"#).await;

        let info = checker
            .describe(COMPONENT_INFORMATION, "acme-tool")
            .await
            .unwrap();

        assert_eq!(info.banners, None);
    }

    #[tokio::test]
    async fn partial_banners_are_copied_without_fallback() {
        let (_server, checker) = serve(
            r#"{"version": "2.2.0", "banners": {"low": "https://example.com/b.png"}}"#,
        )
        .await;

        let info = checker
            .describe(COMPONENT_INFORMATION, "acme-tool")
            .await
            .unwrap();

        let banners = info.banners.unwrap();
        assert_eq!(banners.low.as_deref(), Some("https://example.com/b.png"));
        assert_eq!(banners.high, None);
    }
}
