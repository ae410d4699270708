//! Download page fetching.
//!
//! The live source needs a rendered DOM: the vendor download page builds its
//! links client-side, so a plain HTTP GET never sees the tarball anchor.
//! [`PageFetcher`] is the seam between version resolution and the renderer.

#[cfg(feature = "browser")]
mod browser;

#[cfg(feature = "browser")]
pub use browser::ChromiumPageFetcher;

use crate::error::{UpdateError, UpdateResult};
use async_trait::async_trait;
use std::time::Duration;

/// Vendor page listing the Linux downloads.
pub const DEFAULT_DOWNLOAD_PAGE: &str = "https://antigravity.google/download/linux";

/// File name the Linux x64 tarball link ends with.
pub const TARBALL_SUFFIX: &str = "Antigravity.tar.gz";

/// Default window for the page to settle after navigation.
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(10);

/// Settings for the live download page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveFetchConfig {
    pub page_url: String,
    pub tarball_suffix: String,
    /// How long to keep polling the rendered DOM for the tarball link.
    pub settle: Duration,
}

impl Default for LiveFetchConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_DOWNLOAD_PAGE.to_string(),
            tarball_suffix: TARBALL_SUFFIX.to_string(),
            settle: DEFAULT_SETTLE,
        }
    }
}

/// Capability to obtain the tarball link from the vendor download page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// `href` of the first anchor ending in the tarball file name, if any.
    ///
    /// Errors only when the page cannot be rendered at all.
    async fn fetch_latest_href(&self) -> UpdateResult<Option<String>>;

    /// Page the link is read from, for diagnostics.
    fn page_url(&self) -> &str;

    fn tarball_suffix(&self) -> &str {
        TARBALL_SUFFIX
    }
}

/// Fetcher used when no renderer is compiled in.
#[derive(Debug, Clone, Default)]
pub struct UnavailablePageFetcher {
    config: LiveFetchConfig,
}

impl UnavailablePageFetcher {
    pub fn new(config: LiveFetchConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PageFetcher for UnavailablePageFetcher {
    async fn fetch_latest_href(&self) -> UpdateResult<Option<String>> {
        Err(UpdateError::RenderingUnavailable {
            reason: "built without the `browser` feature; pass --version or --url instead"
                .to_string(),
        })
    }

    fn page_url(&self) -> &str {
        &self.config.page_url
    }

    fn tarball_suffix(&self) -> &str {
        &self.config.tarball_suffix
    }
}

/// Fetcher returning a canned link. Used by tests and offline runs.
#[derive(Debug, Clone)]
pub struct StaticPageFetcher {
    href: Option<String>,
}

impl StaticPageFetcher {
    pub fn new(href: Option<String>) -> Self {
        Self { href }
    }
}

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch_latest_href(&self) -> UpdateResult<Option<String>> {
        Ok(self.href.clone())
    }

    fn page_url(&self) -> &str {
        "static://download-page"
    }
}

/// Default fetcher for this build: headless Chromium when available.
pub fn default_page_fetcher(config: LiveFetchConfig) -> Box<dyn PageFetcher> {
    #[cfg(feature = "browser")]
    {
        Box::new(ChromiumPageFetcher::new(config))
    }
    #[cfg(not(feature = "browser"))]
    {
        Box::new(UnavailablePageFetcher::new(config))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_fetcher_reports_rendering_unavailable() {
        let fetcher = UnavailablePageFetcher::default();
        let err = fetcher.fetch_latest_href().await.unwrap_err();
        assert!(matches!(err, UpdateError::RenderingUnavailable { .. }));
        assert_eq!(fetcher.page_url(), DEFAULT_DOWNLOAD_PAGE);
    }

    #[tokio::test]
    async fn test_static_fetcher_returns_canned_href() {
        let href = "https://x/stable/1.16.2-99887766/linux-x64/Antigravity.tar.gz";
        let fetcher = StaticPageFetcher::new(Some(href.to_string()));
        assert_eq!(fetcher.fetch_latest_href().await.unwrap().as_deref(), Some(href));
        assert_eq!(fetcher.tarball_suffix(), TARBALL_SUFFIX);
    }
}
