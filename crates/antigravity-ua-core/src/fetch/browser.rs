//! Headless Chromium implementation of [`PageFetcher`].

use super::{LiveFetchConfig, PageFetcher};
use crate::error::{UpdateError, UpdateResult};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{sleep, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Renders the download page in a throwaway headless Chromium.
#[derive(Debug, Clone, Default)]
pub struct ChromiumPageFetcher {
    config: LiveFetchConfig,
}

impl ChromiumPageFetcher {
    pub fn new(config: LiveFetchConfig) -> Self {
        Self { config }
    }

    fn link_script(&self) -> String {
        format!(
            "(() => {{ const a = document.querySelector('a[href$={:?}]'); return a ? a.href : null; }})()",
            self.config.tarball_suffix
        )
    }

    /// Poll the DOM until the link shows up or the settle window closes.
    async fn find_link(&self, page: &Page) -> UpdateResult<Option<String>> {
        let script = self.link_script();
        let deadline = Instant::now() + self.config.settle;
        loop {
            let result = page.evaluate(script.as_str()).await.map_err(|e| {
                UpdateError::RenderingUnavailable { reason: format!("script evaluation failed: {e}") }
            })?;
            if let Some(href) = result.into_value::<Option<String>>().ok().flatten() {
                return Ok(Some(href));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            sleep(POLL_INTERVAL).await;
        }
    }
}

fn unavailable(reason: impl std::fmt::Display) -> UpdateError {
    UpdateError::RenderingUnavailable {
        reason: format!(
            "{reason} (install Chromium/Chrome, or pass --version / --url to skip the live fetch)"
        ),
    }
}

#[async_trait]
impl PageFetcher for ChromiumPageFetcher {
    async fn fetch_latest_href(&self) -> UpdateResult<Option<String>> {
        let browser_config = BrowserConfig::builder()
            .no_sandbox()
            .build()
            .map_err(|e| unavailable(format!("invalid browser configuration: {e}")))?;

        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| unavailable(format!("failed to launch headless browser: {e}")))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!(error = %e, "CDP handler stopped");
                    break;
                }
            }
        });

        tracing::info!(page = %self.config.page_url, "Rendering download page");
        let result = match browser.new_page(self.config.page_url.as_str()).await {
            Ok(page) => {
                if let Err(e) = page.wait_for_navigation().await {
                    tracing::warn!(error = %e, "Navigation did not settle cleanly");
                }
                self.find_link(&page).await
            },
            Err(e) => Err(unavailable(format!("failed to open {}: {e}", self.config.page_url))),
        };

        if let Err(e) = browser.close().await {
            tracing::debug!(error = %e, "Browser close failed");
        }
        let _ = browser.wait().await;
        handler_task.abort();

        result
    }

    fn page_url(&self) -> &str {
        &self.config.page_url
    }

    fn tarball_suffix(&self) -> &str {
        &self.config.tarball_suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_script_targets_suffix() {
        let fetcher = ChromiumPageFetcher::default();
        let script = fetcher.link_script();
        assert!(script.contains(r#"a[href$="Antigravity.tar.gz"]"#));
        assert!(script.contains("a.href"));
    }
}
