//! Resolution of the "latest" version from the selected source.

use super::extractor::{extract, VersionPattern};
use crate::error::{UpdateError, UpdateResult};
use crate::fetch::PageFetcher;
use crate::models::{VersionSource, VersionToken};

/// Parse the version out of a tarball download URL.
pub fn version_from_url(url: &str) -> UpdateResult<VersionToken> {
    extract(url, VersionPattern::TarballUrl)
        .ok_or_else(|| UpdateError::UnparseableUrl { url: url.to_string() })
}

/// Resolve the latest version. `fetcher` is only consulted for [`VersionSource::LivePage`].
pub async fn resolve_latest(
    source: &VersionSource,
    fetcher: &dyn PageFetcher,
) -> UpdateResult<VersionToken> {
    let version = match source {
        VersionSource::ExplicitValue(value) => VersionToken::new(value.as_str()),
        VersionSource::DownloadUrl(url) => version_from_url(url)?,
        VersionSource::LivePage => {
            let href = fetcher.fetch_latest_href().await?.ok_or_else(|| {
                UpdateError::LinkNotFound {
                    page: fetcher.page_url().to_string(),
                    suffix: fetcher.tarball_suffix().to_string(),
                }
            })?;
            tracing::debug!(href = %href, "Found download link");
            version_from_url(&href)?
        },
    };
    tracing::info!(version = %version, source = source.label(), "Resolved latest version");
    Ok(version)
}
