//! One sync run: read current, resolve latest, compare, then report or patch.

use crate::error::UpdateResult;
use crate::fetch::PageFetcher;
use crate::models::{UpdateOutcome, VersionSource, VersionToken};
use crate::modules::current::TrackedFile;
use crate::modules::{patcher, resolver};
use std::path::PathBuf;

/// What to do once an update is known to be available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Rewrite the tracked file.
    #[default]
    Apply,
    /// Compute the change, never write.
    DryRun,
    /// Only compare; an available update is a non-zero exit.
    Check,
}

#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub file: PathBuf,
    pub source: VersionSource,
    pub mode: SyncMode,
}

/// Everything the CLI needs to print after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub file: PathBuf,
    pub current: VersionToken,
    pub latest: VersionToken,
    pub outcome: UpdateOutcome,
}

/// Execute one run. Any error ends the run; nothing is retried.
pub async fn run(request: &SyncRequest, fetcher: &dyn PageFetcher) -> UpdateResult<SyncReport> {
    let tracked = TrackedFile::load(&request.file)?;
    let current = tracked.current_version()?;
    tracing::info!(path = %request.file.display(), version = %current, "Current version");

    let latest = resolver::resolve_latest(&request.source, fetcher).await?;
    if matches!(request.source, VersionSource::ExplicitValue(_)) && !latest.is_well_formed() {
        tracing::warn!(version = %latest, "Explicit version does not look like X.Y.Z");
    }

    let outcome = if current == latest {
        UpdateOutcome::NoChangeNeeded { version: current.clone() }
    } else {
        match request.mode {
            SyncMode::Check => {
                UpdateOutcome::UpdateAvailable { current: current.clone(), latest: latest.clone() }
            },
            SyncMode::DryRun | SyncMode::Apply => {
                let dry_run = request.mode == SyncMode::DryRun;
                let patch = patcher::apply(tracked.contents(), &latest)?;
                patcher::write_patch(tracked.path(), &patch, dry_run)?;
                if dry_run {
                    UpdateOutcome::WouldUpdate { from: current.clone(), to: latest.clone() }
                } else {
                    UpdateOutcome::Updated { from: current.clone(), to: latest.clone() }
                }
            },
        }
    };

    Ok(SyncReport { file: request.file.clone(), current, latest, outcome })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::UpdateError;
    use crate::fetch::{StaticPageFetcher, UnavailablePageFetcher};
    use std::fs;

    fn setup(version: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constants.rs");
        fs::write(&path, format!("pub const USER_AGENT: &str = \"antigravity/{version}\";\n"))
            .unwrap();
        (dir, path)
    }

    fn request(file: PathBuf, version: &str, mode: SyncMode) -> SyncRequest {
        SyncRequest { file, source: VersionSource::ExplicitValue(version.into()), mode }
    }

    #[tokio::test]
    async fn test_up_to_date_in_every_mode() {
        let (_dir, path) = setup("1.15.8");
        for mode in [SyncMode::Apply, SyncMode::DryRun, SyncMode::Check] {
            let report =
                run(&request(path.clone(), "1.15.8", mode), &UnavailablePageFetcher::default())
                    .await
                    .unwrap();
            assert_eq!(report.outcome, UpdateOutcome::NoChangeNeeded { version: "1.15.8".into() });
            assert_eq!(report.outcome.exit_code(), 0);
        }
    }

    #[tokio::test]
    async fn test_multiple_matches_fail_before_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constants.rs");
        let body = "// antigravity/1.0.0\nconst UA: &str = \"antigravity/1.0.0\";\n";
        fs::write(&path, body).unwrap();

        let req = request(path.clone(), "1.0.1", SyncMode::Apply);
        let err = run(&req, &UnavailablePageFetcher::default()).await.unwrap_err();
        assert!(matches!(err, UpdateError::MultipleMatches { count: 2 }));
        assert_eq!(fs::read_to_string(&path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_missing_file_skips_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let req = SyncRequest {
            file: dir.path().join("constants.rs"),
            source: VersionSource::LivePage,
            mode: SyncMode::Apply,
        };
        // A live fetch would have produced RenderingUnavailable instead.
        let err = run(&req, &UnavailablePageFetcher::default()).await.unwrap_err();
        assert!(matches!(err, UpdateError::MissingFile { .. }));
    }

    #[tokio::test]
    async fn test_live_page_update() {
        let (_dir, path) = setup("1.15.8");
        let fetcher = StaticPageFetcher::new(Some(
            "https://x/stable/1.16.2-99887766/linux-x64/Antigravity.tar.gz".into(),
        ));
        let req =
            SyncRequest { file: path.clone(), source: VersionSource::LivePage, mode: SyncMode::Apply };
        let report = run(&req, &fetcher).await.unwrap();
        assert_eq!(report.latest, VersionToken::from("1.16.2"));
        assert!(fs::read_to_string(&path).unwrap().contains("antigravity/1.16.2"));
    }
}
