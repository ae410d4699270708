use antigravity_ua_core::fetch::{DEFAULT_DOWNLOAD_PAGE, TARBALL_SUFFIX};
use antigravity_ua_core::{
    LiveFetchConfig, SyncMode, SyncRequest, VersionSource, DEFAULT_TRACKED_FILE,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "antigravity-ua-sync",
    about = "Sync the Antigravity User-Agent version with the latest vendor release",
    author
)]
pub struct Cli {
    #[arg(long, help = "Only compare; exit 1 if an update is available")]
    pub check: bool,

    #[arg(long, help = "Show the change without writing the file")]
    pub dry_run: bool,

    #[arg(long = "version", value_name = "V", help = "Use this version as the latest")]
    pub explicit_version: Option<String>,

    #[arg(long, value_name = "URL", help = "Parse the latest version from a tarball download URL")]
    pub url: Option<String>,

    #[arg(
        long,
        env = "ANTIGRAVITY_UA_FILE",
        default_value = DEFAULT_TRACKED_FILE,
        help = "File holding the User-Agent constant"
    )]
    pub file: PathBuf,

    #[arg(
        long,
        env = "ANTIGRAVITY_DOWNLOAD_PAGE",
        default_value = DEFAULT_DOWNLOAD_PAGE,
        help = "Download page rendered when neither --version nor --url is given"
    )]
    pub page_url: String,

    #[arg(
        long,
        env = "ANTIGRAVITY_SETTLE_SECS",
        default_value = "10",
        help = "Seconds to wait for the download link to appear"
    )]
    pub settle_secs: u64,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// `--check` wins over `--dry-run`; neither writes.
    pub fn mode(&self) -> SyncMode {
        if self.check {
            SyncMode::Check
        } else if self.dry_run {
            SyncMode::DryRun
        } else {
            SyncMode::Apply
        }
    }

    pub fn to_request(&self) -> SyncRequest {
        SyncRequest {
            file: self.file.clone(),
            source: VersionSource::select(self.explicit_version.clone(), self.url.clone()),
            mode: self.mode(),
        }
    }

    pub fn live_fetch_config(&self) -> LiveFetchConfig {
        LiveFetchConfig {
            page_url: self.page_url.clone(),
            tarball_suffix: TARBALL_SUFFIX.to_string(),
            settle: Duration::from_secs(self.settle_secs),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("antigravity-ua-sync").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_use_live_page() {
        let cli = parse(&[]);
        let req = cli.to_request();
        assert_eq!(req.source, VersionSource::LivePage);
        assert_eq!(req.mode, SyncMode::Apply);
    }

    #[test]
    fn test_version_beats_url() {
        let cli = parse(&["--version", "1.15.8", "--url", "https://x/stable/1.16.2-1/a"]);
        assert_eq!(cli.to_request().source, VersionSource::ExplicitValue("1.15.8".into()));
    }

    #[test]
    fn test_url_source() {
        let cli = parse(&["--url", "https://x/stable/1.16.2-1/a"]);
        assert_eq!(
            cli.to_request().source,
            VersionSource::DownloadUrl("https://x/stable/1.16.2-1/a".into())
        );
    }

    #[test]
    fn test_modes() {
        assert_eq!(parse(&["--check"]).mode(), SyncMode::Check);
        assert_eq!(parse(&["--dry-run"]).mode(), SyncMode::DryRun);
        assert_eq!(parse(&["--check", "--dry-run"]).mode(), SyncMode::Check);
    }

    #[test]
    fn test_live_fetch_config() {
        let cli = parse(&["--page-url", "https://example.test/dl", "--settle-secs", "3"]);
        let config = cli.live_fetch_config();
        assert_eq!(config.page_url, "https://example.test/dl");
        assert_eq!(config.settle, Duration::from_secs(3));
        assert_eq!(config.tarball_suffix, TARBALL_SUFFIX);
    }
}
