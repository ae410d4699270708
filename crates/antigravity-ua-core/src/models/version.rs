//! Version token and the sources a "latest" version can come from.

use crate::modules::extractor::get_version_token_regex;
use std::fmt;

/// A release identifier such as `1.15.8`.
///
/// Compared only by equality; never parsed into numeric components.
/// Values supplied verbatim on the command line may not be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token has the `digits.digits.digits` shape.
    pub fn is_well_formed(&self) -> bool {
        get_version_token_regex().is_match(&self.0)
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where the "latest" version is taken from. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Literal value, used verbatim.
    ExplicitValue(String),
    /// Tarball download URL carrying `/<version>-<build>/`.
    DownloadUrl(String),
    /// Render the vendor download page and read the tarball link.
    LivePage,
}

impl VersionSource {
    /// Pick a source by precedence: explicit value, then URL, then live page.
    pub fn select(explicit: Option<String>, url: Option<String>) -> Self {
        match (explicit, url) {
            (Some(value), _) => Self::ExplicitValue(value),
            (None, Some(url)) => Self::DownloadUrl(url),
            (None, None) => Self::LivePage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ExplicitValue(_) => "explicit",
            Self::DownloadUrl(_) => "url",
            Self::LivePage => "live-page",
        }
    }
}
