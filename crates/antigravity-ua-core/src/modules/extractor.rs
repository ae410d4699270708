//! Version token extraction from free text.

use crate::models::VersionToken;
use regex::Regex;
use std::sync::OnceLock;

static USER_AGENT_REGEX: OnceLock<Regex> = OnceLock::new();
static TARBALL_URL_REGEX: OnceLock<Regex> = OnceLock::new();
static VERSION_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `antigravity/X.Y.Z`, capturing `X.Y.Z`.
pub fn get_user_agent_regex() -> &'static Regex {
    USER_AGENT_REGEX.get_or_init(|| {
        Regex::new(r"antigravity/([0-9]+\.[0-9]+\.[0-9]+)").expect("User-Agent regex is valid")
    })
}

/// Matches a `/X.Y.Z-<build>/` path segment, capturing `X.Y.Z`.
pub fn get_tarball_url_regex() -> &'static Regex {
    TARBALL_URL_REGEX.get_or_init(|| {
        Regex::new(r"/([0-9]+\.[0-9]+\.[0-9]+)-[0-9]+/").expect("Tarball URL regex is valid")
    })
}

/// Matches a whole `X.Y.Z` token, ASCII digits only.
pub fn get_version_token_regex() -> &'static Regex {
    VERSION_TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("Version token regex is valid")
    })
}

/// The two shapes a version is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPattern {
    /// `antigravity/<version>` inside the User-Agent constant.
    UserAgent,
    /// `/<version>-<build>/` inside a download URL; the build number is dropped.
    TarballUrl,
}

impl VersionPattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::UserAgent => get_user_agent_regex(),
            Self::TarballUrl => get_tarball_url_regex(),
        }
    }
}

/// Return the first version captured by `pattern` in `text`.
pub fn extract(text: &str, pattern: VersionPattern) -> Option<VersionToken> {
    pattern
        .regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| VersionToken::new(m.as_str()))
}
