//! Error taxonomy for the User-Agent version sync.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Resolving,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reading => "reading",
            Self::Resolving => "resolving",
            Self::Writing => "writing",
        })
    }
}

/// Every way a sync run can fail. All variants are terminal for the run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UpdateError {
    /// Tracked file does not exist at the configured path.
    #[error("Tracked file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// Tracked file exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `antigravity/X.Y.Z` occurrence in the tracked file.
    #[error("No 'antigravity/<version>' pattern found in {}", .path.display())]
    PatternNotFound { path: PathBuf },

    /// More than one `antigravity/X.Y.Z` occurrence; refusing to guess which to patch.
    #[error("Found {count} 'antigravity/<version>' occurrences, expected exactly one")]
    MultipleMatches { count: usize },

    /// Download URL carries no `/<version>-<build>/` segment.
    #[error("Could not parse a version from URL: {url}")]
    UnparseableUrl { url: String },

    /// Headless browser could not be started or is not compiled in.
    #[error("Page rendering unavailable: {reason}")]
    RenderingUnavailable { reason: String },

    /// Download page rendered but held no tarball link.
    #[error("No download link ending in '{suffix}' found on {page}")]
    LinkNotFound { page: String, suffix: String },

    /// Writing the patched contents back failed.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    /// Stage the failure belongs to, for diagnostics.
    pub fn stage(&self) -> Stage {
        match self {
            Self::MissingFile { .. }
            | Self::ReadFailure { .. }
            | Self::PatternNotFound { .. }
            | Self::MultipleMatches { .. } => Stage::Reading,
            Self::UnparseableUrl { .. }
            | Self::RenderingUnavailable { .. }
            | Self::LinkNotFound { .. } => Stage::Resolving,
            Self::WriteFailure { .. } => Stage::Writing,
        }
    }
}

/// Result type alias for sync operations.
pub type UpdateResult<T> = Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_mapping() {
        let missing = UpdateError::MissingFile { path: PathBuf::from("a.rs") };
        assert_eq!(missing.stage(), Stage::Reading);

        let url = UpdateError::UnparseableUrl { url: "https://x".to_string() };
        assert_eq!(url.stage(), Stage::Resolving);

        let multi = UpdateError::MultipleMatches { count: 2 };
        assert_eq!(multi.stage(), Stage::Reading);
    }

    #[test]
    fn test_error_display() {
        let err = UpdateError::LinkNotFound {
            page: "https://antigravity.google/download/linux".to_string(),
            suffix: "Antigravity.tar.gz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Antigravity.tar.gz"));
        assert!(msg.contains("download/linux"));
        assert_eq!(Stage::Writing.to_string(), "writing");
    }
}
