//! Reading the version currently embedded in the tracked file.

use super::extractor::{extract, get_user_agent_regex, VersionPattern};
use crate::error::{UpdateError, UpdateResult};
use crate::models::VersionToken;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the User-Agent constant, relative to the repository root.
pub const DEFAULT_TRACKED_FILE: &str = "src-tauri/src/constants.rs";

/// The tracked file as read from disk, once per run.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    path: PathBuf,
    contents: String,
}

impl TrackedFile {
    /// Read the whole file. A missing file is reported as [`UpdateError::MissingFile`].
    pub fn load(path: impl Into<PathBuf>) -> UpdateResult<Self> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(UpdateError::MissingFile { path });
            },
            Err(source) => return Err(UpdateError::ReadFailure { path, source }),
        };
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded tracked file");
        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Version in the single `antigravity/X.Y.Z` occurrence.
    ///
    /// More than one occurrence is rejected so that every mode agrees with
    /// what the patcher would accept.
    pub fn current_version(&self) -> UpdateResult<VersionToken> {
        let count = get_user_agent_regex().find_iter(&self.contents).count();
        if count > 1 {
            return Err(UpdateError::MultipleMatches { count });
        }
        extract(&self.contents, VersionPattern::UserAgent)
            .ok_or_else(|| UpdateError::PatternNotFound { path: self.path.clone() })
    }
}

/// Read the version currently embedded in the file at `path`.
pub fn read_current(path: &Path) -> UpdateResult<VersionToken> {
    TrackedFile::load(path)?.current_version()
}
