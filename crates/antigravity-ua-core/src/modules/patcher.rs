//! In-place substitution of the User-Agent version.

use super::extractor::get_user_agent_regex;
use crate::error::{UpdateError, UpdateResult};
use crate::models::VersionToken;
use regex::NoExpand;
use std::fs;
use std::path::Path;

/// Contents after substitution, and whether they differ from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub contents: String,
    pub changed: bool,
}

/// Rewrite `antigravity/<old>` to `antigravity/<new_version>`.
///
/// Everything outside the matched span is passed through byte for byte.
/// More than one match is an error; zero matches yields an unchanged patch.
pub fn apply(current_contents: &str, new_version: &VersionToken) -> UpdateResult<Patch> {
    let re = get_user_agent_regex();
    let count = re.find_iter(current_contents).count();
    if count > 1 {
        return Err(UpdateError::MultipleMatches { count });
    }

    let replacement = format!("antigravity/{new_version}");
    let contents = re.replace_all(current_contents, NoExpand(&replacement)).into_owned();
    let changed = contents != current_contents;
    Ok(Patch { contents, changed })
}

/// Persist `patch` to `path` unless this is a dry run or nothing changed.
///
/// Returns whether the file was written.
pub fn write_patch(path: &Path, patch: &Patch, dry_run: bool) -> UpdateResult<bool> {
    if dry_run || !patch.changed {
        tracing::debug!(path = %path.display(), dry_run, changed = patch.changed, "Skipping write");
        return Ok(false);
    }
    fs::write(path, &patch.contents)
        .map_err(|source| UpdateError::WriteFailure { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), bytes = patch.contents.len(), "Wrote tracked file");
    Ok(true)
}
