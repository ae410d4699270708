use super::VersionToken;

/// Result of a completed sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Tracked file already carries the latest version.
    NoChangeNeeded { version: VersionToken },
    /// `--check` found a newer value; the file was not touched.
    UpdateAvailable { current: VersionToken, latest: VersionToken },
    /// Tracked file was rewritten.
    Updated { from: VersionToken, to: VersionToken },
    /// Dry run: the file would have been rewritten.
    WouldUpdate { from: VersionToken, to: VersionToken },
}

impl UpdateOutcome {
    /// Process exit code for this outcome. Failures always exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoChangeNeeded { .. } | Self::Updated { .. } | Self::WouldUpdate { .. } => 0,
            Self::UpdateAvailable { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let v = VersionToken::from("1.15.8");
        let n = VersionToken::from("1.16.0");
        assert_eq!(UpdateOutcome::NoChangeNeeded { version: v.clone() }.exit_code(), 0);
        assert_eq!(UpdateOutcome::Updated { from: v.clone(), to: n.clone() }.exit_code(), 0);
        assert_eq!(UpdateOutcome::WouldUpdate { from: v.clone(), to: n.clone() }.exit_code(), 0);
        assert_eq!(UpdateOutcome::UpdateAvailable { current: v, latest: n }.exit_code(), 1);
    }
}
