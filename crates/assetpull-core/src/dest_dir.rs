//! Destination directory setup.
//!
//! The directory is created once per run, non-recursively, before any asset is
//! requested. What happens when something already occupies the path is an
//! explicit policy.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do when the destination path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirPolicy {
    /// Any existing entry at the path is an error (second runs fail).
    #[default]
    FailIfExists,
    /// An existing directory is reused and its files overwritten; a non-directory is still an error.
    ReuseIfDirectory,
}

impl DirPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DirPolicy::FailIfExists => "fail-if-exists",
            DirPolicy::ReuseIfDirectory => "reuse-if-directory",
        }
    }
}

/// Creates `path` (parent must exist) according to `policy`.
pub fn prepare(path: &Path, policy: DirPolicy) -> Result<(), FetchError> {
    if policy == DirPolicy::ReuseIfDirectory && path.is_dir() {
        tracing::debug!("reusing existing directory {}", path.display());
        return Ok(());
    }

    fs::create_dir(path).map_err(|source| FetchError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("created directory {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("imgs");
        prepare(&dest, DirPolicy::FailIfExists).unwrap();
        assert!(dest.is_dir());
    }

    #[test]
    fn fail_if_exists_rejects_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("imgs");
        fs::create_dir(&dest).unwrap();
        let err = prepare(&dest, DirPolicy::FailIfExists).unwrap_err();
        match err {
            FetchError::DirectoryCreation { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists)
            }
            other => panic!("expected DirectoryCreation, got {other:?}"),
        }
    }

    #[test]
    fn reuse_keeps_existing_directory_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("imgs");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("old.jpg"), b"old").unwrap();
        prepare(&dest, DirPolicy::ReuseIfDirectory).unwrap();
        assert_eq!(fs::read(dest.join("old.jpg")).unwrap(), b"old");
    }

    #[test]
    fn plain_file_fails_under_both_policies() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("imgs");
        fs::write(&dest, b"not a dir").unwrap();
        for policy in [DirPolicy::FailIfExists, DirPolicy::ReuseIfDirectory] {
            assert!(matches!(
                prepare(&dest, policy),
                Err(FetchError::DirectoryCreation { .. })
            ));
        }
    }

    #[test]
    fn missing_parent_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a").join("imgs");
        assert!(matches!(
            prepare(&dest, DirPolicy::ReuseIfDirectory),
            Err(FetchError::DirectoryCreation { .. })
        ));
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn policy_names() {
        assert_eq!(DirPolicy::default(), DirPolicy::FailIfExists);
        assert_eq!(DirPolicy::FailIfExists.as_str(), "fail-if-exists");
        assert_eq!(DirPolicy::ReuseIfDirectory.as_str(), "reuse-if-directory");
    }
}
