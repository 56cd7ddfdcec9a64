// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Path constants and utilities for the document storage layout.

use std::path::{Path, PathBuf};

/// Base directory for all persistent documents.
pub const DATA_ROOT: &str = "/data";

/// Check that an identifier is safe to use as a file stem.
///
/// Generated identifiers are UUIDs. Anything carrying path syntax
/// (separators, dots) must never reach a join; repositories treat such
/// identifiers as not found.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Storage path utilities for the document store.
///
/// Each logical collection lives in its own directory, one JSON file per
/// document, named by the document's identifier.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all stored data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== Job Paths ==========

    /// Directory containing the `jobs` collection.
    pub fn jobs_dir(&self) -> PathBuf {
        self.root.join("jobs")
    }

    /// Path to a specific job document.
    pub fn job(&self, job_id: &str) -> PathBuf {
        self.jobs_dir().join(format!("{job_id}.json"))
    }

    // ========== Job Application Paths ==========

    /// Directory containing the `job-applications` collection.
    pub fn applications_dir(&self) -> PathBuf {
        self.root.join("job-applications")
    }

    /// Path to a specific job application document.
    pub fn application(&self, application_id: &str) -> PathBuf {
        self.applications_dir().join(format!("{application_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_use_data_root() {
        let paths = StoragePaths::default();
        assert_eq!(paths.root(), Path::new("/data"));
    }

    #[test]
    fn custom_root_for_testing() {
        let paths = StoragePaths::new("/tmp/test-data");
        assert_eq!(paths.root(), Path::new("/tmp/test-data"));
        assert_eq!(
            paths.job("job-123"),
            PathBuf::from("/tmp/test-data/jobs/job-123.json")
        );
    }

    #[test]
    fn job_paths_are_correct() {
        let paths = StoragePaths::default();
        assert_eq!(paths.jobs_dir(), PathBuf::from("/data/jobs"));
        assert_eq!(paths.job("j1"), PathBuf::from("/data/jobs/j1.json"));
    }

    #[test]
    fn id_validation_rejects_path_syntax() {
        assert!(is_valid_id("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_valid_id("job_1"));

        assert!(!is_valid_id(""));
        assert!(!is_valid_id("../secret"));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("a\\b"));
        assert!(!is_valid_id("."));
        assert!(!is_valid_id("a.json"));
    }

    #[test]
    fn application_paths_are_correct() {
        let paths = StoragePaths::default();
        assert_eq!(
            paths.applications_dir(),
            PathBuf::from("/data/job-applications")
        );
        assert_eq!(
            paths.application("app-456"),
            PathBuf::from("/data/job-applications/app-456.json")
        );
    }
}
