// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Job repository over the document store.
//!
//! Each job listing is stored as a separate JSON file under the `jobs`
//! collection directory, named by its identifier.

use std::path::PathBuf;

use crate::models::{DocumentId, Job};

use super::super::{paths, DocumentStorage, StorageError, StorageResult};

/// Repository for job listing operations.
pub struct JobRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> JobRepository<'a> {
    /// Create a new JobRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Resolve the document path, rejecting identifiers with path syntax.
    fn document_path(&self, job_id: &DocumentId) -> StorageResult<PathBuf> {
        if !paths::is_valid_id(job_id.as_str()) {
            return Err(StorageError::NotFound(format!("Job {job_id}")));
        }
        Ok(self.storage.paths().job(job_id.as_str()))
    }

    /// Check if a job exists.
    pub fn exists(&self, job_id: &DocumentId) -> bool {
        self.document_path(job_id)
            .map(|path| self.storage.exists(path))
            .unwrap_or(false)
    }

    /// Get a job by ID.
    pub fn get(&self, job_id: &DocumentId) -> StorageResult<Job> {
        let path = self.document_path(job_id)?;
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Job {job_id}")));
        }
        self.storage.read_json(path)
    }

    /// Look up a job by ID, returning `None` when it is missing.
    pub fn find(&self, job_id: &DocumentId) -> StorageResult<Option<Job>> {
        match self.get(job_id) {
            Ok(job) => Ok(Some(job)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Store a new job.
    pub fn create(&self, job: &Job) -> StorageResult<()> {
        let path = self.document_path(&job.id)?;
        if self.storage.exists(&path) {
            return Err(StorageError::AlreadyExists(format!("Job {}", job.id)));
        }
        self.storage.write_json(path, job)
    }

    /// Delete a job by ID.
    pub fn delete(&self, job_id: &DocumentId) -> StorageResult<()> {
        let path = self.document_path(job_id)?;
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Job {job_id}")));
        }
        self.storage.delete(path)
    }

    /// List all jobs.
    pub fn list(&self) -> StorageResult<Vec<Job>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().jobs_dir(), "json")?;

        let mut jobs = Vec::new();
        for id in ids {
            match self.storage.read_json::<Job>(self.storage.paths().job(&id)) {
                Ok(job) => jobs.push(job),
                Err(e) => tracing::warn!("Failed to read job {}: {}", id, e),
            }
        }
        Ok(jobs)
    }

    /// List all jobs posted by the given email.
    pub fn list_by_poster(&self, poster_email: &str) -> StorageResult<Vec<Job>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|job| job.poster_email == poster_email)
            .collect())
    }
}
